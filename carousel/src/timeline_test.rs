use super::*;

#[test]
fn new_without_interval_has_no_deadline() {
    let timeline = Timeline::new(None, 100);
    assert!(!timeline.autoplay_armed());
    assert_eq!(timeline.next_deadline(), None);
}

#[test]
fn new_with_interval_arms_first_period() {
    let timeline = Timeline::new(Some(1000), 100);
    assert!(timeline.autoplay_armed());
    assert_eq!(timeline.next_deadline(), Some(1100));
}

#[test]
fn zero_interval_is_clamped_to_one_ms() {
    let mut timeline = Timeline::new(Some(0), 0);
    assert_eq!(timeline.next_deadline(), Some(1));
    assert_eq!(timeline.take_due(1), Some(Due::Autoplay));
    assert_eq!(timeline.next_deadline(), Some(2));
}

#[test]
fn take_due_before_deadline_returns_none() {
    let mut timeline = Timeline::new(Some(1000), 0);
    assert_eq!(timeline.take_due(999), None);
}

#[test]
fn take_due_rearms_autoplay_on_fixed_period() {
    let mut timeline = Timeline::new(Some(1000), 0);
    assert_eq!(timeline.take_due(2500), Some(Due::Autoplay));
    assert_eq!(timeline.next_deadline(), Some(2000));
    assert_eq!(timeline.take_due(2500), Some(Due::Autoplay));
    assert_eq!(timeline.next_deadline(), Some(3000));
    assert_eq!(timeline.take_due(2500), None);
}

#[test]
fn restart_autoplay_pushes_deadline_out() {
    let mut timeline = Timeline::new(Some(1000), 0);
    timeline.restart_autoplay(800);
    assert_eq!(timeline.next_deadline(), Some(1800));
}

#[test]
fn stop_autoplay_disarms_until_restart() {
    let mut timeline = Timeline::new(Some(1000), 0);
    timeline.stop_autoplay();
    assert_eq!(timeline.take_due(5000), None);
    timeline.restart_autoplay(5000);
    assert_eq!(timeline.next_deadline(), Some(6000));
}

#[test]
fn pause_blocks_restart_until_resume() {
    let mut timeline = Timeline::new(Some(1000), 0);
    timeline.pause();
    assert!(timeline.is_paused());
    timeline.restart_autoplay(10);
    assert_eq!(timeline.next_deadline(), None);
    timeline.resume(400);
    assert!(!timeline.is_paused());
    assert_eq!(timeline.next_deadline(), Some(1400));
}

#[test]
fn pause_without_autoplay_is_noop() {
    let mut timeline = Timeline::new(None, 0);
    timeline.pause();
    assert!(!timeline.is_paused());
}

#[test]
fn exit_fires_once_after_delay() {
    let mut timeline = Timeline::new(None, 0);
    timeline.schedule_exit(ExitKind::Exit, 100, 500);
    assert!(timeline.exit_pending());
    assert_eq!(timeline.take_due(599), None);
    assert_eq!(timeline.take_due(600), Some(Due::Exit(ExitKind::Exit)));
    assert_eq!(timeline.take_due(10_000), None);
    assert!(!timeline.exit_pending());
}

#[test]
fn first_scheduled_exit_wins() {
    let mut timeline = Timeline::new(None, 0);
    timeline.schedule_exit(ExitKind::Complete, 0, 100);
    timeline.schedule_exit(ExitKind::Exit, 0, 10);
    assert_eq!(timeline.take_due(100), Some(Due::Exit(ExitKind::Complete)));
}

#[test]
fn earlier_autoplay_fires_before_exit() {
    let mut timeline = Timeline::new(Some(100), 0);
    timeline.schedule_exit(ExitKind::Exit, 50, 200);
    assert_eq!(timeline.next_deadline(), Some(100));
    assert_eq!(timeline.take_due(300), Some(Due::Autoplay));
    assert_eq!(timeline.take_due(300), Some(Due::Autoplay));
    assert_eq!(timeline.take_due(300), Some(Due::Exit(ExitKind::Exit)));
}

#[test]
fn cancel_disarms_everything_permanently() {
    let mut timeline = Timeline::new(Some(100), 0);
    timeline.schedule_exit(ExitKind::Exit, 0, 50);
    timeline.cancel();
    assert!(timeline.is_cancelled());
    assert_eq!(timeline.next_deadline(), None);
    assert_eq!(timeline.take_due(u64::MAX), None);

    timeline.restart_autoplay(0);
    timeline.schedule_exit(ExitKind::Complete, 0, 0);
    assert_eq!(timeline.take_due(u64::MAX), None);
}
