use super::*;

fn slides(count: usize) -> Vec<Slide<()>> {
    (0..count)
        .map(|i| {
            let slide = Slide::new(format!("s{i}"), format!("Slide {i}"), ());
            if i + 1 == count { slide.as_final() } else { slide }
        })
        .collect()
}

fn carousel(count: usize) -> Carousel<()> {
    Carousel::new(slides(count), false).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_idle_on_first_slide() {
    let c = carousel(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.direction(), Direction::None);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.len(), 3);
    assert!(!c.is_empty());
}

#[test]
fn new_rejects_empty_slide_list() {
    let err = Carousel::<()>::new(Vec::new(), false).unwrap_err();
    assert_eq!(err, CarouselError::EmptySlides);
}

// =============================================================
// next / previous
// =============================================================

#[test]
fn next_advances_forward() {
    let mut c = carousel(3);
    assert_eq!(c.next(), Outcome::Moved { from: 0, to: 1, direction: Direction::Forward });
    assert_eq!(c.index(), 1);
    assert_eq!(c.direction(), Direction::Forward);
}

#[test]
fn next_on_last_slide_is_ignored() {
    let mut c = carousel(2);
    c.next();
    assert_eq!(c.next(), Outcome::Ignored);
    assert_eq!(c.index(), 1);
}

#[test]
fn previous_on_first_slide_is_ignored() {
    let mut c = carousel(3);
    assert_eq!(c.previous(), Outcome::Ignored);
    assert_eq!(c.index(), 0);
    assert_eq!(c.direction(), Direction::None);
}

#[test]
fn previous_moves_backward() {
    let mut c = carousel(3);
    c.next();
    c.next();
    assert_eq!(c.previous(), Outcome::Moved { from: 2, to: 1, direction: Direction::Backward });
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn index_stays_in_bounds_for_mixed_sequences() {
    let mut c = carousel(4);
    let script = [1_i32, 1, 1, 1, 1, -1, 7, -1, -1, -1, -1, 3, 2, 99, 0, 1];
    for step in script {
        match step {
            1 => {
                c.next();
            }
            -1 => {
                c.previous();
            }
            n => {
                c.select(usize::try_from(n).unwrap());
            }
        }
        assert!(c.index() < c.len(), "index {} out of bounds", c.index());
    }
}

// =============================================================
// select
// =============================================================

#[test]
fn select_forward_and_backward_sets_direction() {
    let mut c = carousel(5);
    assert_eq!(c.select(3), Outcome::Moved { from: 0, to: 3, direction: Direction::Forward });
    assert_eq!(c.direction(), Direction::Forward);
    assert_eq!(c.select(1), Outcome::Moved { from: 3, to: 1, direction: Direction::Backward });
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut c = carousel(3);
    assert_eq!(c.select(3), Outcome::Ignored);
    assert_eq!(c.select(usize::MAX), Outcome::Ignored);
    assert_eq!(c.index(), 0);
}

#[test]
fn select_current_index_is_ignored() {
    let mut c = carousel(3);
    c.next();
    assert_eq!(c.select(1), Outcome::Ignored);
    assert_eq!(c.direction(), Direction::Forward);
}

#[test]
fn first_and_last_jump_to_ends() {
    let mut c = carousel(4);
    assert_eq!(c.last(), Outcome::Moved { from: 0, to: 3, direction: Direction::Forward });
    assert_eq!(c.first(), Outcome::Moved { from: 3, to: 0, direction: Direction::Backward });
    assert_eq!(c.first(), Outcome::Ignored);
}

// =============================================================
// autoplay tick
// =============================================================

#[test]
fn autoplay_tick_requires_autoplay_enabled() {
    let mut c = carousel(3);
    assert_eq!(c.autoplay_tick(), Outcome::Ignored);

    let mut auto = Carousel::new(slides(3), true).unwrap();
    assert!(auto.autoplay_enabled());
    assert!(!auto.autoplay_tick().is_ignored());
    assert!(!auto.autoplay_tick().is_ignored());
    assert!(auto.autoplay_tick().is_ignored());
    assert_eq!(auto.index(), 2);
}

// =============================================================
// exit / complete
// =============================================================

#[test]
fn four_slide_walkthrough_completes_on_final_slide() {
    let mut c = carousel(4);
    c.next();
    c.next();
    c.next();
    assert_eq!(c.index(), 3);
    assert_eq!(c.current_slide().id, "s3");
    assert!(c.can_complete());
    assert_eq!(c.complete(), Outcome::Exiting(ExitKind::Complete));
    assert!(c.is_exiting());
    assert_eq!(c.phase(), Phase::Exiting(ExitKind::Complete));
}

#[test]
fn complete_on_non_final_slide_is_ignored() {
    let mut c = carousel(3);
    assert!(!c.can_complete());
    assert_eq!(c.complete(), Outcome::Ignored);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn complete_honors_final_flag_not_position() {
    let list = vec![Slide::new("a", "A", ()), Slide::new("b", "B", ()).as_final(), Slide::new("c", "C", ())];
    let mut c = Carousel::new(list, false).unwrap();
    c.next();
    assert_eq!(c.complete(), Outcome::Exiting(ExitKind::Complete));
}

#[test]
fn exit_is_idempotent() {
    let mut c = carousel(3);
    assert_eq!(c.exit(), Outcome::Exiting(ExitKind::Exit));
    assert_eq!(c.exit(), Outcome::Ignored);
    assert_eq!(c.phase(), Phase::Exiting(ExitKind::Exit));
}

#[test]
fn complete_after_exit_is_ignored() {
    let mut c = carousel(1);
    c.exit();
    assert_eq!(c.complete(), Outcome::Ignored);
    assert_eq!(c.phase(), Phase::Exiting(ExitKind::Exit));
}

#[test]
fn navigation_is_suppressed_while_exiting() {
    let mut c = carousel(4);
    c.next();
    c.exit();
    assert_eq!(c.next(), Outcome::Ignored);
    assert_eq!(c.previous(), Outcome::Ignored);
    assert_eq!(c.select(3), Outcome::Ignored);
    assert_eq!(c.index(), 1);
    assert!(!c.can_complete());
}

// =============================================================
// commands + progress
// =============================================================

#[test]
fn apply_dispatches_commands() {
    let mut c = carousel(3);
    assert!(!c.apply(Command::Next).is_ignored());
    assert!(!c.apply(Command::Last).is_ignored());
    assert_eq!(c.apply(Command::Complete), Outcome::Exiting(ExitKind::Complete));
}

#[test]
fn progress_and_position_label_are_one_based() {
    let mut c = carousel(4);
    assert_eq!(c.position_label(), "1 / 4");
    assert!((c.progress() - 0.25).abs() < f64::EPSILON);
    c.last();
    assert_eq!(c.position_label(), "4 / 4");
    assert!((c.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn direction_between_and_enter_class() {
    assert_eq!(Direction::between(1, 2), Direction::Forward);
    assert_eq!(Direction::between(2, 1), Direction::Backward);
    assert_eq!(Direction::between(2, 2), Direction::None);
    assert_eq!(Direction::Forward.enter_class(), "slide--enter-right");
    assert_eq!(Direction::Backward.enter_class(), "slide--enter-left");
    assert_eq!(Direction::None.enter_class(), "slide--enter-fade");
}
