use super::*;
use crate::model::{BidRecord, BidStatus, EstimateRecord};
use crate::seed;
use time::macros::date;

#[test]
fn demo_dataset_summary() {
    let summary = summarize(&seed::demo(), DateFormat::Iso, date!(2025 - 03 - 20));
    assert_eq!(summary.active_bids, 5);
    assert!((summary.pipeline_value - 70_800_000.0).abs() < 0.5);
    assert_eq!(summary.bids_due_soon, 2);
    assert_eq!(summary.deliveries_in_transit, 2);
    assert_eq!(summary.delayed_deliveries, 1);
    assert_eq!(summary.stages_in_progress, 2);
    assert!((summary.approved_estimate_value - 22_100_000.0).abs() < 0.5);
}

#[test]
fn due_soon_window_is_inclusive_and_skips_overdue() {
    let mut data = Dataset::default();
    for (id, due) in [("a", "2025-03-20"), ("b", "2025-04-03"), ("c", "2025-04-04"), ("d", "2025-03-19")] {
        data.bids.push(BidRecord {
            id: id.to_owned(),
            name: id.to_owned(),
            client: String::new(),
            location: String::new(),
            budget: 0.0,
            status: BidStatus::Submitted,
            due_date: due.to_owned(),
            estimator: String::new(),
        });
    }
    let summary = summarize(&data, DateFormat::Iso, date!(2025 - 03 - 20));
    assert_eq!(summary.active_bids, 4);
    assert_eq!(summary.bids_due_soon, 2);
}

#[test]
fn inactive_bids_do_not_count() {
    let mut data = seed::demo();
    for bid in &mut data.bids {
        bid.status = BidStatus::Lost;
    }
    let summary = summarize(&data, DateFormat::Iso, date!(2025 - 03 - 20));
    assert_eq!(summary.active_bids, 0);
    assert_eq!(summary.bids_due_soon, 0);
    assert!(summary.pipeline_value.abs() < f64::EPSILON);
}

#[test]
fn count_by_status_follows_status_order() {
    let counts = count_by_status::<EstimateRecord>(&seed::estimates());
    assert_eq!(counts, [("draft", 1), ("pending", 1), ("approved", 2), ("rejected", 1)]);
}
