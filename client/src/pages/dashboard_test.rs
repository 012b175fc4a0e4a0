use super::*;

#[test]
fn due_soon_hint_pluralizes() {
    let mut summary = DashboardSummary::default();
    assert_eq!(due_soon_hint(&summary), "Nothing due in the next two weeks");
    summary.bids_due_soon = 1;
    assert_eq!(due_soon_hint(&summary), "1 bid due in the next two weeks");
    summary.bids_due_soon = 3;
    assert_eq!(due_soon_hint(&summary), "3 bids due in the next two weeks");
}

#[test]
fn featured_tours_are_unique() {
    for (i, tour) in FEATURED_TOURS.iter().enumerate() {
        assert!(!FEATURED_TOURS[i + 1..].contains(tour));
    }
}
