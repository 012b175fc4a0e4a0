use super::*;

#[test]
fn missing_tab_opens_bids() {
    assert_eq!(resolve_tab(None), Some(WorkspaceTab::Bids));
    assert_eq!(resolve_tab(Some("")), Some(WorkspaceTab::Bids));
}

#[test]
fn tab_slugs_resolve() {
    assert_eq!(resolve_tab(Some("estimates")), Some(WorkspaceTab::Estimates));
    assert_eq!(resolve_tab(Some("payroll")), None);
}
