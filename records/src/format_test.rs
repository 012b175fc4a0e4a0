use super::*;
use crate::model::{BidRecord, BidStatus};

fn bid() -> BidRecord {
    BidRecord {
        id: "BID-9".to_owned(),
        name: "Harbor Lofts".to_owned(),
        client: "Pier Holdings".to_owned(),
        location: "Seattle, WA".to_owned(),
        budget: 1_250_000.0,
        status: BidStatus::UnderReview,
        due_date: "2025-04-02".to_owned(),
        estimator: "R. Diaz".to_owned(),
    }
}

#[test]
fn currency_groups_thousands() {
    assert_eq!(currency(0.0), "$0");
    assert_eq!(currency(950.0), "$950");
    assert_eq!(currency(1_250_000.0), "$1,250,000");
    assert_eq!(currency(-4_500.4), "-$4,500");
}

#[test]
fn number_trims_trailing_zero_decimals() {
    assert_eq!(number(1200.0), "1,200");
    assert_eq!(number(12.5), "12.5");
    assert_eq!(number(3.456), "3.46");
}

#[test]
fn percent_appends_sign() {
    assert_eq!(percent(45.0), "45%");
    assert_eq!(percent(12.5), "12.5%");
}

#[test]
fn cell_text_formats_by_column_kind() {
    let record = bid();
    let column = |key: &str| BidRecord::column(key).unwrap();
    assert_eq!(cell_text(&record, column("budget"), DateFormat::Iso), "$1,250,000");
    assert_eq!(cell_text(&record, column("status"), DateFormat::Iso), "Under Review");
    assert_eq!(cell_text(&record, column("due_date"), DateFormat::Iso), "Apr 2, 2025");
    assert_eq!(cell_text(&record, column("name"), DateFormat::Iso), "Harbor Lofts");
}

#[test]
fn cell_text_shows_unparseable_date_verbatim() {
    let mut record = bid();
    record.due_date = "TBD".to_owned();
    let column = BidRecord::column("due_date").unwrap();
    assert_eq!(cell_text(&record, column, DateFormat::Iso), "TBD");
}
