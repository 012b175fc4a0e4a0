use super::*;
use crate::model::{BidRecord, BidStatus};

fn bids() -> Vec<BidRecord> {
    vec![
        BidRecord {
            id: "B1".to_owned(),
            name: "Harbor Lofts".to_owned(),
            client: "Pier Holdings".to_owned(),
            location: "Tacoma, WA".to_owned(),
            budget: 900_000.0,
            status: BidStatus::Draft,
            due_date: "2025-04-02".to_owned(),
            estimator: "M. Chen".to_owned(),
        },
        BidRecord {
            id: "B2".to_owned(),
            name: "Cedar School".to_owned(),
            client: "Cedar USD".to_owned(),
            location: "Boise, ID".to_owned(),
            budget: 2_500_000.0,
            status: BidStatus::Submitted,
            due_date: "2025-03-15".to_owned(),
            estimator: "L. Okafor".to_owned(),
        },
    ]
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn begin_seeds_draft_with_raw_value() {
    let records = bids();
    let mut session = EditSession::new();
    let edit = session.begin(&records[1], "budget").unwrap();
    assert_eq!(edit.key, CellKey::new("B2", "budget"));
    assert_eq!(edit.kind, FieldKind::Currency);
    assert_eq!(edit.draft, "2500000");
    assert!(session.is_editing("B2", "budget"));
    assert!(!session.is_editing("B1", "budget"));
}

#[test]
fn begin_rejects_read_only_and_unknown_fields() {
    let records = bids();
    let mut session = EditSession::new();
    assert_eq!(session.begin(&records[0], "id").unwrap_err(), RecordsError::ReadOnlyField("id".to_owned()));
    assert_eq!(session.begin(&records[0], "weight").unwrap_err(), RecordsError::UnknownField("weight".to_owned()));
    assert!(session.active().is_none());
}

#[test]
fn begin_on_another_cell_replaces_the_open_one() {
    let records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "name").unwrap();
    session.begin(&records[1], "client").unwrap();
    assert!(session.is_editing("B2", "client"));
    assert!(!session.is_editing("B1", "name"));
}

#[test]
fn cancel_discards_draft() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "name").unwrap();
    session.set_draft("Something Else");
    assert_eq!(session.cancel(), Some(CellKey::new("B1", "name")));
    assert!(session.active().is_none());
    assert_eq!(session.commit(&mut records, DateFormat::Iso), Err(RecordsError::NoActiveEdit));
    assert_eq!(records[0].name, "Harbor Lofts");
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_writes_only_the_target_record() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[1], "name").unwrap();
    session.set_draft("  Cedar Ridge Elementary ");
    let written = session.commit(&mut records, DateFormat::Iso).unwrap();
    assert_eq!(written, Some(CellKey::new("B2", "name")));
    assert_eq!(records[1].name, "Cedar Ridge Elementary");
    assert_eq!(records[0].name, "Harbor Lofts");
    assert!(session.active().is_none());
}

#[test]
fn unchanged_draft_closes_without_writing() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "due_date").unwrap();
    assert_eq!(session.commit(&mut records, DateFormat::Iso), Ok(None));
    assert!(session.active().is_none());
}

#[test]
fn currency_draft_accepts_decoration() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "budget").unwrap();
    session.set_draft("$1,250,000");
    session.commit(&mut records, DateFormat::Iso).unwrap();
    assert!((records[0].budget - 1_250_000.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_number_keeps_cell_open_with_error() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "budget").unwrap();
    session.set_draft("lots");
    let err = session.commit(&mut records, DateFormat::Iso).unwrap_err();
    assert_eq!(err, RecordsError::InvalidNumber("lots".to_owned()));
    assert!(session.is_editing("B1", "budget"));
    assert_eq!(session.last_error(), Some(&err));

    session.set_draft("1000");
    assert!(session.last_error().is_none());
}

#[test]
fn date_draft_is_parsed_with_injected_format_and_normalized() {
    let mut records = bids();
    for record in &mut records {
        record.due_date = "04/02/2025".to_owned();
    }
    let mut session = EditSession::new();
    session.begin(&records[0], "due_date").unwrap();
    session.set_draft(" 5/1/2025 ");
    session.commit(&mut records, DateFormat::Us).unwrap_err();

    session.set_draft("05/01/2025 ");
    session.commit(&mut records, DateFormat::Us).unwrap();
    assert_eq!(records[0].due_date, "05/01/2025");
}

#[test]
fn status_draft_must_be_an_allowed_key() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "status").unwrap();
    session.set_draft("in_transit");
    let err = session.commit(&mut records, DateFormat::Iso).unwrap_err();
    assert!(matches!(err, RecordsError::InvalidStatus { .. }));

    session.set_draft("awarded");
    session.commit(&mut records, DateFormat::Iso).unwrap();
    assert_eq!(records[0].status, BidStatus::Awarded);
}

#[test]
fn blank_text_is_rejected() {
    let mut records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "client").unwrap();
    session.set_draft("   ");
    assert_eq!(session.commit(&mut records, DateFormat::Iso), Err(RecordsError::EmptyText("client".to_owned())));
    assert_eq!(records[0].client, "Pier Holdings");
}

#[test]
fn commit_against_list_without_the_record_fails() {
    let records = bids();
    let mut session = EditSession::new();
    session.begin(&records[0], "name").unwrap();
    session.set_draft("Renamed");
    let mut others = vec![records[1].clone()];
    assert_eq!(session.commit(&mut others, DateFormat::Iso), Err(RecordsError::UnknownRecord("B1".to_owned())));
}

#[test]
fn parse_draft_rejects_non_finite_numbers() {
    assert!(parse_draft(FieldKind::Number, "inf", DateFormat::Iso, &[], "qty").is_err());
    assert_eq!(parse_draft(FieldKind::Percent, "12.5%", DateFormat::Iso, &[], "m"), Ok(FieldValue::Number(12.5)));
}
