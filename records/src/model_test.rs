use super::*;

fn delivery() -> DeliveryRecord {
    DeliveryRecord {
        id: "DLV-1".to_owned(),
        name: "Steel beams".to_owned(),
        supplier: "Pacific Steel".to_owned(),
        location: "Northgate".to_owned(),
        quantity: 48.0,
        status: DeliveryStatus::InTransit,
        scheduled_date: "2025-03-15".to_owned(),
    }
}

fn stage() -> StageRecord {
    StageRecord {
        id: "JOB-1".to_owned(),
        name: "Cedar School".to_owned(),
        client: "Cedar USD".to_owned(),
        location: "Boise, ID".to_owned(),
        stage: "Framing".to_owned(),
        percent_complete: 35.0,
        status: StageStatus::InProgress,
        target_date: "2025-05-15".to_owned(),
    }
}

#[test]
fn status_keys_round_trip_through_parse() {
    for status in DeliveryStatus::ALL {
        assert_eq!(DeliveryStatus::parse(status.as_str()), Some(*status));
    }
    assert_eq!(BidStatus::parse("under_review"), Some(BidStatus::UnderReview));
    assert_eq!(BidStatus::parse("Under Review"), None);
}

#[test]
fn status_serde_uses_snake_case_keys() {
    assert_eq!(serde_json::to_string(&StageStatus::NotStarted).unwrap(), "\"not_started\"");
}

#[test]
fn every_column_is_readable() {
    let record = delivery();
    for column in DeliveryRecord::COLUMNS {
        assert!(record.field(column.key).is_some(), "missing field {}", column.key);
    }
    assert_eq!(record.field("budget"), None);
}

#[test]
fn field_values_match_column_kinds() {
    let record = delivery();
    assert_eq!(record.field("quantity"), Some(FieldValue::Number(48.0)));
    assert_eq!(record.field("status"), Some(FieldValue::Status("in_transit".to_owned())));
    assert_eq!(record.field("scheduled_date"), Some(FieldValue::Date("2025-03-15".to_owned())));
}

#[test]
fn record_status_labels_and_options() {
    assert_eq!(DeliveryRecord::status_label("in_transit"), Some("In Transit"));
    assert_eq!(DeliveryRecord::status_label("lost"), None);
    assert_eq!(EstimateRecord::status_options(), ["draft", "pending", "approved", "rejected"]);
}

#[test]
fn set_field_writes_matching_values() {
    let mut record = delivery();
    record.set_field("supplier", FieldValue::Text("Cascade".to_owned())).unwrap();
    record.set_field("status", FieldValue::Status("delayed".to_owned())).unwrap();
    assert_eq!(record.supplier, "Cascade");
    assert_eq!(record.status, DeliveryStatus::Delayed);
}

#[test]
fn set_field_rejects_id_unknown_and_mismatched_values() {
    let mut record = delivery();
    assert_eq!(
        record.set_field("id", FieldValue::Text("X".to_owned())),
        Err(RecordsError::ReadOnlyField("id".to_owned()))
    );
    assert_eq!(
        record.set_field("colour", FieldValue::Text("red".to_owned())),
        Err(RecordsError::UnknownField("colour".to_owned()))
    );
    assert_eq!(
        record.set_field("quantity", FieldValue::Text("ten".to_owned())),
        Err(RecordsError::TypeMismatch("quantity".to_owned()))
    );
    assert!(matches!(
        record.set_field("status", FieldValue::Status("lost".to_owned())),
        Err(RecordsError::InvalidStatus { .. })
    ));
    assert_eq!(record, delivery());
}

#[test]
fn percent_complete_is_clamped() {
    let mut record = stage();
    record.set_field("percent_complete", FieldValue::Number(140.0)).unwrap();
    assert!((record.percent_complete - 100.0).abs() < f64::EPSILON);
    record.set_field("percent_complete", FieldValue::Number(-5.0)).unwrap();
    assert!(record.percent_complete.abs() < f64::EPSILON);
}

#[test]
fn raw_text_drops_trailing_zero_fraction() {
    assert_eq!(FieldValue::Number(48.0).raw(), "48");
    assert_eq!(FieldValue::Number(14.5).raw(), "14.5");
    assert_eq!(FieldValue::Status("on_hold".to_owned()).raw(), "on_hold");
}

#[test]
fn id_column_is_read_only_everywhere() {
    assert!(!BidRecord::column("id").unwrap().editable);
    assert!(!DeliveryRecord::column("id").unwrap().editable);
    assert!(!StageRecord::column("id").unwrap().editable);
    assert!(!EstimateRecord::column("id").unwrap().editable);
}
