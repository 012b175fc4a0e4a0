//! Record types shown in the workspace tabs.
//!
//! DESIGN
//! ======
//! Each tab view holds a flat list of one record type. Views never touch
//! record fields directly: they go through the [`Record`] trait, which
//! exposes a static column table and string-keyed field access. That lets one
//! table component, one query engine and one inline-edit capability serve
//! every tab.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::error::RecordsError;

// =============================================================================
// FIELDS AND COLUMNS
// =============================================================================

/// How a column's values compare, parse and render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Currency,
    Percent,
    Date,
    Status,
}

impl FieldKind {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Currency | Self::Percent)
    }
}

/// A single field value read from a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// Raw date text in the data source's [`crate::dates::DateFormat`].
    Date(String),
    /// Status key, e.g. `in_transit`.
    Status(String),
}

impl FieldValue {
    /// Raw editable text for this value.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Text(s) | Self::Date(s) | Self::Status(s) => s.clone(),
            Self::Number(n) => format_plain_number(*n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub editable: bool,
}

impl Column {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind, editable: bool) -> Self {
        Self { key, label, kind, editable }
    }
}

/// Status enums shared shape: a fixed set of snake_case keys with labels.
pub trait StatusValue: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == raw)
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|status| status.as_str()).collect()
    }
}

/// Read access shared by every tab's record type.
pub trait Record {
    const COLUMNS: &'static [Column];

    fn id(&self) -> &str;

    fn status(&self) -> &'static str;

    /// Label for a status key of this record type.
    fn status_label(key: &str) -> Option<&'static str>;

    /// Allowed status keys, in display order.
    fn status_options() -> Vec<&'static str>;

    /// Free-text search targets (name, client, location).
    fn search_fields(&self) -> [&str; 3];

    fn field(&self, key: &str) -> Option<FieldValue>;

    #[must_use]
    fn column(key: &str) -> Option<&'static Column> {
        Self::COLUMNS.iter().find(|column| column.key == key)
    }
}

/// Write access for inline editing. Edits are in-memory only.
pub trait Editable: Record {
    /// Store an already-validated value.
    ///
    /// # Errors
    ///
    /// Fails for unknown or read-only fields and for values whose variant
    /// does not fit the field.
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), RecordsError>;
}

// =============================================================================
// STATUS ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    Draft,
    Submitted,
    UnderReview,
    Awarded,
    Lost,
}

impl StatusValue for BidStatus {
    const ALL: &'static [Self] = &[Self::Draft, Self::Submitted, Self::UnderReview, Self::Awarded, Self::Lost];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Awarded => "awarded",
            Self::Lost => "lost",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Awarded => "Awarded",
            Self::Lost => "Lost",
        }
    }
}

impl BidStatus {
    /// Still competing for the work.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Draft | Self::Submitted | Self::UnderReview)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Scheduled,
    InTransit,
    Delivered,
    Delayed,
}

impl StatusValue for DeliveryStatus {
    const ALL: &'static [Self] = &[Self::Scheduled, Self::InTransit, Self::Delivered, Self::Delayed];

    fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Delayed => "delayed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Delayed => "Delayed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    NotStarted,
    InProgress,
    OnHold,
    Complete,
}

impl StatusValue for StageStatus {
    const ALL: &'static [Self] = &[Self::NotStarted, Self::InProgress, Self::OnHold, Self::Complete];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Complete => "complete",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Complete => "Complete",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl StatusValue for EstimateStatus {
    const ALL: &'static [Self] = &[Self::Draft, Self::Pending, Self::Approved, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    pub id: String,
    pub name: String,
    pub client: String,
    pub location: String,
    pub budget: f64,
    pub status: BidStatus,
    pub due_date: String,
    pub estimator: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: String,
    /// Material or equipment being delivered.
    pub name: String,
    pub supplier: String,
    pub location: String,
    pub quantity: f64,
    pub status: DeliveryStatus,
    pub scheduled_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub id: String,
    /// Project name.
    pub name: String,
    pub client: String,
    pub location: String,
    pub stage: String,
    pub percent_complete: f64,
    pub status: StageStatus,
    pub target_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateRecord {
    pub id: String,
    pub name: String,
    pub client: String,
    pub location: String,
    pub amount: f64,
    pub margin: f64,
    pub status: EstimateStatus,
    pub submitted_date: String,
}

impl Record for BidRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "Bid #", FieldKind::Text, false),
        Column::new("name", "Project", FieldKind::Text, true),
        Column::new("client", "Client", FieldKind::Text, true),
        Column::new("location", "Location", FieldKind::Text, true),
        Column::new("budget", "Budget", FieldKind::Currency, true),
        Column::new("status", "Status", FieldKind::Status, true),
        Column::new("due_date", "Due", FieldKind::Date, true),
        Column::new("estimator", "Estimator", FieldKind::Text, true),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &'static str {
        self.status.as_str()
    }

    fn status_label(key: &str) -> Option<&'static str> {
        BidStatus::parse(key).map(StatusValue::label)
    }

    fn status_options() -> Vec<&'static str> {
        BidStatus::keys()
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.client, &self.location]
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => FieldValue::Text(self.id.clone()),
            "name" => FieldValue::Text(self.name.clone()),
            "client" => FieldValue::Text(self.client.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "budget" => FieldValue::Number(self.budget),
            "status" => FieldValue::Status(self.status.as_str().to_owned()),
            "due_date" => FieldValue::Date(self.due_date.clone()),
            "estimator" => FieldValue::Text(self.estimator.clone()),
            _ => return None,
        })
    }
}

impl Editable for BidRecord {
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), RecordsError> {
        match (key, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("client", FieldValue::Text(v)) => self.client = v,
            ("location", FieldValue::Text(v)) => self.location = v,
            ("estimator", FieldValue::Text(v)) => self.estimator = v,
            ("budget", FieldValue::Number(v)) => self.budget = v,
            ("due_date", FieldValue::Date(v)) => self.due_date = v,
            ("status", FieldValue::Status(v)) => self.status = parse_status(&v)?,
            (key, _) => return Err(reject_write::<Self>(key)),
        }
        Ok(())
    }
}

impl Record for DeliveryRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "Ticket", FieldKind::Text, false),
        Column::new("name", "Material", FieldKind::Text, true),
        Column::new("supplier", "Supplier", FieldKind::Text, true),
        Column::new("location", "Site", FieldKind::Text, true),
        Column::new("quantity", "Qty", FieldKind::Number, true),
        Column::new("status", "Status", FieldKind::Status, true),
        Column::new("scheduled_date", "Scheduled", FieldKind::Date, true),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &'static str {
        self.status.as_str()
    }

    fn status_label(key: &str) -> Option<&'static str> {
        DeliveryStatus::parse(key).map(StatusValue::label)
    }

    fn status_options() -> Vec<&'static str> {
        DeliveryStatus::keys()
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.supplier, &self.location]
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => FieldValue::Text(self.id.clone()),
            "name" => FieldValue::Text(self.name.clone()),
            "supplier" => FieldValue::Text(self.supplier.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "quantity" => FieldValue::Number(self.quantity),
            "status" => FieldValue::Status(self.status.as_str().to_owned()),
            "scheduled_date" => FieldValue::Date(self.scheduled_date.clone()),
            _ => return None,
        })
    }
}

impl Editable for DeliveryRecord {
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), RecordsError> {
        match (key, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("supplier", FieldValue::Text(v)) => self.supplier = v,
            ("location", FieldValue::Text(v)) => self.location = v,
            ("quantity", FieldValue::Number(v)) => self.quantity = v,
            ("scheduled_date", FieldValue::Date(v)) => self.scheduled_date = v,
            ("status", FieldValue::Status(v)) => self.status = parse_status(&v)?,
            (key, _) => return Err(reject_write::<Self>(key)),
        }
        Ok(())
    }
}

impl Record for StageRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "Job #", FieldKind::Text, false),
        Column::new("name", "Project", FieldKind::Text, true),
        Column::new("client", "Client", FieldKind::Text, true),
        Column::new("location", "Location", FieldKind::Text, true),
        Column::new("stage", "Stage", FieldKind::Text, true),
        Column::new("percent_complete", "Complete", FieldKind::Percent, true),
        Column::new("status", "Status", FieldKind::Status, true),
        Column::new("target_date", "Target", FieldKind::Date, true),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &'static str {
        self.status.as_str()
    }

    fn status_label(key: &str) -> Option<&'static str> {
        StageStatus::parse(key).map(StatusValue::label)
    }

    fn status_options() -> Vec<&'static str> {
        StageStatus::keys()
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.client, &self.location]
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => FieldValue::Text(self.id.clone()),
            "name" => FieldValue::Text(self.name.clone()),
            "client" => FieldValue::Text(self.client.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "stage" => FieldValue::Text(self.stage.clone()),
            "percent_complete" => FieldValue::Number(self.percent_complete),
            "status" => FieldValue::Status(self.status.as_str().to_owned()),
            "target_date" => FieldValue::Date(self.target_date.clone()),
            _ => return None,
        })
    }
}

impl Editable for StageRecord {
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), RecordsError> {
        match (key, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("client", FieldValue::Text(v)) => self.client = v,
            ("location", FieldValue::Text(v)) => self.location = v,
            ("stage", FieldValue::Text(v)) => self.stage = v,
            ("percent_complete", FieldValue::Number(v)) => self.percent_complete = v.clamp(0.0, 100.0),
            ("target_date", FieldValue::Date(v)) => self.target_date = v,
            ("status", FieldValue::Status(v)) => self.status = parse_status(&v)?,
            (key, _) => return Err(reject_write::<Self>(key)),
        }
        Ok(())
    }
}

impl Record for EstimateRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "Estimate #", FieldKind::Text, false),
        Column::new("name", "Project", FieldKind::Text, true),
        Column::new("client", "Client", FieldKind::Text, true),
        Column::new("location", "Location", FieldKind::Text, true),
        Column::new("amount", "Amount", FieldKind::Currency, true),
        Column::new("margin", "Margin", FieldKind::Percent, true),
        Column::new("status", "Status", FieldKind::Status, true),
        Column::new("submitted_date", "Submitted", FieldKind::Date, true),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &'static str {
        self.status.as_str()
    }

    fn status_label(key: &str) -> Option<&'static str> {
        EstimateStatus::parse(key).map(StatusValue::label)
    }

    fn status_options() -> Vec<&'static str> {
        EstimateStatus::keys()
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.client, &self.location]
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => FieldValue::Text(self.id.clone()),
            "name" => FieldValue::Text(self.name.clone()),
            "client" => FieldValue::Text(self.client.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "amount" => FieldValue::Number(self.amount),
            "margin" => FieldValue::Number(self.margin),
            "status" => FieldValue::Status(self.status.as_str().to_owned()),
            "submitted_date" => FieldValue::Date(self.submitted_date.clone()),
            _ => return None,
        })
    }
}

impl Editable for EstimateRecord {
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), RecordsError> {
        match (key, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("client", FieldValue::Text(v)) => self.client = v,
            ("location", FieldValue::Text(v)) => self.location = v,
            ("amount", FieldValue::Number(v)) => self.amount = v,
            ("margin", FieldValue::Number(v)) => self.margin = v,
            ("submitted_date", FieldValue::Date(v)) => self.submitted_date = v,
            ("status", FieldValue::Status(v)) => self.status = parse_status(&v)?,
            (key, _) => return Err(reject_write::<Self>(key)),
        }
        Ok(())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_status<S: StatusValue>(raw: &str) -> Result<S, RecordsError> {
    S::parse(raw).ok_or_else(|| RecordsError::InvalidStatus { value: raw.to_owned(), allowed: S::keys().join(", ") })
}

fn reject_write<R: Record>(key: &str) -> RecordsError {
    match R::column(key) {
        None => RecordsError::UnknownField(key.to_owned()),
        Some(column) if !column.editable => RecordsError::ReadOnlyField(key.to_owned()),
        Some(_) => RecordsError::TypeMismatch(key.to_owned()),
    }
}

/// Shortest decimal text for a number (`12`, `12.5`).
#[must_use]
pub fn format_plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
