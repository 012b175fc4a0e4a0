//! Errors for record queries and inline edits.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordsError {
    #[error("invalid date {value:?}: expected {expected}")]
    InvalidDate { value: String, expected: &'static str },
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("invalid status {value:?}; allowed: {allowed}")]
    InvalidStatus { value: String, allowed: String },
    #[error("{0} cannot be empty")]
    EmptyText(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("value does not fit field: {0}")]
    TypeMismatch(String),
    #[error("field is not editable: {0}")]
    ReadOnlyField(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("record not found: {0}")]
    UnknownRecord(String),
    #[error("no cell is being edited")]
    NoActiveEdit,
}
