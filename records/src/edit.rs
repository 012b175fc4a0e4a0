//! Inline cell editing shared by every tab view.
//!
//! DESIGN
//! ======
//! One [`EditSession`] per tab. At most one cell is open at a time, keyed by
//! `(record id, field)`. The draft is raw text; it is parsed by the column's
//! [`FieldKind`] only on commit. A failed commit leaves the cell open with the
//! error attached so the view can show it next to the input.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use serde::{Deserialize, Serialize};

use crate::dates::DateFormat;
use crate::error::RecordsError;
use crate::model::{Editable, FieldKind, FieldValue, Record};

/// Identity of one editable cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub record_id: String,
    pub field: String,
}

impl CellKey {
    #[must_use]
    pub fn new(record_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self { record_id: record_id.into(), field: field.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveEdit {
    pub key: CellKey,
    pub kind: FieldKind,
    pub draft: String,
    /// Raw value when the edit began.
    pub original: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSession {
    active: Option<ActiveEdit>,
    last_error: Option<RecordsError>,
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `field` of `record` for editing, replacing any open cell.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::UnknownField`] or
    /// [`RecordsError::ReadOnlyField`] when the column cannot be edited.
    pub fn begin<R: Record>(&mut self, record: &R, field: &str) -> Result<&ActiveEdit, RecordsError> {
        let column = R::column(field).ok_or_else(|| RecordsError::UnknownField(field.to_owned()))?;
        if !column.editable {
            return Err(RecordsError::ReadOnlyField(field.to_owned()));
        }
        let original = record.field(field).map(|value| value.raw()).unwrap_or_default();
        self.last_error = None;
        Ok(self.active.insert(ActiveEdit {
            key: CellKey::new(record.id(), field),
            kind: column.kind,
            draft: original.clone(),
            original,
        }))
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveEdit> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_editing(&self, record_id: &str, field: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|edit| edit.key.record_id == record_id && edit.key.field == field)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.active.as_ref().map(|edit| edit.draft.as_str())
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&RecordsError> {
        self.last_error.as_ref()
    }

    /// Replace the draft text. Clears the previous commit error.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.active.as_mut() {
            edit.draft = text.into();
            self.last_error = None;
        }
    }

    /// Close the open cell without writing. Returns the cell that was open.
    pub fn cancel(&mut self) -> Option<CellKey> {
        self.last_error = None;
        self.active.take().map(|edit| edit.key)
    }

    /// Validate the draft and write it into the matching record.
    ///
    /// Returns the written cell, or `None` when the draft was unchanged (the
    /// cell is closed either way).
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::NoActiveEdit`] when nothing is open. Parse
    /// failures and [`RecordsError::UnknownRecord`] keep the cell open and are
    /// also recorded as [`EditSession::last_error`].
    pub fn commit<R: Editable>(
        &mut self,
        records: &mut [R],
        dates: DateFormat,
    ) -> Result<Option<CellKey>, RecordsError> {
        let Some(edit) = self.active.as_ref() else {
            return Err(RecordsError::NoActiveEdit);
        };
        if edit.draft.trim() == edit.original.trim() {
            self.cancel();
            return Ok(None);
        }

        let options = R::status_options();
        let written = parse_draft(edit.kind, &edit.draft, dates, &options, &edit.key.field).and_then(|value| {
            let record = records
                .iter_mut()
                .find(|record| record.id() == edit.key.record_id)
                .ok_or_else(|| RecordsError::UnknownRecord(edit.key.record_id.clone()))?;
            record.set_field(&edit.key.field, value)
        });

        match written {
            Ok(()) => {
                self.last_error = None;
                Ok(self.active.take().map(|edit| edit.key))
            }
            Err(err) => {
                log::debug!("rejected edit of {}.{}: {err}", edit.key.record_id, edit.key.field);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}

/// Parse raw draft text for a column of `kind`.
///
/// Numbers accept `$`, `,` and `%` decoration. Dates are normalized to
/// `dates`. Statuses must be one of `options`.
///
/// # Errors
///
/// Returns the [`RecordsError`] variant matching the failed check.
pub fn parse_draft(
    kind: FieldKind,
    draft: &str,
    dates: DateFormat,
    options: &[&str],
    field: &str,
) -> Result<FieldValue, RecordsError> {
    let trimmed = draft.trim();
    match kind {
        FieldKind::Text => {
            if trimmed.is_empty() {
                Err(RecordsError::EmptyText(field.to_owned()))
            } else {
                Ok(FieldValue::Text(trimmed.to_owned()))
            }
        }
        FieldKind::Number | FieldKind::Currency | FieldKind::Percent => {
            let cleaned: String = trimmed
                .chars()
                .filter(|ch| !matches!(ch, '$' | ',' | '%') && !ch.is_whitespace())
                .collect();
            match cleaned.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(FieldValue::Number(value)),
                _ => Err(RecordsError::InvalidNumber(draft.to_owned())),
            }
        }
        FieldKind::Date => dates.parse(trimmed).map(|date| FieldValue::Date(dates.format(date))),
        FieldKind::Status => {
            if options.contains(&trimmed) {
                Ok(FieldValue::Status(trimmed.to_owned()))
            } else {
                Err(RecordsError::InvalidStatus { value: trimmed.to_owned(), allowed: options.join(", ") })
            }
        }
    }
}
