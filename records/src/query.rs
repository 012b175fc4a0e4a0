//! Search, status filter and sort for tab views.
//!
//! DESIGN
//! ======
//! `apply` is a pure function of `(records, query, date format)`. Sorting is
//! decorate-sort-undecorate: each record's sort value is computed once
//! (dates parsed with the injected format), then a stable sort orders the
//! decorated rows.
//!
//! EDGE CASES
//! ==========
//! Dates that fail to parse, and fields a record does not have, sort after
//! every present value in both directions and keep their original relative
//! order.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::DateFormat;
use crate::error::RecordsError;
use crate::model::{FieldKind, FieldValue, Record};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// `""` and `"all"` mean no filter; anything else is an exact status key.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => Self::All,
            key => Self::Only(key.to_owned()),
        }
    }

    #[must_use]
    pub fn as_key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(key) => key.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(key) => key == status,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") || raw.eq_ignore_ascii_case("descending") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Everything a tab view needs to derive its visible rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortSpec>,
}

impl TableQuery {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { key: key.into(), direction });
        self
    }

    /// Column-header click: flip direction on the active column, otherwise
    /// sort ascending by the new column.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(spec) if spec.key == key => Some(SortSpec { key: spec.key, direction: spec.direction.toggled() }),
            _ => Some(SortSpec { key: key.to_owned(), direction: SortDirection::Ascending }),
        };
    }

    /// Direction for `key` when it is the active sort column.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.sort.as_ref().filter(|spec| spec.key == key).map(|spec| spec.direction)
    }
}

/// Search + status match for a single record.
#[must_use]
pub fn matches<R: Record>(record: &R, query: &TableQuery) -> bool {
    if !query.status.matches(record.status()) {
        return false;
    }
    let needle = query.search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter and sort `records` for display.
///
/// # Errors
///
/// Returns [`RecordsError::UnknownSortKey`] when the sort key is not a
/// column of `R`.
pub fn apply<'a, R: Record>(
    records: &'a [R],
    query: &TableQuery,
    dates: DateFormat,
) -> Result<Vec<&'a R>, RecordsError> {
    let filtered = records.iter().filter(|record| matches(*record, query));

    let Some(spec) = &query.sort else {
        return Ok(filtered.collect());
    };
    let column = R::column(&spec.key).ok_or_else(|| RecordsError::UnknownSortKey(spec.key.clone()))?;

    let mut decorated = filtered
        .map(|record| (sort_value(record.field(column.key), column.kind, dates), record))
        .collect::<Vec<_>>();
    decorated.sort_by(|(a, _), (b, _)| compare(a, b, spec.direction));
    Ok(decorated.into_iter().map(|(_, record)| record).collect())
}

#[derive(Clone, Debug, PartialEq)]
enum SortValue {
    Missing,
    Text(String),
    Number(f64),
    Date(Date),
}

fn sort_value(value: Option<FieldValue>, kind: FieldKind, dates: DateFormat) -> SortValue {
    match (kind, value) {
        (_, None) => SortValue::Missing,
        (FieldKind::Date, Some(FieldValue::Date(raw))) => dates.parse(&raw).map_or(SortValue::Missing, SortValue::Date),
        (_, Some(FieldValue::Number(n))) => SortValue::Number(n),
        (_, Some(FieldValue::Text(s) | FieldValue::Status(s) | FieldValue::Date(s))) => SortValue::Text(s),
    }
}

fn compare(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Greater,
        (_, SortValue::Missing) => Ordering::Less,
        (SortValue::Number(x), SortValue::Number(y)) => direction.apply(x.total_cmp(y)),
        (SortValue::Date(x), SortValue::Date(y)) => direction.apply(x.cmp(y)),
        (SortValue::Text(x), SortValue::Text(y)) => direction.apply(x.cmp(y)),
        _ => Ordering::Equal,
    }
}
