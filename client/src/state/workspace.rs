//! Records workspace state: one query and one edit session per tab.
//!
//! DESIGN
//! ======
//! The four record lists have different types, so every operation is a
//! `match` over [`WorkspaceTab`] into a generic helper bounded on
//! `records::Record`/`Editable`. Views only ever see [`RowView`]s, which are
//! already filtered, sorted and formatted.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use records::dates::{days_until, due_label};
use records::format::cell_text;
use records::query::{self, StatusFilter, TableQuery};
use records::summary::{self, DashboardSummary};
use records::{
    BidRecord, CellKey, Column, DateFormat, Dataset, DeliveryRecord, EditSession, EstimateRecord, FieldKind,
    FieldValue, Record, RecordsError, StageRecord,
};
use time::Date;

// =============================================================================
// TABS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorkspaceTab {
    #[default]
    Bids,
    Deliveries,
    Stages,
    Estimates,
}

impl WorkspaceTab {
    pub const ALL: [Self; 4] = [Self::Bids, Self::Deliveries, Self::Stages, Self::Estimates];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Bids => "bids",
            Self::Deliveries => "deliveries",
            Self::Stages => "stages",
            Self::Estimates => "estimates",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bids => "Bid Management",
            Self::Deliveries => "Delivery Tracking",
            Self::Stages => "Stage Tracking",
            Self::Estimates => "Estimates",
        }
    }

    #[must_use]
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Bids => BidRecord::COLUMNS,
            Self::Deliveries => DeliveryRecord::COLUMNS,
            Self::Stages => StageRecord::COLUMNS,
            Self::Estimates => EstimateRecord::COLUMNS,
        }
    }

    /// `(key, label)` pairs for the status filter and status editor.
    #[must_use]
    pub fn status_options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Bids => labeled_statuses::<BidRecord>(),
            Self::Deliveries => labeled_statuses::<DeliveryRecord>(),
            Self::Stages => labeled_statuses::<StageRecord>(),
            Self::Estimates => labeled_statuses::<EstimateRecord>(),
        }
    }

    /// Date column whose distance from today gets its own "due" column.
    #[must_use]
    pub fn due_field(self) -> Option<&'static str> {
        match self {
            Self::Bids => Some("due_date"),
            Self::Deliveries | Self::Stages | Self::Estimates => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Bids => 0,
            Self::Deliveries => 1,
            Self::Stages => 2,
            Self::Estimates => 3,
        }
    }
}

fn labeled_statuses<R: Record>() -> Vec<(&'static str, &'static str)> {
    R::status_options()
        .into_iter()
        .map(|key| (key, R::status_label(key).unwrap_or(key)))
        .collect()
}

// =============================================================================
// ROW PROJECTION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub key: &'static str,
    pub kind: FieldKind,
    pub text: String,
    pub editable: bool,
    /// Status key for badge styling, status cells only.
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueHint {
    pub days: i64,
    pub label: String,
}

impl DueHint {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.days {
            d if d < 0 => "due due--overdue",
            d if d <= summary::DUE_SOON_DAYS => "due due--soon",
            _ => "due",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<CellView>,
    /// `None` when the tab has no due column or the date does not parse.
    pub due: Option<DueHint>,
}

fn project<R: Record>(
    records: &[R],
    query: &TableQuery,
    dates: DateFormat,
    today: Date,
    due_field: Option<&str>,
) -> Result<Vec<RowView>, RecordsError> {
    let rows = query::apply(records, query, dates)?;
    Ok(rows
        .into_iter()
        .map(|record| RowView {
            id: record.id().to_owned(),
            cells: R::COLUMNS
                .iter()
                .map(|column| CellView {
                    key: column.key,
                    kind: column.kind,
                    text: cell_text(record, column, dates),
                    editable: column.editable,
                    status: match record.field(column.key) {
                        Some(FieldValue::Status(key)) => Some(key),
                        _ => None,
                    },
                })
                .collect(),
            due: due_field.and_then(|key| due_hint(record.field(key), dates, today)),
        })
        .collect())
}

fn due_hint(value: Option<FieldValue>, dates: DateFormat, today: Date) -> Option<DueHint> {
    let Some(FieldValue::Date(raw)) = value else {
        return None;
    };
    let days = days_until(dates.parse(&raw).ok()?, today);
    Some(DueHint { days, label: due_label(days) })
}

// =============================================================================
// WORKSPACE STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabState {
    pub query: TableQuery,
    pub edit: EditSession,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceState {
    pub data: Dataset,
    /// Layout of every date in `data`.
    pub dates: DateFormat,
    pub today: Date,
    tabs: [TabState; 4],
}

impl WorkspaceState {
    #[must_use]
    pub fn new(data: Dataset, dates: DateFormat, today: Date) -> Self {
        Self { data, dates, today, tabs: Default::default() }
    }

    #[must_use]
    pub fn tab(&self, tab: WorkspaceTab) -> &TabState {
        &self.tabs[tab.index()]
    }

    fn tab_mut(&mut self, tab: WorkspaceTab) -> &mut TabState {
        &mut self.tabs[tab.index()]
    }

    #[must_use]
    pub fn total(&self, tab: WorkspaceTab) -> usize {
        match tab {
            WorkspaceTab::Bids => self.data.bids.len(),
            WorkspaceTab::Deliveries => self.data.deliveries.len(),
            WorkspaceTab::Stages => self.data.stages.len(),
            WorkspaceTab::Estimates => self.data.estimates.len(),
        }
    }

    /// Visible rows for `tab` under its current query.
    ///
    /// # Errors
    ///
    /// Propagates [`RecordsError::UnknownSortKey`] from the query.
    pub fn rows(&self, tab: WorkspaceTab) -> Result<Vec<RowView>, RecordsError> {
        let query = &self.tab(tab).query;
        let due = tab.due_field();
        match tab {
            WorkspaceTab::Bids => project(&self.data.bids, query, self.dates, self.today, due),
            WorkspaceTab::Deliveries => project(&self.data.deliveries, query, self.dates, self.today, due),
            WorkspaceTab::Stages => project(&self.data.stages, query, self.dates, self.today, due),
            WorkspaceTab::Estimates => project(&self.data.estimates, query, self.dates, self.today, due),
        }
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        summary::summarize(&self.data, self.dates, self.today)
    }

    // =========================================================================
    // QUERY
    // =========================================================================

    pub fn set_search(&mut self, tab: WorkspaceTab, text: String) {
        self.tab_mut(tab).query.search = text;
    }

    pub fn set_status(&mut self, tab: WorkspaceTab, raw: &str) {
        self.tab_mut(tab).query.status = StatusFilter::parse(raw);
    }

    pub fn toggle_sort(&mut self, tab: WorkspaceTab, key: &str) {
        self.tab_mut(tab).query.toggle_sort(key);
    }

    pub fn clear_filters(&mut self, tab: WorkspaceTab) {
        let query = &mut self.tab_mut(tab).query;
        query.search.clear();
        query.status = StatusFilter::All;
    }

    // =========================================================================
    // INLINE EDIT
    // =========================================================================

    /// Open a cell for editing. Closes any cell open on another tab.
    ///
    /// # Errors
    ///
    /// [`RecordsError::UnknownRecord`] when `record_id` is not in the tab,
    /// otherwise whatever [`EditSession::begin`] rejects.
    pub fn begin_edit(&mut self, tab: WorkspaceTab, record_id: &str, field: &str) -> Result<(), RecordsError> {
        for other in WorkspaceTab::ALL.into_iter().filter(|other| *other != tab) {
            self.tab_mut(other).edit.cancel();
        }
        let index = tab.index();
        let session = &mut self.tabs[index].edit;
        match tab {
            WorkspaceTab::Bids => begin(&self.data.bids, session, record_id, field),
            WorkspaceTab::Deliveries => begin(&self.data.deliveries, session, record_id, field),
            WorkspaceTab::Stages => begin(&self.data.stages, session, record_id, field),
            WorkspaceTab::Estimates => begin(&self.data.estimates, session, record_id, field),
        }
    }

    pub fn set_draft(&mut self, tab: WorkspaceTab, text: String) {
        self.tab_mut(tab).edit.set_draft(text);
    }

    pub fn cancel_edit(&mut self, tab: WorkspaceTab) {
        self.tab_mut(tab).edit.cancel();
    }

    /// Commit the open cell of `tab`.
    ///
    /// # Errors
    ///
    /// See [`EditSession::commit`]; the cell stays open on error.
    pub fn commit_edit(&mut self, tab: WorkspaceTab) -> Result<Option<CellKey>, RecordsError> {
        let dates = self.dates;
        let session = &mut self.tabs[tab.index()].edit;
        match tab {
            WorkspaceTab::Bids => session.commit(&mut self.data.bids, dates),
            WorkspaceTab::Deliveries => session.commit(&mut self.data.deliveries, dates),
            WorkspaceTab::Stages => session.commit(&mut self.data.stages, dates),
            WorkspaceTab::Estimates => session.commit(&mut self.data.estimates, dates),
        }
    }
}

fn begin<R: Record>(records: &[R], session: &mut EditSession, record_id: &str, field: &str) -> Result<(), RecordsError> {
    let record = records
        .iter()
        .find(|record| record.id() == record_id)
        .ok_or_else(|| RecordsError::UnknownRecord(record_id.to_owned()))?;
    session.begin(record, field).map(|_| ())
}
