//! Read-only JSON views over the demo records.
//!
//! Every list endpoint takes `q`, `status`, `sort` and `dir` and runs them
//! through the same filter/sort the workspace tables use.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::query::{self, SortDirection, StatusFilter, TableQuery};
use records::summary::summarize;
use records::{
    BidRecord, DashboardSummary, DateFormat, DeliveryRecord, EstimateRecord, Record, RecordsError, StageRecord,
};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListParams {
    fn to_query(&self) -> TableQuery {
        let mut query = TableQuery::default()
            .with_search(self.q.clone().unwrap_or_default())
            .with_status(StatusFilter::parse(self.status.as_deref().unwrap_or_default()));
        if let Some(key) = self.sort.as_deref().filter(|key| !key.is_empty()) {
            query = query.sorted_by(key, SortDirection::parse(self.dir.as_deref().unwrap_or_default()));
        }
        query
    }
}

fn records_error_to_status(err: RecordsError) -> StatusCode {
    match err {
        RecordsError::UnknownSortKey(_)
        | RecordsError::UnknownField(_)
        | RecordsError::InvalidDate { .. }
        | RecordsError::InvalidNumber(_)
        | RecordsError::InvalidStatus { .. }
        | RecordsError::EmptyText(_)
        | RecordsError::TypeMismatch(_)
        | RecordsError::ReadOnlyField(_) => StatusCode::BAD_REQUEST,
        RecordsError::UnknownRecord(_) => StatusCode::NOT_FOUND,
        RecordsError::NoActiveEdit => StatusCode::CONFLICT,
    }
}

fn list<R: Record + Clone>(records: &[R], params: &ListParams, dates: DateFormat) -> Result<Vec<R>, StatusCode> {
    let query = params.to_query();
    let rows = query::apply(records, &query, dates).map_err(|err| {
        tracing::debug!(error = %err, "rejected records query");
        records_error_to_status(err)
    })?;
    Ok(rows.into_iter().cloned().collect())
}

/// `GET /api/bids`
pub async fn list_bids(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<BidRecord>>, StatusCode> {
    list(&state.dataset.bids, &params, state.dates).map(Json)
}

/// `GET /api/deliveries`
pub async fn list_deliveries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<DeliveryRecord>>, StatusCode> {
    list(&state.dataset.deliveries, &params, state.dates).map(Json)
}

/// `GET /api/stages`
pub async fn list_stages(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<StageRecord>>, StatusCode> {
    list(&state.dataset.stages, &params, state.dates).map(Json)
}

/// `GET /api/estimates`
pub async fn list_estimates(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<EstimateRecord>>, StatusCode> {
    list(&state.dataset.estimates, &params, state.dates).map(Json)
}

/// `GET /api/summary` - dashboard aggregates for today at the configured offset.
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(summarize(&state.dataset, state.dates, state.today()))
}
