//! Dashboard aggregates over a [`Dataset`].

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::{DateFormat, days_until};
use crate::model::{DeliveryStatus, EstimateStatus, Record, StageStatus};
use crate::seed::Dataset;

/// Bids due within this many days (inclusive) count as due soon.
pub const DUE_SOON_DAYS: i64 = 14;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_bids: usize,
    /// Sum of budgets of active bids.
    pub pipeline_value: f64,
    pub deliveries_in_transit: usize,
    pub delayed_deliveries: usize,
    /// Active bids due today through [`DUE_SOON_DAYS`] days out. Overdue and
    /// undated bids are not counted.
    pub bids_due_soon: usize,
    pub stages_in_progress: usize,
    pub approved_estimate_value: f64,
}

#[must_use]
pub fn summarize(data: &Dataset, dates: DateFormat, today: Date) -> DashboardSummary {
    let active = data.bids.iter().filter(|bid| bid.status.is_active());

    let mut summary = DashboardSummary::default();
    for bid in active {
        summary.active_bids += 1;
        summary.pipeline_value += bid.budget;
        if let Ok(due) = dates.parse(&bid.due_date) {
            if (0..=DUE_SOON_DAYS).contains(&days_until(due, today)) {
                summary.bids_due_soon += 1;
            }
        }
    }

    summary.deliveries_in_transit = data.deliveries.iter().filter(|d| d.status == DeliveryStatus::InTransit).count();
    summary.delayed_deliveries = data.deliveries.iter().filter(|d| d.status == DeliveryStatus::Delayed).count();
    summary.stages_in_progress = data.stages.iter().filter(|s| s.status == StageStatus::InProgress).count();
    summary.approved_estimate_value = data
        .estimates
        .iter()
        .filter(|e| e.status == EstimateStatus::Approved)
        .map(|e| e.amount)
        .sum();
    summary
}

/// Record count per status key, in the record type's status order.
#[must_use]
pub fn count_by_status<R: Record>(records: &[R]) -> Vec<(&'static str, usize)> {
    R::status_options()
        .into_iter()
        .map(|key| (key, records.iter().filter(|record| record.status() == key).count()))
        .collect()
}
