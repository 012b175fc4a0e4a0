//! Demo data loaded by the workspace and the JSON API.
//!
//! Dates are ISO (`DateFormat::Iso`). One bid carries `"TBD"` as its due
//! date, the way hand-entered source sheets do.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use serde::{Deserialize, Serialize};

use crate::model::{
    BidRecord, BidStatus, DeliveryRecord, DeliveryStatus, EstimateRecord, EstimateStatus, StageRecord, StageStatus,
};

/// All records backing one workspace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub bids: Vec<BidRecord>,
    pub deliveries: Vec<DeliveryRecord>,
    pub stages: Vec<StageRecord>,
    pub estimates: Vec<EstimateRecord>,
}

#[must_use]
pub fn demo() -> Dataset {
    Dataset { bids: bids(), deliveries: deliveries(), stages: stages(), estimates: estimates() }
}

#[allow(clippy::too_many_arguments)]
fn bid(
    id: &str,
    name: &str,
    client: &str,
    location: &str,
    budget: f64,
    status: BidStatus,
    due_date: &str,
    estimator: &str,
) -> BidRecord {
    BidRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        client: client.to_owned(),
        location: location.to_owned(),
        budget,
        status,
        due_date: due_date.to_owned(),
        estimator: estimator.to_owned(),
    }
}

#[must_use]
pub fn bids() -> Vec<BidRecord> {
    vec![
        bid("BID-1041", "Riverside Medical Pavilion", "Mercy Health Partners", "Portland, OR", 18_400_000.0, BidStatus::UnderReview, "2025-04-18", "L. Okafor"),
        bid("BID-1042", "Cedar Ridge Elementary", "Cedar Ridge USD", "Boise, ID", 9_750_000.0, BidStatus::Submitted, "2025-04-02", "M. Chen"),
        bid("BID-1043", "Harbor Point Lofts", "Pier Street Holdings", "Tacoma, WA", 26_100_000.0, BidStatus::Draft, "2025-05-09", "L. Okafor"),
        bid("BID-1044", "Northgate Transit Hub", "Sound Transit", "Seattle, WA", 41_800_000.0, BidStatus::Awarded, "2025-02-21", "J. Alvarez"),
        bid("BID-1045", "Summit Logistics Warehouse", "Summit Freight Co.", "Spokane, WA", 7_250_000.0, BidStatus::Lost, "2025-01-30", "M. Chen"),
        bid("BID-1046", "Willamette Office Retrofit", "Oregon DAS", "Salem, OR", 3_900_000.0, BidStatus::Draft, "TBD", "J. Alvarez"),
        bid("BID-1047", "Lakeshore Water Treatment", "City of Coeur d'Alene", "Coeur d'Alene, ID", 12_650_000.0, BidStatus::Submitted, "2025-03-28", "R. Patel"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn delivery(
    id: &str,
    name: &str,
    supplier: &str,
    location: &str,
    quantity: f64,
    status: DeliveryStatus,
    scheduled_date: &str,
) -> DeliveryRecord {
    DeliveryRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        supplier: supplier.to_owned(),
        location: location.to_owned(),
        quantity,
        status,
        scheduled_date: scheduled_date.to_owned(),
    }
}

#[must_use]
pub fn deliveries() -> Vec<DeliveryRecord> {
    vec![
        delivery("DLV-3301", "Ready-mix concrete, 4000 psi", "Cascade Aggregates", "Riverside Medical Pavilion", 120.0, DeliveryStatus::Scheduled, "2025-03-19"),
        delivery("DLV-3302", "W12x26 steel beams", "Pacific Steel Supply", "Northgate Transit Hub", 48.0, DeliveryStatus::InTransit, "2025-03-15"),
        delivery("DLV-3303", "Curtain wall panels", "Glasswerks NW", "Harbor Point Lofts", 36.0, DeliveryStatus::Delayed, "2025-03-11"),
        delivery("DLV-3304", "Rebar #5, grade 60", "Pacific Steel Supply", "Cedar Ridge Elementary", 14.5, DeliveryStatus::Delivered, "2025-03-07"),
        delivery("DLV-3305", "Rooftop HVAC units", "Northwind Mechanical", "Northgate Transit Hub", 4.0, DeliveryStatus::InTransit, "2025-03-16"),
        delivery("DLV-3306", "Drywall, 5/8 type X", "Builders Depot", "Willamette Office Retrofit", 900.0, DeliveryStatus::Scheduled, "2025-03-24"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn stage(
    id: &str,
    name: &str,
    client: &str,
    location: &str,
    stage: &str,
    percent_complete: f64,
    status: StageStatus,
    target_date: &str,
) -> StageRecord {
    StageRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        client: client.to_owned(),
        location: location.to_owned(),
        stage: stage.to_owned(),
        percent_complete,
        status,
        target_date: target_date.to_owned(),
    }
}

#[must_use]
pub fn stages() -> Vec<StageRecord> {
    vec![
        stage("JOB-210", "Northgate Transit Hub", "Sound Transit", "Seattle, WA", "Structural steel", 62.0, StageStatus::InProgress, "2025-06-30"),
        stage("JOB-211", "Cedar Ridge Elementary", "Cedar Ridge USD", "Boise, ID", "Foundations", 100.0, StageStatus::Complete, "2025-02-28"),
        stage("JOB-212", "Cedar Ridge Elementary", "Cedar Ridge USD", "Boise, ID", "Framing", 35.0, StageStatus::InProgress, "2025-05-15"),
        stage("JOB-213", "Riverside Medical Pavilion", "Mercy Health Partners", "Portland, OR", "Site work", 0.0, StageStatus::NotStarted, "2025-04-30"),
        stage("JOB-214", "Harbor Point Lofts", "Pier Street Holdings", "Tacoma, WA", "Enclosure", 48.0, StageStatus::OnHold, "2025-07-12"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn estimate(
    id: &str,
    name: &str,
    client: &str,
    location: &str,
    amount: f64,
    margin: f64,
    status: EstimateStatus,
    submitted_date: &str,
) -> EstimateRecord {
    EstimateRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        client: client.to_owned(),
        location: location.to_owned(),
        amount,
        margin,
        status,
        submitted_date: submitted_date.to_owned(),
    }
}

#[must_use]
pub fn estimates() -> Vec<EstimateRecord> {
    vec![
        estimate("EST-501", "Riverside Medical Pavilion", "Mercy Health Partners", "Portland, OR", 18_150_000.0, 8.5, EstimateStatus::Pending, "2025-03-03"),
        estimate("EST-502", "Cedar Ridge Elementary", "Cedar Ridge USD", "Boise, ID", 9_620_000.0, 6.0, EstimateStatus::Approved, "2025-02-14"),
        estimate("EST-503", "Harbor Point Lofts", "Pier Street Holdings", "Tacoma, WA", 25_900_000.0, 11.25, EstimateStatus::Draft, "2025-03-12"),
        estimate("EST-504", "Summit Logistics Warehouse", "Summit Freight Co.", "Spokane, WA", 7_400_000.0, 4.0, EstimateStatus::Rejected, "2025-01-20"),
        estimate("EST-505", "Lakeshore Water Treatment", "City of Coeur d'Alene", "Coeur d'Alene, ID", 12_480_000.0, 7.75, EstimateStatus::Approved, "2025-03-01"),
    ]
}
