//! Construction records for the SiteDeck workspace.
//!
//! Bids, deliveries, stages and estimates as flat in-memory lists, plus the
//! pure operations every tab view shares: search/status/sort queries, inline
//! cell edits, display formatting and dashboard aggregates. Nothing here
//! reads the clock or the locale; callers pass a [`dates::DateFormat`] and
//! an explicit "today".
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Record types, status enums, `Record`/`Editable` traits |
//! | [`query`] | Search, status filter and stable typed sort |
//! | [`edit`] | Single-cell inline edit session and draft validation |
//! | [`dates`] | Explicit-format date parsing and due-date math |
//! | [`format`] | Cell display text |
//! | [`summary`] | Dashboard aggregates |
//! | [`seed`] | Demo dataset |
//! | [`error`] | `RecordsError` |

pub mod dates;
pub mod edit;
pub mod error;
pub mod format;
pub mod model;
pub mod query;
pub mod seed;
pub mod summary;

pub use dates::DateFormat;
pub use edit::{CellKey, EditSession};
pub use error::RecordsError;
pub use model::{
    BidRecord, BidStatus, Column, DeliveryRecord, DeliveryStatus, Editable, EstimateRecord, EstimateStatus, FieldKind,
    FieldValue, Record, StageRecord, StageStatus, StatusValue,
};
pub use query::{SortDirection, SortSpec, StatusFilter, TableQuery};
pub use seed::Dataset;
pub use summary::DashboardSummary;
