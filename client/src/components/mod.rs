//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace tables and tour chrome while reading/writing
//! the shared `WorkspaceState` context.

pub mod editable_cell;
pub mod filter_bar;
pub mod record_table;
pub mod stat_card;
pub mod status_badge;
pub mod tab_bar;
pub mod tour_carousel;
