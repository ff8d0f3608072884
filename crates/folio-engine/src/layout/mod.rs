//! # Layout
//!
//! Folds an ordered block sequence into the two-column magazine layout.
//!
//! ## Modules
//!
//! - **`rows`**: strict grid, one left and one right cell per row
//! - **`sections`**: independently stacking columns between full-width blocks
//! - **`strategy`**: `LayoutStrategy` choosing between the two, and `Layout`
//! - **`reorder`**: synchronous reordering of the block sequence
//! - **`state`**: persisted order record and legacy placement migration
//!
//! ## Key Invariants
//!
//! - Every layout pass recomputes everything from the current sequence
//! - Placement always comes from block content via `resolve_placement`
//! - Both builders cover every input block exactly once

pub mod reorder;
pub mod rows;
pub mod sections;
pub mod state;
pub mod strategy;

pub use reorder::{apply_order, move_block, move_block_by_id};
pub use rows::{Row, RowBuilder, build_rows};
pub use sections::{Section, SectionBuilder, build_sections};
pub use state::{LayoutRecord, LayoutRecordError, migrate_legacy_placements, restore_layout};
pub use strategy::{Layout, LayoutStrategy, UnknownStrategy};
