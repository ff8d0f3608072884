//! # Blocks
//!
//! The article's content model and the placement resolver.
//!
//! - **`types`**: `Block`, `BlockId`, `BlockContent` and friends
//! - **`raw`**: ingestion form that normalises legacy field names
//! - **`placement`**: `Placement` and `resolve_placement`

pub mod placement;
mod raw;
pub mod types;

pub use placement::{Placement, resolve_placement};
pub use types::{Block, BlockContent, BlockId, SidebarGroup, TextAlign};
