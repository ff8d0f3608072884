//! # Citations
//!
//! Reference list entries and first-occurrence citation numbering.

pub mod index;
pub mod reference;

pub use index::{CitationIndex, CitationMark, index_citations};
pub use reference::Reference;
