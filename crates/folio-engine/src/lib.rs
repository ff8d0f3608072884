//! Block layout and citation engine for magazine-style articles.
//!
//! Everything here is a pure, synchronous transformation over in-memory
//! data: an ordered block sequence goes in, rows or sections and annotated
//! text come out. Each pass recomputes from scratch.

pub mod article;
pub mod blocks;
pub mod citations;
pub mod inline;
pub mod layout;
pub mod render;
pub mod span;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use article::{Article, ArticleError, Composition};
pub use blocks::{Block, BlockContent, BlockId, Placement, resolve_placement};
pub use citations::{CitationIndex, CitationMark, Reference, index_citations};
pub use inline::{InlineKind, InlineNode, citations_in, tokenize};
pub use layout::{
    Layout, LayoutRecord, LayoutStrategy, Row, Section, build_rows, build_sections,
    restore_layout,
};
pub use render::RenderOptions;
pub use span::Span;
pub use text::{SplitOptions, TextRun, split_paragraphs_and_lists};
