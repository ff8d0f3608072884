//! # Inline Tokenizing
//!
//! Cursor-based scanning of free-form text fields for inline markup and
//! citation tokens.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Link, Citation, Bold, Italic, Strike)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Links are tried first, then citations, then emphasis (bold before
//! italic). `[^a](url)` is a link, and `**x**` is never two italics.
//! Unresolved citations are still tokenized; resolution happens in
//! [`crate::citations`].

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{citations_in, tokenize};
pub use types::{InlineKind, InlineNode};
