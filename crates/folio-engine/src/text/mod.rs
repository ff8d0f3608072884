//! # Text Bodies
//!
//! Line-level structure of a text block's body: paragraphs and bullet lists.

pub mod split;

pub use split::{RunBuilder, SplitOptions, TextRun, split_paragraphs_and_lists};
