//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[text](url)`
//! - **`Citation`**: `[^id]` with ids drawn from `[A-Za-z0-9_-]`
//! - **`Emphasis`**: `**bold**`, `*italic*`, `~~strike~~`
//!
//! All delimiter constants live here. The parser calls these constants; it
//! never hardcodes `[^` or `**`.

pub mod citation;
pub mod emphasis;
pub mod link;

pub use citation::Citation;
pub use emphasis::Emphasis;
pub use link::Link;
