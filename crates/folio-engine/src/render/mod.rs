//! # Rendering
//!
//! Turns tokenized text, the citation index and a layout pass into HTML
//! fragments. Citations render as numbered superscripts linking to the
//! footer; citations without a reference render as a flagged marker.

pub mod html;

pub use html::{
    RenderOptions, render_block, render_inline, render_layout, render_references,
    render_text_body,
};
