use serde::{Deserialize, Serialize};

use crate::{
    blocks::Block,
    citations::{CitationIndex, Reference},
    layout::{Layout, LayoutRecord, LayoutStrategy, restore_layout},
    render::{RenderOptions, render_layout, render_references},
};

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("Failed to parse article: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An article as handed over by the content store: ordered blocks plus the
/// reference list they cite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// Output of one full layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition<'a> {
    pub layout: Layout<'a>,
    pub citations: CitationIndex,
}

impl Article {
    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies a stored layout record, if any, to the block order.
    ///
    /// A missing or corrupt record leaves the natural order in place.
    pub fn restore_layout(&mut self, record: Option<&str>) {
        let blocks = std::mem::take(&mut self.blocks);
        self.blocks = restore_layout(blocks, record);
    }

    /// The record to persist for the current block order.
    pub fn layout_record(&self) -> LayoutRecord {
        LayoutRecord::capture(&self.blocks)
    }

    /// Recomputes layout and citation numbering from scratch.
    pub fn compose(&self, strategy: LayoutStrategy) -> Composition<'_> {
        Composition {
            layout: strategy.apply(&self.blocks),
            citations: CitationIndex::build(&self.blocks, &self.references),
        }
    }

    /// Composes and renders the article body followed by its reference footer.
    pub fn render_html(&self, strategy: LayoutStrategy, options: &RenderOptions) -> String {
        let Composition { layout, citations } = self.compose(strategy);
        let mut html = String::from("<article>");
        html.push_str(&render_layout(&layout, &self.blocks, &citations, options));
        html.push_str(&render_references(&citations, &self.references));
        html.push_str("</article>");
        html
    }
}
