use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::blocks::{Block, BlockId, resolve_placement};

use super::{
    rows::{Row, build_rows},
    sections::{Section, build_sections},
};

/// How side-placed blocks fold into the two-column layout.
///
/// Both strategies share the same placement resolver; they differ only in
/// how side blocks are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// Fixed grid: one left and one right cell per row.
    #[default]
    StrictGrid,
    /// Masonry-like: each column stacks on its own between full-width blocks.
    IndependentStack,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown layout strategy {0:?} (expected \"strict-grid\" or \"independent-stack\")")]
pub struct UnknownStrategy(pub String);

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 2] = [LayoutStrategy::StrictGrid, LayoutStrategy::IndependentStack];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutStrategy::StrictGrid => "strict-grid",
            LayoutStrategy::IndependentStack => "independent-stack",
        }
    }

    /// Runs a full layout pass over `blocks` in document order.
    pub fn apply(self, blocks: &[Block]) -> Layout<'_> {
        let layout = match self {
            LayoutStrategy::StrictGrid => {
                let placements: HashMap<&BlockId, _> = blocks
                    .iter()
                    .map(|b| (&b.id, resolve_placement(b)))
                    .collect();
                Layout::Rows(build_rows(blocks.iter().map(|b| &b.id), |id| {
                    placements.get(id).copied().unwrap_or_default()
                }))
            }
            LayoutStrategy::IndependentStack => {
                Layout::Sections(build_sections(blocks, resolve_placement))
            }
        };
        log::debug!(
            "{} pass over {} blocks produced {} units",
            self,
            blocks.len(),
            layout.len()
        );
        layout
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// The result of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", content = "units", rename_all = "kebab-case")]
pub enum Layout<'a> {
    Rows(Vec<Row>),
    Sections(Vec<Section<'a>>),
}

impl Layout<'_> {
    pub fn strategy(&self) -> LayoutStrategy {
        match self {
            Layout::Rows(_) => LayoutStrategy::StrictGrid,
            Layout::Sections(_) => LayoutStrategy::IndependentStack,
        }
    }

    /// Number of rows or sections.
    pub fn len(&self) -> usize {
        match self {
            Layout::Rows(rows) => rows.len(),
            Layout::Sections(sections) => sections.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All block ids in layout reading order.
    pub fn block_ids(&self) -> Vec<&BlockId> {
        match self {
            Layout::Rows(rows) => rows.iter().flat_map(Row::ids).collect(),
            Layout::Sections(sections) => sections
                .iter()
                .flat_map(|s| s.blocks())
                .map(|b| &b.id)
                .collect(),
        }
    }
}
