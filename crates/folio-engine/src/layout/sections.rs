use serde::Serialize;

use crate::blocks::{Block, Placement};

/// One unit of the independently stacking layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section<'a> {
    /// A single block spanning both columns.
    Full { block: &'a Block },
    /// Two columns that stack independently of each other.
    Columns {
        left: Vec<&'a Block>,
        right: Vec<&'a Block>,
    },
}

impl<'a> Section<'a> {
    /// Blocks in this section: left column first, then right.
    pub fn blocks(&self) -> Vec<&'a Block> {
        match self {
            Section::Full { block } => vec![*block],
            Section::Columns { left, right } => left.iter().chain(right).copied().collect(),
        }
    }
}

/// Groups placed blocks into full-width sections and column runs.
///
/// Unlike [`super::RowBuilder`] there is no slot flush: side blocks append
/// to their column until a full-width block or end of input. Order is kept
/// within each column but not across them.
pub struct SectionBuilder<'a> {
    left: Vec<&'a Block>,
    right: Vec<&'a Block>,
    out: Vec<Section<'a>>,
}

impl<'a> SectionBuilder<'a> {
    pub fn new() -> Self {
        Self {
            left: vec![],
            right: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, block: &'a Block, placement: Placement) {
        match placement {
            Placement::Full => {
                self.flush();
                self.out.push(Section::Full { block });
            }
            Placement::Left => self.left.push(block),
            Placement::Right => self.right.push(block),
        }
    }

    pub fn finish(mut self) -> Vec<Section<'a>> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }
        self.out.push(Section::Columns {
            left: std::mem::take(&mut self.left),
            right: std::mem::take(&mut self.right),
        });
    }
}

impl Default for SectionBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds independently stacking sections from blocks in document order.
pub fn build_sections<'a, I, F>(blocks: I, mut resolve: F) -> Vec<Section<'a>>
where
    I: IntoIterator<Item = &'a Block>,
    F: FnMut(&Block) -> Placement,
{
    let mut builder = SectionBuilder::new();
    for block in blocks {
        let placement = resolve(block);
        builder.push(block, placement);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blocks::resolve_placement,
        tests::{image, quote, text},
    };
    use pretty_assertions::assert_eq;

    fn ids<'a>(blocks: &[&'a Block]) -> Vec<&'a str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn empty_input() {
        let blocks: Vec<Block> = vec![];
        assert!(build_sections(&blocks, resolve_placement).is_empty());
    }

    #[test]
    fn columns_stack_without_slot_flush() {
        let blocks = vec![
            text("t1", "a", Some("left")),
            image("i1", Some("right")),
            text("t2", "b", Some("right")),
            text("t3", "c", Some("left")),
        ];
        let sections = build_sections(&blocks, resolve_placement);
        assert_eq!(sections.len(), 1);
        match &sections[0] {
            Section::Columns { left, right } => {
                assert_eq!(ids(left), vec!["t1", "t3"]);
                assert_eq!(ids(right), vec!["i1", "t2"]);
            }
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[test]
    fn full_block_flushes_columns() {
        let blocks = vec![
            text("t1", "a", Some("left")),
            quote("q", "words", None),
            image("i1", Some("right")),
        ];
        let sections = build_sections(&blocks, resolve_placement);
        assert_eq!(sections.len(), 3);
        assert!(matches!(&sections[0], Section::Columns { left, right } if left.len() == 1 && right.is_empty()));
        assert!(matches!(&sections[1], Section::Full { block } if block.id.as_str() == "q"));
        assert!(matches!(&sections[2], Section::Columns { left, right } if left.is_empty() && right.len() == 1));
    }

    #[test]
    fn full_blocks_only() {
        let blocks = vec![quote("a", "x", None), text("b", "y", None)];
        let sections = build_sections(&blocks, resolve_placement);
        assert_eq!(
            sections,
            vec![
                Section::Full { block: &blocks[0] },
                Section::Full { block: &blocks[1] },
            ]
        );
    }
}
