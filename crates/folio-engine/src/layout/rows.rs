use serde::Serialize;

use crate::blocks::{BlockId, Placement};

/// One line of the strict two-column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Row {
    /// A single block spanning both columns.
    Full { id: BlockId },
    /// A left/right pair; either slot may be empty.
    ///
    /// When both slots are filled the left block never comes later in
    /// document order than the right one.
    Split {
        left: Option<BlockId>,
        right: Option<BlockId>,
    },
}

impl Row {
    /// Block ids in reading order (left slot before right slot).
    pub fn ids(&self) -> impl Iterator<Item = &BlockId> {
        let (first, second) = match self {
            Row::Full { id } => (Some(id), None),
            Row::Split { left, right } => (left.as_ref(), right.as_ref()),
        };
        first.into_iter().chain(second)
    }
}

#[derive(Debug, Default)]
struct PendingSplit {
    left: Option<BlockId>,
    right: Option<BlockId>,
}

impl PendingSplit {
    fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Folds placed block ids into strict-grid rows.
///
/// A side block never overwrites an occupied slot: the pending row is
/// flushed first. A left block arriving after a right block also starts a
/// new row, since pairing them would put the later block in the earlier
/// reading slot.
pub struct RowBuilder {
    pending: PendingSplit,
    out: Vec<Row>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self {
            pending: PendingSplit::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, id: BlockId, placement: Placement) {
        match placement {
            Placement::Full => {
                self.flush();
                self.out.push(Row::Full { id });
            }
            Placement::Left => {
                if !self.pending.is_empty() {
                    self.flush();
                }
                self.pending.left = Some(id);
            }
            Placement::Right => {
                if self.pending.right.is_some() {
                    self.flush();
                }
                self.pending.right = Some(id);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Row> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            self.out.push(Row::Split {
                left: pending.left,
                right: pending.right,
            });
        }
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds strict-grid rows from ids in document order.
///
/// Every input id appears in the output exactly once, and flattening the
/// rows (left slot before right) gives back the input order.
pub fn build_rows<'a, I, F>(ids: I, mut resolve: F) -> Vec<Row>
where
    I: IntoIterator<Item = &'a BlockId>,
    F: FnMut(&BlockId) -> Placement,
{
    let mut builder = RowBuilder::new();
    for id in ids {
        let placement = resolve(id);
        builder.push(id.clone(), placement);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn id(s: &str) -> BlockId {
        BlockId::new(s)
    }

    fn split(left: Option<&str>, right: Option<&str>) -> Row {
        Row::Split {
            left: left.map(id),
            right: right.map(id),
        }
    }

    fn full(s: &str) -> Row {
        Row::Full { id: id(s) }
    }

    fn rows_for(placements: &[(&str, Placement)]) -> Vec<Row> {
        let map: HashMap<BlockId, Placement> =
            placements.iter().map(|(k, p)| (id(k), *p)).collect();
        let ids: Vec<BlockId> = placements.iter().map(|(k, _)| id(k)).collect();
        build_rows(&ids, |id| map[id])
    }

    use Placement::{Full, Left, Right};

    #[test]
    fn empty_input() {
        assert_eq!(rows_for(&[]), vec![]);
    }

    #[test]
    fn left_then_right_share_a_row() {
        assert_eq!(
            rows_for(&[("a", Left), ("b", Right)]),
            vec![split(Some("a"), Some("b"))]
        );
    }

    #[test]
    fn occupied_right_slot_forces_new_row() {
        assert_eq!(
            rows_for(&[("t1", Left), ("img", Right), ("t2", Right)]),
            vec![split(Some("t1"), Some("img")), split(None, Some("t2"))]
        );
    }

    #[test]
    fn occupied_left_slot_forces_new_row() {
        assert_eq!(
            rows_for(&[("a", Left), ("b", Left)]),
            vec![split(Some("a"), None), split(Some("b"), None)]
        );
    }

    #[test]
    fn left_after_right_starts_new_row() {
        assert_eq!(
            rows_for(&[("r", Right), ("l", Left)]),
            vec![split(None, Some("r")), split(Some("l"), None)]
        );
    }

    #[test]
    fn full_flushes_pending_split() {
        assert_eq!(
            rows_for(&[("a", Left), ("f", Full), ("b", Right)]),
            vec![split(Some("a"), None), full("f"), split(None, Some("b"))]
        );
    }

    #[test]
    fn consecutive_full_blocks_emit_no_empty_splits() {
        assert_eq!(rows_for(&[("x", Full), ("y", Full)]), vec![full("x"), full("y")]);
    }

    #[test]
    fn row_ids_read_left_then_right() {
        let row = split(Some("a"), Some("b"));
        let ids: Vec<&str> = row.ids().map(BlockId::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
