use std::collections::HashMap;

use crate::blocks::{Block, BlockId};

/// Moves the block at `from` so that it ends up at index `to`.
///
/// `to` is clamped to the end of the sequence. Returns `false` and leaves the
/// sequence untouched when `from` is out of range.
pub fn move_block(blocks: &mut Vec<Block>, from: usize, to: usize) -> bool {
    if from >= blocks.len() {
        return false;
    }
    let block = blocks.remove(from);
    let to = to.min(blocks.len());
    blocks.insert(to, block);
    true
}

/// Moves the block with `id` to index `to`. Returns `false` if no block has that id.
pub fn move_block_by_id(blocks: &mut Vec<Block>, id: &str, to: usize) -> bool {
    match blocks.iter().position(|b| b.id.as_str() == id) {
        Some(from) => move_block(blocks, from, to),
        None => false,
    }
}

/// Reorders `blocks` to follow `order`.
///
/// Ids in `order` that match no block are dropped, repeated ids keep their
/// first position, and blocks missing from `order` are appended in their
/// original relative order.
pub fn apply_order(blocks: Vec<Block>, order: &[BlockId]) -> Vec<Block> {
    let positions: HashMap<BlockId, usize> = blocks
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id.clone(), i))
        .collect();
    let mut slots: Vec<Option<Block>> = blocks.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    let mut stale = 0usize;

    for id in order {
        match positions.get(id) {
            Some(&i) => {
                if let Some(block) = slots[i].take() {
                    out.push(block);
                }
            }
            None => stale += 1,
        }
    }

    let placed = out.len();
    out.extend(slots.into_iter().flatten());
    log::debug!(
        "Applied stored order: {placed} placed, {} appended, {stale} stale ids dropped",
        out.len() - placed
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::text;
    use pretty_assertions::assert_eq;

    fn blocks(ids: &[&str]) -> Vec<Block> {
        ids.iter().map(|id| text(id, "", None)).collect()
    }

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    fn order(ids: &[&str]) -> Vec<BlockId> {
        ids.iter().map(|id| BlockId::new(*id)).collect()
    }

    #[test]
    fn move_forward_and_back() {
        let mut seq = blocks(&["a", "b", "c", "d"]);
        assert!(move_block(&mut seq, 0, 2));
        assert_eq!(ids(&seq), vec!["b", "c", "a", "d"]);
        assert!(move_block(&mut seq, 3, 0));
        assert_eq!(ids(&seq), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn move_clamps_target() {
        let mut seq = blocks(&["a", "b", "c"]);
        assert!(move_block(&mut seq, 0, 99));
        assert_eq!(ids(&seq), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let mut seq = blocks(&["a"]);
        assert!(!move_block(&mut seq, 1, 0));
        assert_eq!(ids(&seq), vec!["a"]);
    }

    #[test]
    fn move_by_id() {
        let mut seq = blocks(&["a", "b", "c"]);
        assert!(move_block_by_id(&mut seq, "c", 0));
        assert_eq!(ids(&seq), vec!["c", "a", "b"]);
        assert!(!move_block_by_id(&mut seq, "zzz", 0));
    }

    #[test]
    fn apply_order_appends_new_and_drops_stale() {
        let seq = blocks(&["a", "b", "c", "new"]);
        let reordered = apply_order(seq, &order(&["c", "gone", "a", "b"]));
        assert_eq!(ids(&reordered), vec!["c", "a", "b", "new"]);
    }

    #[test]
    fn apply_order_ignores_repeats() {
        let seq = blocks(&["a", "b"]);
        let reordered = apply_order(seq, &order(&["b", "b", "a"]));
        assert_eq!(ids(&reordered), vec!["b", "a"]);
    }

    #[test]
    fn empty_order_keeps_natural_sequence() {
        let seq = blocks(&["a", "b"]);
        assert_eq!(ids(&apply_order(seq, &[])), vec!["a", "b"]);
    }
}
