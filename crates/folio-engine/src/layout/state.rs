//! Persisted layout record.
//!
//! Storage itself lives outside the engine; this module only parses,
//! reconciles and captures the record:
//!
//! ```json
//! { "order": ["b1", "b2"], "placementById": { "b1": "left" } }
//! ```
//!
//! `placementById` is a legacy override map. It is read once at restore time
//! and folded into block content for blocks that carry no placement of their
//! own; records captured by this crate never write it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blocks::{Block, BlockId, Placement};

use super::reorder::apply_order;

#[derive(Debug, thiserror::Error)]
pub enum LayoutRecordError {
    #[error("Failed to parse layout record: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize layout record: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    /// Block ids in persisted visual order.
    #[serde(default)]
    pub order: Vec<BlockId>,
    /// Legacy placement overrides, read-only.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub placement_by_id: BTreeMap<BlockId, Placement>,
}

impl LayoutRecord {
    pub fn from_json(json: &str) -> Result<Self, LayoutRecordError> {
        serde_json::from_str(json).map_err(LayoutRecordError::Parse)
    }

    pub fn to_json(&self) -> Result<String, LayoutRecordError> {
        serde_json::to_string_pretty(self).map_err(LayoutRecordError::Serialize)
    }

    /// Captures the current block order. The override map is left empty.
    pub fn capture(blocks: &[Block]) -> Self {
        Self {
            order: blocks.iter().map(|b| b.id.clone()).collect(),
            placement_by_id: BTreeMap::new(),
        }
    }

    /// Applies this record to the live blocks.
    ///
    /// Live blocks missing from `order` are appended, stale ids are dropped,
    /// and legacy overrides are migrated into content.
    pub fn restore(&self, blocks: Vec<Block>) -> Vec<Block> {
        let mut blocks = apply_order(blocks, &self.order);
        let migrated = migrate_legacy_placements(&mut blocks, &self.placement_by_id);
        if migrated > 0 {
            log::debug!("Migrated {migrated} legacy placement overrides into block content");
        }
        blocks
    }
}

/// Folds legacy placement overrides into block content.
///
/// An override only applies to a block whose content supports placement and
/// has no explicit value yet; content always wins over the override map.
/// Returns the number of blocks updated.
pub fn migrate_legacy_placements(
    blocks: &mut [Block],
    overrides: &BTreeMap<BlockId, Placement>,
) -> usize {
    if overrides.is_empty() {
        return 0;
    }

    let mut migrated = 0;
    for block in blocks.iter_mut() {
        let Some(&placement) = overrides.get(&block.id) else {
            continue;
        };
        if !block.content.supports_placement() {
            if placement.is_side() {
                log::warn!(
                    "Ignoring legacy {placement} placement for {} block {}",
                    block.content.type_name(),
                    block.id
                );
            }
            continue;
        }
        if block.content.has_explicit_placement() {
            continue;
        }
        if block.set_placement(placement) {
            migrated += 1;
        }
    }
    migrated
}

/// Restores the persisted layout, falling back to the natural block order.
///
/// A missing or unparseable record is discarded rather than reported: the
/// caller always gets a usable block sequence.
pub fn restore_layout(blocks: Vec<Block>, record: Option<&str>) -> Vec<Block> {
    let Some(json) = record else {
        log::debug!("No stored layout record, using natural order");
        return blocks;
    };
    match LayoutRecord::from_json(json) {
        Ok(record) => record.restore(blocks),
        Err(e) => {
            log::warn!("Discarding stored layout record: {e}");
            blocks
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blocks::resolve_placement,
        tests::{image, quote, text},
    };
    use pretty_assertions::assert_eq;

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn parses_wire_format() {
        let record = LayoutRecord::from_json(
            r#"{"order":["b","a"],"placementById":{"a":"left","b":"bogus"}}"#,
        )
        .unwrap();
        assert_eq!(record.order, vec![BlockId::new("b"), BlockId::new("a")]);
        assert_eq!(record.placement_by_id[&BlockId::new("a")], Placement::Left);
        assert_eq!(record.placement_by_id[&BlockId::new("b")], Placement::Full);
    }

    #[test]
    fn missing_fields_default() {
        assert_eq!(LayoutRecord::from_json("{}").unwrap(), LayoutRecord::default());
    }

    #[test]
    fn capture_writes_order_only() {
        let blocks = vec![text("a", "", Some("left")), image("b", Some("right"))];
        let json = LayoutRecord::capture(&blocks).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "order": ["a", "b"] }));
    }

    #[test]
    fn restore_reorders_and_reconciles() {
        let blocks = vec![text("a", "", None), text("b", "", None), text("c", "", None)];
        let restored = restore_layout(blocks, Some(r#"{"order":["c","zombie","a"]}"#));
        assert_eq!(ids(&restored), vec!["c", "a", "b"]);
    }

    #[test]
    fn corrupt_record_falls_back_to_natural_order() {
        let blocks = vec![text("a", "", None), text("b", "", None)];
        let restored = restore_layout(blocks.clone(), Some("{not json"));
        assert_eq!(restored, blocks);
    }

    #[test]
    fn missing_record_keeps_blocks() {
        let blocks = vec![text("a", "", None)];
        assert_eq!(restore_layout(blocks.clone(), None), blocks);
    }

    #[test]
    fn legacy_overrides_fill_only_unset_content() {
        let mut blocks = vec![
            text("unset", "", None),
            text("set", "", Some("right")),
            image("img", None),
            quote("q", "", None),
        ];
        let overrides: BTreeMap<BlockId, Placement> = [
            ("unset", Placement::Left),
            ("set", Placement::Left),
            ("img", Placement::Right),
            ("q", Placement::Left),
        ]
        .into_iter()
        .map(|(id, p)| (BlockId::new(id), p))
        .collect();

        assert_eq!(migrate_legacy_placements(&mut blocks, &overrides), 2);
        let placements: Vec<Placement> = blocks.iter().map(resolve_placement).collect();
        assert_eq!(
            placements,
            vec![
                Placement::Left,
                Placement::Right,
                Placement::Right,
                Placement::Full,
            ]
        );
    }

    #[test]
    fn restored_record_never_round_trips_overrides() {
        let blocks = vec![text("a", "", None)];
        let restored = restore_layout(
            blocks,
            Some(r#"{"order":["a"],"placementById":{"a":"left"}}"#),
        );
        assert_eq!(resolve_placement(&restored[0]), Placement::Left);
        assert!(LayoutRecord::capture(&restored).placement_by_id.is_empty());
    }
}
