use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Block, BlockContent};

/// Where a block sits in the two-column layout.
///
/// Placement is always derived from block content; it is never stored as
/// independent state. Deserialization is lenient: any value other than
/// `left` or `right` reads as [`Placement::Full`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Placement {
    Left,
    Right,
    #[default]
    Full,
}

impl Placement {
    /// Maps a layout hint to a placement.
    ///
    /// `left` and `right` (any ASCII case, surrounding whitespace ignored) pick
    /// a column; anything else, including no hint, is full width.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(str::trim) {
            Some(h) if h.eq_ignore_ascii_case("left") => Placement::Left,
            Some(h) if h.eq_ignore_ascii_case("right") => Placement::Right,
            _ => Placement::Full,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Full => "full",
        }
    }

    /// True for `Left` and `Right`.
    pub fn is_side(self) -> bool {
        !matches!(self, Placement::Full)
    }
}

impl From<String> for Placement {
    fn from(value: String) -> Self {
        Placement::from_hint(Some(&value))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BlockContent {
    /// Derives this content's placement.
    pub fn placement(&self) -> Placement {
        match self {
            BlockContent::Text { layout, .. } => Placement::from_hint(layout.as_deref()),
            BlockContent::Image { position, .. } => Placement::from_hint(position.as_deref()),
            BlockContent::Title { .. }
            | BlockContent::Sidebar { .. }
            | BlockContent::Quote { .. }
            | BlockContent::Divider { .. } => Placement::Full,
        }
    }

    /// Whether the content has a field that decides its placement.
    pub fn supports_placement(&self) -> bool {
        matches!(self, BlockContent::Text { .. } | BlockContent::Image { .. })
    }

    /// Whether the placement field has been set explicitly.
    pub fn has_explicit_placement(&self) -> bool {
        match self {
            BlockContent::Text { layout, .. } => layout.is_some(),
            BlockContent::Image { position, .. } => position.is_some(),
            _ => false,
        }
    }
}

impl Block {
    /// Writes `placement` into the block's canonical placement field.
    ///
    /// Returns `false`, leaving the block untouched, for block types that are
    /// always full width.
    pub fn set_placement(&mut self, placement: Placement) -> bool {
        match &mut self.content {
            BlockContent::Text { layout, .. } => {
                *layout = Some(placement.as_str().to_string());
                true
            }
            BlockContent::Image { position, .. } => {
                *position = Some(placement.as_str().to_string());
                true
            }
            _ => false,
        }
    }
}

/// Resolves a block's placement from its content.
///
/// Total and deterministic: the same block always yields the same answer.
pub fn resolve_placement(block: &Block) -> Placement {
    block.content.placement()
}
