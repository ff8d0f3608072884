use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use super::raw::RawBlock;

/// Stable, opaque identifier of a block.
///
/// Document order is never stored on the block; it is the block's index in
/// the containing sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One typed unit of article content.
///
/// Deserialization goes through [`RawBlock`], which folds legacy field names
/// into the canonical ones; serialization always writes the canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

/// Content of a block, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum BlockContent {
    Title {
        title: String,
        subtitle: String,
    },
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        text: String,
        drop_cap: bool,
        /// Canonical layout hint; `left`/`right` place the block in a column.
        #[serde(skip_serializing_if = "Option::is_none")]
        layout: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text_align: Option<TextAlign>,
    },
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        /// `left`/`right` place the image in a column; anything else is full width.
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<String>,
        scale: f32,
    },
    Sidebar {
        groups: Vec<SidebarGroup>,
    },
    Quote {
        quote: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Divider {
        style: String,
        width: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Parses a wire value, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            "justify" => Some(TextAlign::Justify),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl BlockContent {
    /// Short lowercase name of the block type, as written on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockContent::Title { .. } => "title",
            BlockContent::Text { .. } => "text",
            BlockContent::Image { .. } => "image",
            BlockContent::Sidebar { .. } => "sidebar",
            BlockContent::Quote { .. } => "quote",
            BlockContent::Divider { .. } => "divider",
        }
    }

    /// Every text-bearing field of the block, in reading order.
    ///
    /// This is the set of fields that may carry inline markup and citations.
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            BlockContent::Title { title, subtitle } => vec![title.as_str(), subtitle.as_str()],
            BlockContent::Text { heading, text, .. } => heading
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(text.as_str()))
                .collect(),
            BlockContent::Image { caption, .. } => caption.iter().map(String::as_str).collect(),
            BlockContent::Sidebar { groups } => groups
                .iter()
                .flat_map(|g| {
                    std::iter::once(g.heading.as_str()).chain(g.items.iter().map(String::as_str))
                })
                .collect(),
            BlockContent::Quote { quote, author } => std::iter::once(quote.as_str())
                .chain(author.iter().map(String::as_str))
                .collect(),
            BlockContent::Divider { .. } => vec![],
        }
    }
}
