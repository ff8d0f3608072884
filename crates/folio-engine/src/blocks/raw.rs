//! Ingestion form of a block.
//!
//! Articles saved over the years spell a few fields differently: text blocks
//! carry their layout hint as `layout` or `textLayout`, and older image
//! blocks use `placement` where newer ones use `position`. [`RawBlock`]
//! accepts every spelling and folds it into the single canonical field of
//! [`BlockContent`], so nothing downstream ever looks at an alias.

use serde::Deserialize;

use super::types::{Block, BlockContent, BlockId, SidebarGroup, TextAlign};

#[derive(Debug, Deserialize)]
pub struct RawBlock {
    id: BlockId,
    #[serde(flatten)]
    content: RawContent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum RawContent {
    Title {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
    },
    Text {
        #[serde(default)]
        heading: Option<String>,
        #[serde(default)]
        text: String,
        #[serde(default)]
        drop_cap: bool,
        #[serde(default)]
        layout: Option<String>,
        #[serde(default)]
        text_layout: Option<String>,
        #[serde(default)]
        text_align: Option<String>,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        position: Option<String>,
        #[serde(default)]
        placement: Option<String>,
        #[serde(default = "default_scale")]
        scale: f32,
    },
    Sidebar {
        #[serde(default)]
        groups: Vec<SidebarGroup>,
    },
    Quote {
        #[serde(default)]
        quote: String,
        #[serde(default)]
        author: Option<String>,
    },
    Divider {
        #[serde(default = "default_divider_style")]
        style: String,
        #[serde(default = "default_divider_width")]
        width: String,
    },
}

fn default_scale() -> f32 {
    1.0
}

fn default_divider_style() -> String {
    "solid".to_string()
}

fn default_divider_width() -> String {
    "full".to_string()
}

/// Treats empty and whitespace-only strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let content = match raw.content {
            RawContent::Title { title, subtitle } => BlockContent::Title { title, subtitle },
            RawContent::Text {
                heading,
                text,
                drop_cap,
                layout,
                text_layout,
                text_align,
            } => {
                let text_align = text_align.and_then(|value| {
                    let parsed = TextAlign::parse(&value);
                    if parsed.is_none() {
                        log::debug!("Ignoring unknown textAlign {value:?} on block {}", raw.id);
                    }
                    parsed
                });
                BlockContent::Text {
                    heading: non_blank(heading),
                    text,
                    drop_cap,
                    // `layout` is the newer spelling and wins when both are present
                    layout: non_blank(layout).or_else(|| non_blank(text_layout)),
                    text_align,
                }
            }
            RawContent::Image {
                url,
                caption,
                position,
                placement,
                scale,
            } => BlockContent::Image {
                url,
                caption: non_blank(caption),
                position: non_blank(position).or_else(|| non_blank(placement)),
                scale,
            },
            RawContent::Sidebar { groups } => BlockContent::Sidebar { groups },
            RawContent::Quote { quote, author } => BlockContent::Quote {
                quote,
                author: non_blank(author),
            },
            RawContent::Divider { style, width } => BlockContent::Divider { style, width },
        };

        Block {
            id: raw.id,
            content,
        }
    }
}
