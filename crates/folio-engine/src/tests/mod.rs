//! Shared builders for unit tests.

use crate::{
    blocks::{Block, BlockContent, SidebarGroup},
    citations::Reference,
};

pub fn title(id: &str, title: &str, subtitle: &str) -> Block {
    Block::new(
        id,
        BlockContent::Title {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        },
    )
}

pub fn text(id: &str, body: &str, layout: Option<&str>) -> Block {
    Block::new(
        id,
        BlockContent::Text {
            heading: None,
            text: body.to_string(),
            drop_cap: false,
            layout: layout.map(str::to_string),
            text_align: None,
        },
    )
}

pub fn image(id: &str, position: Option<&str>) -> Block {
    Block::new(
        id,
        BlockContent::Image {
            url: format!("https://img.test/{id}.jpg"),
            caption: None,
            position: position.map(str::to_string),
            scale: 1.0,
        },
    )
}

pub fn captioned_image(id: &str, position: Option<&str>, caption: &str) -> Block {
    let mut block = image(id, position);
    if let BlockContent::Image { caption: c, .. } = &mut block.content {
        *c = Some(caption.to_string());
    }
    block
}

pub fn quote(id: &str, quote: &str, author: Option<&str>) -> Block {
    Block::new(
        id,
        BlockContent::Quote {
            quote: quote.to_string(),
            author: author.map(str::to_string),
        },
    )
}

pub fn sidebar(id: &str, groups: Vec<(&str, Vec<&str>)>) -> Block {
    Block::new(
        id,
        BlockContent::Sidebar {
            groups: groups
                .into_iter()
                .map(|(heading, items)| SidebarGroup {
                    heading: heading.to_string(),
                    items: items.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        },
    )
}

pub fn divider(id: &str) -> Block {
    Block::new(
        id,
        BlockContent::Divider {
            style: "solid".to_string(),
            width: "full".to_string(),
        },
    )
}

pub fn reference(id: &str, title: &str) -> Reference {
    Reference {
        id: id.to_string(),
        title: title.to_string(),
        url: None,
        publisher: None,
        date: None,
    }
}
