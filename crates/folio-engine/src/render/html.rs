use std::collections::HashMap;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    blocks::{Block, BlockContent, BlockId},
    citations::{CitationIndex, CitationMark, Reference},
    inline::{InlineNode, kinds::Link, tokenize},
    layout::{Layout, Row, Section},
    text::{SplitOptions, TextRun, split_paragraphs_and_lists},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown in place of a number for citations with no reference.
    pub unresolved_marker: String,
    pub split: SplitOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unresolved_marker: "?".to_string(),
            split: SplitOptions::default(),
        }
    }
}

/// Renders one text field's inline markup.
pub fn render_inline(text: &str, index: &CitationIndex, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(text.len());
    push_inline(&mut out, text, index, options);
    out
}

fn push_inline(out: &mut String, s: &str, index: &CitationIndex, options: &RenderOptions) {
    for node in tokenize(s) {
        match node {
            InlineNode::Text(sp) => out.push_str(&encode_text(sp.slice(s))),
            InlineNode::Link { text, url, .. } if !Link::is_safe_url(url.slice(s)) => {
                log::debug!("Dropping link with unsafe url {:?}", url.slice(s));
                out.push_str(&encode_text(text.slice(s)));
            }
            InlineNode::Link { text, url, .. } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(url.slice(s)));
                out.push_str("\">");
                out.push_str(&encode_text(text.slice(s)));
                out.push_str("</a>");
            }
            InlineNode::Citation { id, .. } => push_citation(out, id.slice(s), index, options),
            InlineNode::Bold { inner, .. } => {
                push_wrapped(out, "strong", inner.slice(s), index, options)
            }
            InlineNode::Italic { inner, .. } => {
                push_wrapped(out, "em", inner.slice(s), index, options)
            }
            InlineNode::Strike { inner, .. } => {
                push_wrapped(out, "s", inner.slice(s), index, options)
            }
        }
    }
}

fn push_wrapped(
    out: &mut String,
    tag: &str,
    inner: &str,
    index: &CitationIndex,
    options: &RenderOptions,
) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_inline(out, inner, index, options);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_citation(out: &mut String, id: &str, index: &CitationIndex, options: &RenderOptions) {
    let id_attr = encode_double_quoted_attribute(id);
    match index.mark(id) {
        CitationMark::Numbered(n) => {
            out.push_str(&format!(
                "<sup class=\"citation\"><a href=\"#ref-{id_attr}\">{n}</a></sup>"
            ));
        }
        CitationMark::Unresolved => {
            out.push_str(&format!(
                "<sup class=\"citation unresolved\" title=\"Unknown reference: {id_attr}\">{}</sup>",
                encode_text(&options.unresolved_marker)
            ));
        }
    }
}

/// Renders a text body as `<p>` paragraphs and `<ul>` lists.
///
/// Blank lines inside a paragraph run separate paragraphs; other line
/// breaks become `<br>`.
pub fn render_text_body(text: &str, index: &CitationIndex, options: &RenderOptions) -> String {
    let mut out = String::new();
    for run in split_paragraphs_and_lists(text, options.split) {
        match run {
            TextRun::Paragraph { lines } => {
                for group in lines.split(|l| l.trim().is_empty()).filter(|g| !g.is_empty()) {
                    out.push_str("<p>");
                    for (i, line) in group.iter().enumerate() {
                        if i > 0 {
                            out.push_str("<br>");
                        }
                        push_inline(&mut out, line, index, options);
                    }
                    out.push_str("</p>");
                }
            }
            TextRun::List { items } => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    push_inline(&mut out, &item, index, options);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
        }
    }
    out
}

/// Renders a single block.
pub fn render_block(block: &Block, index: &CitationIndex, options: &RenderOptions) -> String {
    let id = encode_double_quoted_attribute(block.id.as_str());
    let kind = block.content.type_name();
    let mut out = format!("<section class=\"block block-{kind}\" id=\"block-{id}\">");

    match &block.content {
        BlockContent::Title { title, subtitle } => {
            out.push_str("<h1>");
            push_inline(&mut out, title, index, options);
            out.push_str("</h1>");
            if !subtitle.trim().is_empty() {
                out.push_str("<p class=\"subtitle\">");
                push_inline(&mut out, subtitle, index, options);
                out.push_str("</p>");
            }
        }
        BlockContent::Text {
            heading,
            text,
            drop_cap,
            text_align,
            ..
        } => {
            if let Some(heading) = heading {
                out.push_str("<h2>");
                push_inline(&mut out, heading, index, options);
                out.push_str("</h2>");
            }
            let mut classes = vec!["body"];
            if *drop_cap {
                classes.push("drop-cap");
            }
            let align = text_align.map(|a| format!("align-{}", a.as_str()));
            if let Some(align) = &align {
                classes.push(align);
            }
            out.push_str(&format!("<div class=\"{}\">", classes.join(" ")));
            out.push_str(&render_text_body(text, index, options));
            out.push_str("</div>");
        }
        BlockContent::Image {
            url,
            caption,
            scale,
            ..
        } => {
            out.push_str(&format!(
                "<figure style=\"--scale: {scale}\"><img src=\"{}\" alt=\"\">",
                encode_double_quoted_attribute(url)
            ));
            if let Some(caption) = caption {
                out.push_str("<figcaption>");
                push_inline(&mut out, caption, index, options);
                out.push_str("</figcaption>");
            }
            out.push_str("</figure>");
        }
        BlockContent::Sidebar { groups } => {
            out.push_str("<aside>");
            for group in groups {
                out.push_str("<h3>");
                push_inline(&mut out, &group.heading, index, options);
                out.push_str("</h3><ul>");
                for item in &group.items {
                    out.push_str("<li>");
                    push_inline(&mut out, item, index, options);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            out.push_str("</aside>");
        }
        BlockContent::Quote { quote, author } => {
            out.push_str("<blockquote><p>");
            push_inline(&mut out, quote, index, options);
            out.push_str("</p>");
            if let Some(author) = author {
                out.push_str("<cite>");
                push_inline(&mut out, author, index, options);
                out.push_str("</cite>");
            }
            out.push_str("</blockquote>");
        }
        BlockContent::Divider { style, width } => {
            out.push_str(&format!(
                "<hr class=\"divider-{}\" data-width=\"{}\">",
                encode_double_quoted_attribute(style),
                encode_double_quoted_attribute(width)
            ));
        }
    }

    out.push_str("</section>");
    out
}

/// Renders the numbered reference footer. Empty when nothing is cited.
pub fn render_references(index: &CitationIndex, references: &[Reference]) -> String {
    let footer = index.footer(references);
    if footer.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ol class=\"references\">");
    for (_, reference) in footer {
        out.push_str(&format!(
            "<li id=\"ref-{}\">",
            encode_double_quoted_attribute(&reference.id)
        ));
        match &reference.url {
            Some(url) => out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(url),
                encode_text(&reference.title)
            )),
            None => out.push_str(&encode_text(&reference.title)),
        }
        let details: Vec<&str> = [&reference.publisher, &reference.date]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if !details.is_empty() {
            out.push_str(". ");
            out.push_str(&encode_text(&details.join(", ")));
        }
        out.push_str("</li>");
    }
    out.push_str("</ol>");
    out
}

/// Renders a full layout pass over `blocks`.
pub fn render_layout(
    layout: &Layout<'_>,
    blocks: &[Block],
    index: &CitationIndex,
    options: &RenderOptions,
) -> String {
    let by_id: HashMap<&BlockId, &Block> = blocks.iter().map(|b| (&b.id, b)).collect();
    let render_id = |id: &BlockId| {
        by_id
            .get(id)
            .map(|b| render_block(b, index, options))
            .unwrap_or_default()
    };

    let mut out = String::new();
    match layout {
        Layout::Rows(rows) => {
            for row in rows {
                match row {
                    Row::Full { id } => {
                        out.push_str("<div class=\"row full\">");
                        out.push_str(&render_id(id));
                        out.push_str("</div>");
                    }
                    Row::Split { left, right } => {
                        out.push_str("<div class=\"row split\"><div class=\"cell left\">");
                        if let Some(id) = left {
                            out.push_str(&render_id(id));
                        }
                        out.push_str("</div><div class=\"cell right\">");
                        if let Some(id) = right {
                            out.push_str(&render_id(id));
                        }
                        out.push_str("</div></div>");
                    }
                }
            }
        }
        Layout::Sections(sections) => {
            for section in sections {
                match section {
                    Section::Full { block } => {
                        out.push_str("<div class=\"section full\">");
                        out.push_str(&render_block(block, index, options));
                        out.push_str("</div>");
                    }
                    Section::Columns { left, right } => {
                        out.push_str("<div class=\"section columns\"><div class=\"column left\">");
                        for block in left {
                            out.push_str(&render_block(block, index, options));
                        }
                        out.push_str("</div><div class=\"column right\">");
                        for block in right {
                            out.push_str(&render_block(block, index, options));
                        }
                        out.push_str("</div></div>");
                    }
                }
            }
        }
    }
    out
}
