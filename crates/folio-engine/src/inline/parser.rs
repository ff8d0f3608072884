use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Citation, Emphasis, Link},
    types::InlineNode,
};

/// Tokenizes `s` into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// At every position the constructs are tried in order: link, citation,
/// bold, italic, strike. The first that matches wins and scanning resumes
/// after it.
///
/// # Returns
/// Nodes covering the entire input in order. Text between constructs is
/// emitted as `InlineNode::Text`; anything that fails to close is plain text.
pub fn tokenize(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_construct(&mut cur) {
            let full = node.full();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Collects citation ids from `s` in source order.
///
/// Citations nested in bold, italic or strike text are included, matching
/// how the renderer descends into emphasis. Repeats are kept.
pub fn citations_in(s: &str) -> Vec<&str> {
    let mut out = vec![];
    collect_citations(s, &mut out);
    out
}

fn collect_citations<'a>(s: &'a str, out: &mut Vec<&'a str>) {
    for node in tokenize(s) {
        match node {
            InlineNode::Citation { id, .. } => out.push(id.slice(s)),
            other => {
                if let Some(inner) = other.emphasis_inner() {
                    collect_citations(inner.slice(s), out);
                }
            }
        }
    }
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if let Some(node) = try_parse_link(cur) {
        return Some(node);
    }
    if let Some(node) = try_parse_citation(cur) {
        return Some(node);
    }
    Emphasis::ALL
        .into_iter()
        .find_map(|kind| try_parse_emphasis(cur, kind))
}

/// Attempts to parse `[text](url)` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();

    while let Some(b) = cur.peek() {
        if !Link::is_text_byte(b) {
            break;
        }
        cur.bump();
    }
    let text_end = cur.pos();

    if text_end == text_start || !cur.starts_with(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::URL_OPEN.len());
    let url_start = cur.pos();

    while cur.peek().is_some_and(Link::is_url_byte) {
        cur.bump();
    }
    let url_end = cur.pos();

    if url_end == url_start || cur.peek() != Some(Link::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        text: Span {
            start: text_start,
            end: text_end,
        },
        url: Span {
            start: url_start,
            end: url_end,
        },
    })
}

/// Attempts to parse `[^id]` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_citation(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Citation::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Citation::OPEN.len());
    let id_start = cur.pos();

    while cur.peek().is_some_and(Citation::is_id_byte) {
        cur.bump();
    }
    let id_end = cur.pos();

    if id_end == id_start || cur.peek() != Some(Citation::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    Some(InlineNode::Citation {
        full: Span {
            start,
            end: cur.pos(),
        },
        id: Span {
            start: id_start,
            end: id_end,
        },
    })
}

/// Attempts to parse an emphasis pair of `kind` at the current position.
///
/// The closer is the nearest delimiter that follows a non-whitespace
/// character, so `**a** b**` yields `a`. On failure, cursor position is
/// restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>, kind: Emphasis) -> Option<InlineNode> {
    let delim = kind.delimiter();
    if !cur.starts_with(delim) {
        return None;
    }

    let start = cur.pos();
    let inner_start = start + delim.len();
    let rest = cur.rest().get(delim.len()..)?;

    let first = rest.chars().next()?;
    if first.is_whitespace() || !kind.allows(first) {
        return None;
    }

    let mut prev = first;
    for (off, c) in rest.char_indices().skip(1) {
        if rest.as_bytes()[off..].starts_with(delim) && !prev.is_whitespace() {
            let inner = Span {
                start: inner_start,
                end: inner_start + off,
            };
            cur.bump_n(2 * delim.len() + off);
            let full = Span {
                start,
                end: cur.pos(),
            };
            return Some(kind.node(full, inner));
        }
        if !kind.allows(c) {
            return None;
        }
        prev = c;
    }
    None
}
