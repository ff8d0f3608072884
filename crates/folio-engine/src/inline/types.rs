use crate::span::Span;

/// A recognised inline node with byte spans into the tokenized string.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// `[text](url)`
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        text: Span,
        url: Span,
    },
    /// `[^id]`
    Citation { full: Span, id: Span },
    /// `**inner**`
    Bold { full: Span, inner: Span },
    /// `*inner*`
    Italic { full: Span, inner: Span },
    /// `~~inner~~`
    Strike { full: Span, inner: Span },
}

/// The tag of an [`InlineNode`] without its spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    PlainText,
    Link,
    Citation,
    Bold,
    Italic,
    Strike,
}

impl InlineNode {
    /// The full source span covered by this node, delimiters included.
    pub fn full(&self) -> Span {
        match *self {
            InlineNode::Text(sp) => sp,
            InlineNode::Link { full, .. }
            | InlineNode::Citation { full, .. }
            | InlineNode::Bold { full, .. }
            | InlineNode::Italic { full, .. }
            | InlineNode::Strike { full, .. } => full,
        }
    }

    pub fn kind(&self) -> InlineKind {
        match self {
            InlineNode::Text(_) => InlineKind::PlainText,
            InlineNode::Link { .. } => InlineKind::Link,
            InlineNode::Citation { .. } => InlineKind::Citation,
            InlineNode::Bold { .. } => InlineKind::Bold,
            InlineNode::Italic { .. } => InlineKind::Italic,
            InlineNode::Strike { .. } => InlineKind::Strike,
        }
    }

    /// The enclosed span of an emphasis node.
    pub fn emphasis_inner(&self) -> Option<Span> {
        match *self {
            InlineNode::Bold { inner, .. }
            | InlineNode::Italic { inner, .. }
            | InlineNode::Strike { inner, .. } => Some(inner),
            _ => None,
        }
    }
}
