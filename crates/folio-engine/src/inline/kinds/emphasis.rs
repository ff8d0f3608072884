use crate::{inline::types::InlineNode, span::Span};

/// Delimiter-pair emphasis: `**bold**`, `*italic*` and `~~strike~~`.
///
/// The enclosed text must be non-empty, must not start or end with
/// whitespace and must stay on one line. Italic text additionally may not
/// contain `*`, which keeps a `**` pair from being read as two italics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Strike,
}

impl Emphasis {
    /// Precedence order used by the parser.
    pub const ALL: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Strike];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Emphasis::Bold => b"**",
            Emphasis::Italic => b"*",
            Emphasis::Strike => b"~~",
        }
    }

    /// Whether `c` may appear inside the emphasised text.
    pub fn allows(self, c: char) -> bool {
        match self {
            Emphasis::Italic => c != '*' && c != '\n',
            Emphasis::Bold | Emphasis::Strike => c != '\n',
        }
    }

    /// Builds the node for this emphasis kind.
    pub fn node(self, full: Span, inner: Span) -> InlineNode {
        match self {
            Emphasis::Bold => InlineNode::Bold { full, inner },
            Emphasis::Italic => InlineNode::Italic { full, inner },
            Emphasis::Strike => InlineNode::Strike { full, inner },
        }
    }
}
