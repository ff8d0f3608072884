/// A byte range `[start, end)` into a source string.
///
/// Inline nodes store spans rather than copied text, so slicing the source
/// with every node's full span, in order, reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    ///
    /// Spans produced by the tokenizer always sit on char boundaries because
    /// every delimiter is ASCII.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        // inverted spans saturate rather than underflow
        assert!(Span::new(5, 1).is_empty());
    }

    #[test]
    fn slice_returns_covered_text() {
        let src = "hello world";
        assert_eq!(Span::new(6, 11).slice(src), "world");
        assert_eq!(Span::new(0, 0).slice(src), "");
    }
}
