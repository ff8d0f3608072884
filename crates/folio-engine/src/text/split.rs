use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A list line: optional indentation, one of `-`, `*`, `•`, then whitespace.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s").expect("list marker pattern is valid"));

/// One run of a text block's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TextRun {
    /// Consecutive non-list lines, blank lines kept as empty strings.
    Paragraph { lines: Vec<String> },
    /// Consecutive list lines with their markers stripped.
    List { items: Vec<String> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Close an open list at a blank line instead of absorbing it.
    pub blank_line_ends_list: bool,
}

#[derive(Debug)]
enum RunState {
    None,
    Paragraph(Vec<String>),
    List(Vec<String>),
}

/// Line-by-line state machine that groups lines into [`TextRun`]s.
pub struct RunBuilder {
    options: SplitOptions,
    run: RunState,
    out: Vec<TextRun>,
}

impl RunBuilder {
    pub fn new(options: SplitOptions) -> Self {
        Self {
            options,
            run: RunState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            self.push_blank();
            return;
        }

        if let Some(marker) = LIST_MARKER.find(line) {
            let item = line[marker.end()..].to_string();
            match &mut self.run {
                RunState::List(items) => items.push(item),
                _ => {
                    self.flush();
                    self.run = RunState::List(vec![item]);
                }
            }
            return;
        }

        match &mut self.run {
            RunState::Paragraph(lines) => lines.push(line.to_string()),
            _ => {
                self.flush();
                self.run = RunState::Paragraph(vec![line.to_string()]);
            }
        }
    }

    pub fn finish(mut self) -> Vec<TextRun> {
        self.flush();
        self.out
    }

    /// Blank lines stay with the open run and never flush it on their own.
    fn push_blank(&mut self) {
        match &mut self.run {
            RunState::List(_) if self.options.blank_line_ends_list => self.flush(),
            RunState::List(_) => {}
            RunState::Paragraph(lines) => lines.push(String::new()),
            RunState::None => self.run = RunState::Paragraph(vec![String::new()]),
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.run, RunState::None) {
            RunState::None => {}
            RunState::Paragraph(lines) => {
                // a paragraph of nothing but blank lines carries no content
                if lines.iter().any(|l| !l.trim().is_empty()) {
                    self.out.push(TextRun::Paragraph { lines });
                }
            }
            RunState::List(items) => self.out.push(TextRun::List { items }),
        }
    }
}

/// Splits a text body into alternating paragraph and list runs.
///
/// Output order mirrors input line order.
pub fn split_paragraphs_and_lists(text: &str, options: SplitOptions) -> Vec<TextRun> {
    let mut builder = RunBuilder::new(options);
    for line in text.split('\n') {
        builder.push(line);
    }
    builder.finish()
}
