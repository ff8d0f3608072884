use std::collections::{HashMap, HashSet};

use crate::{blocks::Block, inline::citations_in};

use super::reference::Reference;

/// Collects cited ids across `blocks` in first-occurrence order.
///
/// Every text-bearing field is scanned in document order (see
/// [`crate::blocks::BlockContent::text_fields`]). Repeat citations are
/// ignored. Ids with no reference are included here; display numbers come
/// from [`CitationIndex`], which numbers only the resolved ids.
pub fn index_citations(blocks: &[Block]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![];
    for block in blocks {
        for field in block.content.text_fields() {
            for id in citations_in(field) {
                if seen.insert(id) {
                    out.push(id.to_string());
                }
            }
        }
    }
    out
}

/// How a citation token should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationMark {
    /// Display number in the reference footer.
    Numbered(usize),
    /// Cited id with no matching reference.
    Unresolved,
}

/// Citation numbering for one article.
///
/// Only ids that exist in the reference set are numbered; the rest are kept
/// aside as unresolved so the renderer can flag them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationIndex {
    numbered: Vec<String>,
    numbers: HashMap<String, usize>,
    unresolved: Vec<String>,
}

impl CitationIndex {
    pub fn build(blocks: &[Block], references: &[Reference]) -> Self {
        let known: HashSet<&str> = references.iter().map(|r| r.id.as_str()).collect();
        let (numbered, unresolved): (Vec<String>, Vec<String>) = index_citations(blocks)
            .into_iter()
            .partition(|id| known.contains(id.as_str()));

        if !unresolved.is_empty() {
            log::warn!("Unresolved citations: {}", unresolved.join(", "));
        }

        let numbers = numbered
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i + 1))
            .collect();

        Self {
            numbered,
            numbers,
            unresolved,
        }
    }

    /// Numbered ids in display order.
    pub fn ids(&self) -> &[String] {
        &self.numbered
    }

    /// Cited ids that have no reference, in first-occurrence order.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn number_of(&self, id: &str) -> Option<usize> {
        self.numbers.get(id).copied()
    }

    pub fn mark(&self, id: &str) -> CitationMark {
        match self.number_of(id) {
            Some(n) => CitationMark::Numbered(n),
            None => CitationMark::Unresolved,
        }
    }

    pub fn len(&self) -> usize {
        self.numbered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbered.is_empty()
    }

    /// The footer entries: cited references paired with their numbers.
    ///
    /// Uncited references never appear. If the reference set repeats an id,
    /// the first definition is used.
    pub fn footer<'r>(&self, references: &'r [Reference]) -> Vec<(usize, &'r Reference)> {
        let mut by_id: HashMap<&str, &'r Reference> = HashMap::new();
        for reference in references {
            by_id.entry(reference.id.as_str()).or_insert(reference);
        }
        self.numbered
            .iter()
            .enumerate()
            .filter_map(|(i, id)| by_id.get(id.as_str()).map(|r| (i + 1, *r)))
            .collect()
    }
}
