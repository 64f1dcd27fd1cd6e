//! Totals and frequency tables over catalog attributes.
//!
//! Multi-valued attributes count once per element, so a book by two
//! authors adds one to each author. Ties always keep the order in which
//! labels were first encountered.

use crate::catalog::{Attribute, Catalog, Grade};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// A label with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Per-label counts in first-encountered order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<LabelCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `label`
    pub fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(LabelCount::new(label, 1));
            }
        }
    }

    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add(label.as_ref());
        }
    }

    /// Count for `label`, 0 when never seen
    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map_or(0, |&position| self.entries[position].count)
    }

    /// Entries in first-encountered order
    pub fn entries(&self) -> &[LabelCount] {
        &self.entries
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent labels, ties in first-encountered order
    pub fn most_common(&self, n: usize) -> Vec<LabelCount> {
        let mut ranked = self.entries.clone();
        // sort_by_key is stable
        ranked.sort_by_key(|entry| Reverse(entry.count));
        ranked.truncate(n);
        ranked
    }
}

/// Number of books in the catalog
pub fn total_books(catalog: &Catalog) -> usize {
    catalog.len()
}

/// Sum of `pages` over the books that state it
pub fn total_pages(catalog: &Catalog) -> u64 {
    catalog.iter().filter_map(|book| book.pages).sum()
}

/// Flatten a multi-valued attribute into per-label counts
///
/// **Public** - absent attributes simply contribute nothing
pub fn attribute_frequency(catalog: &Catalog, attribute: Attribute) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for book in catalog {
        table.extend(attribute.labels(book));
    }

    debug!(
        "Frequency of {}: {} distinct labels, {} occurrences",
        attribute.name(),
        table.len(),
        table.total()
    );

    table
}

/// The `n` most frequent authors
pub fn top_authors(catalog: &Catalog, n: usize) -> Vec<LabelCount> {
    attribute_frequency(catalog, Attribute::Author).most_common(n)
}

/// The `n` most frequent authors read more than once
///
/// Falls back to [`top_authors`] when nobody was read twice, so the list is
/// never empty while the catalog has an author.
pub fn top_repeat_authors(catalog: &Catalog, n: usize) -> Vec<LabelCount> {
    let ranked = top_authors(catalog, usize::MAX);

    let repeats: Vec<LabelCount> = ranked
        .iter()
        .filter(|entry| entry.count > 1)
        .take(n)
        .cloned()
        .collect();

    if repeats.is_empty() {
        debug!("No author read more than once, using unfiltered top authors");
        ranked.into_iter().take(n).collect()
    } else {
        repeats
    }
}

/// Distinct grades with their counts, best grade first
///
/// Valid grades are counted under their canonical spelling, so `a` and `A`
/// share one entry. Labels that do not parse as a [`Grade`] keep their raw
/// text and rank below every valid grade. Equal ranks keep insertion order.
pub fn grade_distribution(catalog: &Catalog) -> Vec<LabelCount> {
    let mut table = FrequencyTable::new();
    let mut parsed: HashMap<String, Option<Grade>> = HashMap::new();

    for raw in catalog.iter().filter_map(|book| book.grade.as_deref()) {
        let label = match raw.parse::<Grade>() {
            Ok(grade) => {
                let label = grade.to_string();
                parsed.entry(label.clone()).or_insert(Some(grade));
                label
            }
            Err(e) => {
                if !parsed.contains_key(raw) {
                    warn!("{}; ranking it last", e);
                    parsed.insert(raw.to_string(), None);
                }
                raw.to_string()
            }
        };
        table.add(&label);
    }

    let mut keyed: Vec<(Option<Grade>, LabelCount)> = table
        .entries()
        .iter()
        .map(|entry| (parsed.get(&entry.label).copied().flatten(), entry.clone()))
        .collect();

    // None sorts below Some, so malformed grades land at the end
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, entry)| entry).collect()
}
