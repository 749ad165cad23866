use std::collections::BTreeMap;

use crate::ingest::CanonicalRecord;

/// Per-class record counts. Backed by a BTreeMap so iteration order is the
/// lexicographic label order everything downstream depends on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassCensus {
    counts: BTreeMap<String, usize>,
}

impl ClassCensus {
    pub fn from_records(records: &[CanonicalRecord]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.canonical_label.clone()).or_default() += 1;
        }
        Self { counts }
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}
