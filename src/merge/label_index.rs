use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::pipeline::error::PrepError;

/// Bumped whenever the artifact layout or the taxonomy tables change in a
/// way that invalidates previously persisted indices.
pub const LABEL_MAP_VERSION: u32 = 1;

/// Dense zero-based bijection between canonical labels and integer indices.
/// Indices follow lexicographic label order, so the same label set always
/// produces the same assignment. Re-indexing never mutates an existing
/// instance; `compact` returns a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelIndex {
    labels: Vec<String>,
    indices: HashMap<String, usize>,
}

impl LabelIndex {
    pub fn from_labels<I>(labels: I) -> Result<Self, PrepError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut sorted: Vec<String> = labels.into_iter().collect();
        sorted.sort_unstable();

        let mut indices = HashMap::with_capacity(sorted.len());
        for (index, label) in sorted.iter().enumerate() {
            if indices.insert(label.clone(), index).is_some() {
                return Err(PrepError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        Ok(Self {
            labels: sorted,
            indices,
        })
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Builds a new dense index over the labels that are not in `remove`,
    /// plus the old-index to new-index remapping. Removing nothing returns
    /// a mapping equal to `self`.
    pub fn compact(&self, remove: &BTreeSet<String>) -> Result<(Self, IndexRemap), PrepError> {
        let survivors = self
            .labels
            .iter()
            .filter(|label| !remove.contains(*label))
            .cloned();
        let next = Self::from_labels(survivors)?;

        let old_to_new = self
            .labels
            .iter()
            .map(|label| next.index_of(label).map(|index| index as u32))
            .collect();

        Ok((next, IndexRemap { old_to_new }))
    }

    pub fn to_file(&self) -> LabelMapFile {
        LabelMapFile {
            version: LABEL_MAP_VERSION,
            label_to_index: self
                .labels
                .iter()
                .enumerate()
                .map(|(index, label)| (label.clone(), index as u32))
                .collect(),
            index_to_label: self
                .labels
                .iter()
                .enumerate()
                .map(|(index, label)| (index.to_string(), label.clone()))
                .collect(),
        }
    }

    pub fn from_file(file: &LabelMapFile) -> Result<Self, PrepError> {
        if file.version != LABEL_MAP_VERSION {
            return Err(PrepError::LabelMapVersion {
                found: file.version,
                expected: LABEL_MAP_VERSION,
            });
        }

        let index = Self::from_labels(file.label_to_index.keys().cloned())?;
        // The stored assignment must match what this build would derive,
        // otherwise the artifact came from a different taxonomy
        for (label, stored) in &file.label_to_index {
            let derived = index
                .index_of(label)
                .ok_or_else(|| PrepError::DuplicateLabel {
                    label: label.clone(),
                })?;
            if derived != *stored as usize {
                return Err(PrepError::IndexCollision {
                    label: label.clone(),
                    stored: *stored as usize,
                    derived,
                });
            }
        }
        Ok(index)
    }
}

/// Record-level mapping from an old index space to a compacted one. `None`
/// marks a removed class; its samples are dropped during remapping.
#[derive(Debug, Clone)]
pub struct IndexRemap {
    old_to_new: Vec<Option<u32>>,
}

impl IndexRemap {
    pub fn map(&self, old: u32) -> Option<u32> {
        self.old_to_new.get(old as usize).copied().flatten()
    }

    /// Rewrites a materialized label array and its paired flat pixel array
    /// in place: samples of removed classes are dropped, surviving labels
    /// move to the compacted index range. `sample_len` is the number of
    /// pixel elements per sample. Returns how many samples were dropped.
    pub fn remap_samples(
        &self,
        pixels: &mut Vec<f32>,
        labels: &mut Vec<u32>,
        sample_len: usize,
    ) -> usize {
        debug_assert_eq!(pixels.len(), labels.len() * sample_len);

        let mut write = 0;
        for read in 0..labels.len() {
            let new_label = match self.map(labels[read]) {
                Some(label) => label,
                None => continue,
            };
            labels[write] = new_label;
            if write != read {
                pixels.copy_within(read * sample_len..(read + 1) * sample_len, write * sample_len);
            }
            write += 1;
        }

        let dropped = labels.len() - write;
        labels.truncate(write);
        pixels.truncate(write * sample_len);
        dropped
    }
}

/// The durable side-artifact consumers load instead of re-deriving indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelMapFile {
    pub version: u32,
    pub label_to_index: BTreeMap<String, u32>,
    pub index_to_label: BTreeMap<String, String>,
}
