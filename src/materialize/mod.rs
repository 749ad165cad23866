pub mod image;
pub mod resolve;

pub use resolve::{resolve, ImageRoots};

use crate::ingest::CanonicalRecord;
use crate::merge::LabelIndex;
use crate::pipeline::error::PrepError;
use crate::pipeline::report::PrepReport;

/// All materialized samples of a run: one flat pixel buffer plus one label
/// per sample. Pixels are HWC f32 in [0, 1].
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    pub pixels: Vec<f32>,
    pub labels: Vec<u32>,
    pub side: u32,
}

impl SampleSet {
    pub fn with_capacity(side: u32, samples: usize) -> Self {
        Self {
            pixels: Vec::with_capacity(samples * image::sample_len(side)),
            labels: Vec::with_capacity(samples),
            side,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn sample_len(&self) -> usize {
        image::sample_len(self.side)
    }

    pub fn sample(&self, index: usize) -> &[f32] {
        let len = self.sample_len();
        &self.pixels[index * len..(index + 1) * len]
    }

    pub fn push(&mut self, pixels: &[f32], label: u32) {
        debug_assert_eq!(pixels.len(), self.sample_len());
        self.pixels.extend_from_slice(pixels);
        self.labels.push(label);
    }
}

/// Loads every resolvable record into the sample set. Unresolvable paths
/// and undecodable files are counted per origin and skipped; an empty
/// result is fatal.
pub fn materialize(
    records: &[CanonicalRecord],
    index: &LabelIndex,
    roots: &ImageRoots,
    side: u32,
    report: &mut PrepReport,
) -> Result<SampleSet, PrepError> {
    let mut samples = SampleSet::with_capacity(side, records.len());

    for record in records {
        let label = index
            .index_of(&record.canonical_label)
            .ok_or_else(|| PrepError::UnindexedLabel(record.canonical_label.clone()))?
            as u32;

        let path = match resolve(roots, record) {
            Some(path) => path,
            None => {
                report.counts_mut(record.origin).missing_image += 1;
                continue;
            }
        };

        match image::load_unit_rgb(&path, side) {
            Ok(pixels) => samples.push(&pixels, label),
            Err(_) => report.counts_mut(record.origin).undecodable_image += 1,
        }
    }

    if samples.is_empty() {
        return Err(PrepError::EmptyDataset);
    }

    report.materialized = samples.len();
    Ok(samples)
}
