use crate::ingest::CanonicalRecord;
use crate::pipeline::error::PrepError;
use crate::pipeline::report::PrepReport;

use super::census::ClassCensus;
use super::label_index::LabelIndex;

#[derive(Debug, Clone)]
pub struct MergedDataset {
    pub records: Vec<CanonicalRecord>,
    pub index: LabelIndex,
    /// Census over the surviving records only.
    pub census: ClassCensus,
    pub dropped_classes: Vec<String>,
}

/// Concatenates the ingestor fragments, drops classes that fall below the
/// minimum count, and assigns dense indices to the survivors. Records of
/// dropped classes are tallied per origin in the report.
pub fn merge(
    fragments: Vec<Vec<CanonicalRecord>>,
    min_class_count: usize,
    report: &mut PrepReport,
) -> Result<MergedDataset, PrepError> {
    let mut records: Vec<CanonicalRecord> = fragments.into_iter().flatten().collect();
    report.ingested = records.len();

    let full_census = ClassCensus::from_records(&records);
    let dropped_classes: Vec<String> = full_census
        .iter()
        .filter(|(_, count)| *count < min_class_count)
        .map(|(label, _)| label.to_string())
        .collect();

    records.retain(|record| {
        if full_census.count(&record.canonical_label) >= min_class_count {
            true
        } else {
            report.counts_mut(record.origin).below_min_count += 1;
            false
        }
    });

    if records.is_empty() {
        return Err(PrepError::EmptyDataset);
    }

    let census = ClassCensus::from_records(&records);
    let index = LabelIndex::from_labels(census.iter().map(|(label, _)| label.to_string()))?;

    report.dropped_classes = dropped_classes.clone();
    report.classes = index.len();

    Ok(MergedDataset {
        records,
        index,
        census,
        dropped_classes,
    })
}
