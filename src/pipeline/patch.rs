use std::collections::BTreeSet;
use std::path::Path;

use crate::split::persist::{load_label_map, load_manifest, load_split, persist};
use crate::split::stratified::SplitDataset;

use super::error::PrepError;

#[derive(Debug, Clone)]
pub struct ExcludeOutcome {
    pub dropped_train: usize,
    pub dropped_val: usize,
    pub classes: usize,
}

/// Removes one class from already-persisted artifacts: drops its samples
/// from both partitions, compacts the label index, and rewrites the four
/// arrays plus the label map in place. Returns `None` (and touches nothing)
/// when the class is not in the persisted label map.
pub fn exclude_class(dir: &Path, label: &str) -> Result<Option<ExcludeOutcome>, PrepError> {
    let index = load_label_map(dir)?;
    if index.index_of(label).is_none() {
        return Ok(None);
    }

    let manifest = load_manifest(dir)?;
    let SplitDataset { mut train, mut val } = load_split(dir, &manifest)?;

    let remove: BTreeSet<String> = [label.to_string()].into_iter().collect();
    let (compacted, remap) = index.compact(&remove)?;

    let sample_len = train.sample_len();
    let dropped_train = remap.remap_samples(&mut train.pixels, &mut train.labels, sample_len);
    let dropped_val = remap.remap_samples(&mut val.pixels, &mut val.labels, sample_len);

    let split = SplitDataset { train, val };
    persist(dir, &split, &compacted)?;

    println!(
        "Excluded \"{}\": dropped {} train / {} val samples, {} classes remain",
        label,
        dropped_train,
        dropped_val,
        compacted.len()
    );

    Ok(Some(ExcludeOutcome {
        dropped_train,
        dropped_val,
        classes: compacted.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::SampleSet;
    use crate::merge::LabelIndex;

    fn sample_set(side: u32, labels: &[u32]) -> SampleSet {
        let mut set = SampleSet::with_capacity(side, labels.len());
        let len = set.sample_len();
        for (i, &label) in labels.iter().enumerate() {
            set.push(&vec![i as f32; len], label);
        }
        set
    }

    fn persist_fixture(dir: &Path) {
        let index = LabelIndex::from_labels(
            ["Eczema", "Pigmentation_Disorder", "Viral"]
                .iter()
                .map(|l| l.to_string()),
        )
        .unwrap();
        let split = SplitDataset {
            train: sample_set(2, &[0, 1, 2, 1, 0]),
            val: sample_set(2, &[1, 2, 0]),
        };
        persist(dir, &split, &index).unwrap();
    }

    #[test]
    fn excluding_a_class_compacts_everything_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        persist_fixture(tmp.path());

        let outcome = exclude_class(tmp.path(), "Pigmentation_Disorder")
            .unwrap()
            .expect("class should be present");

        assert_eq!(outcome.dropped_train, 2);
        assert_eq!(outcome.dropped_val, 1);
        assert_eq!(outcome.classes, 2);

        let index = load_label_map(tmp.path()).unwrap();
        assert_eq!(index.index_of("Eczema"), Some(0));
        assert_eq!(index.index_of("Viral"), Some(1));
        assert_eq!(index.index_of("Pigmentation_Disorder"), None);

        let manifest = load_manifest(tmp.path()).unwrap();
        assert_eq!(manifest.train_samples, 3);
        assert_eq!(manifest.val_samples, 2);
        assert_eq!(manifest.classes, 2);

        let split = load_split(tmp.path(), &manifest).unwrap();
        // Old index 2 (Viral) is now 1; index 1 is gone entirely
        assert_eq!(split.train.labels, vec![0, 1, 0]);
        assert_eq!(split.val.labels, vec![1, 0]);
    }

    #[test]
    fn absent_class_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        persist_fixture(tmp.path());

        assert!(exclude_class(tmp.path(), "Fungal").unwrap().is_none());

        let manifest = load_manifest(tmp.path()).unwrap();
        assert_eq!(manifest.train_samples, 5);
        assert_eq!(manifest.classes, 3);
    }
}
