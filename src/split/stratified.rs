use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::materialize::SampleSet;
use crate::merge::LabelIndex;
use crate::pipeline::error::PrepError;

#[derive(Debug, Clone)]
pub struct SplitDataset {
    pub train: SampleSet,
    pub val: SampleSet,
}

/// Seeded stratified split: each class's members are shuffled and split at
/// the configured ratio on their own, so both partitions keep the full
/// collection's class proportions. A class with fewer than 2 members is an
/// upstream bug and fails loudly.
pub fn stratified_split(
    samples: SampleSet,
    index: &LabelIndex,
    validation_ratio: f32,
    seed: u64,
) -> Result<SplitDataset, PrepError> {
    let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); index.len()];
    for (position, &label) in samples.labels.iter().enumerate() {
        match by_class.get_mut(label as usize) {
            Some(members) => members.push(position),
            None => return Err(PrepError::UnindexedLabel(label.to_string())),
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_positions = Vec::new();
    let mut val_positions = Vec::new();

    for (class, members) in by_class.iter_mut().enumerate() {
        if members.len() < 2 {
            return Err(PrepError::ClassTooSmall {
                label: index.label_of(class).unwrap_or("?").to_string(),
                count: members.len(),
            });
        }

        members.shuffle(&mut rng);
        let val_size = ((members.len() as f32 * validation_ratio).round() as usize)
            .clamp(1, members.len() - 1);
        val_positions.extend_from_slice(&members[..val_size]);
        train_positions.extend_from_slice(&members[val_size..]);
    }

    // Keep the persisted arrays from being ordered class-by-class
    train_positions.shuffle(&mut rng);
    val_positions.shuffle(&mut rng);

    Ok(SplitDataset {
        train: gather(&samples, &train_positions),
        val: gather(&samples, &val_positions),
    })
}

fn gather(samples: &SampleSet, positions: &[usize]) -> SampleSet {
    let mut out = SampleSet::with_capacity(samples.side, positions.len());
    for &position in positions {
        out.push(samples.sample(position), samples.labels[position]);
    }
    out
}
