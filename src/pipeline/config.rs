use std::path::PathBuf;

use serde::Deserialize;

use super::error::PrepError;

/// Every path and tunable the pipeline touches lives here; components take
/// what they need as parameters and never read module-level constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub isic_csv: PathBuf,
    pub isic_image_dir: PathBuf,
    pub sd198_class_file: PathBuf,
    pub sd198_label_file: PathBuf,
    pub sd198_image_list: PathBuf,
    pub sd198_image_dir: PathBuf,
    pub custom_dir: PathBuf,
    pub output_dir: PathBuf,
    pub image_size: u32,
    // Curation runs want anything from 2 to 30 here; always configured,
    // never a constant.
    pub min_class_count: usize,
    pub validation_ratio: f32,
    pub seed: u64,
}

impl PrepConfig {
    pub fn build(self) -> Result<Self, PrepError> {
        check_validation_ratio(self.validation_ratio)?;

        Ok(self)
    }
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            isic_csv: PathBuf::from("dataset/train.csv"),
            isic_image_dir: PathBuf::from("dataset/ISIC-images"),
            sd198_class_file: PathBuf::from("dataset/sd-198/classes.txt"),
            sd198_label_file: PathBuf::from("dataset/sd-198/image_class_labels.txt"),
            sd198_image_list: PathBuf::from("dataset/sd-198/images.txt"),
            sd198_image_dir: PathBuf::from("dataset/sd-198/images"),
            custom_dir: PathBuf::from("dataset/custom-augment"),
            output_dir: PathBuf::from("prepared"),
            image_size: 224,
            min_class_count: 2,
            validation_ratio: 0.3,
            seed: 42,
        }
    }
}

fn check_validation_ratio(ratio: f32) -> Result<(), PrepError> {
    if ratio <= 0.0 || ratio >= 1.0 {
        return Err(PrepError::InvalidValidationRatio(ratio));
    }
    Ok(())
}
