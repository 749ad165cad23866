use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    // Configuration errors, fatal for the whole run
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Missing column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid validation ratio: {0} (must be between 0 and 1, exclusive)")]
    InvalidValidationRatio(f32),

    #[error("No records left after ingestion and filtering")]
    EmptyDataset,

    // Invariant violations: an earlier stage should have made these impossible
    #[error("Class \"{label}\" has {count} sample(s); at least 2 are needed to stratify")]
    ClassTooSmall { label: String, count: usize },

    #[error("Duplicate label \"{label}\" while assigning indices")]
    DuplicateLabel { label: String },

    #[error("Index collision: label \"{label}\" stored as {stored}, derived as {derived}")]
    IndexCollision {
        label: String,
        stored: usize,
        derived: usize,
    },

    #[error("Label \"{0}\" is not present in the label index")]
    UnindexedLabel(String),

    #[error("Label map artifact is version {found}, this build reads version {expected}")]
    LabelMapVersion { found: u32, expected: u32 },

    #[error("Truncated array file: {path} ({len} bytes is not a multiple of {elem})")]
    TruncatedArray {
        path: PathBuf,
        len: usize,
        elem: usize,
    },
}
