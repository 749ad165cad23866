use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::materialize::image::CHANNELS;
use crate::materialize::SampleSet;
use crate::merge::{LabelIndex, LabelMapFile, LABEL_MAP_VERSION};
use crate::pipeline::error::PrepError;

use super::stratified::SplitDataset;

pub const TRAIN_TENSOR_FILE: &str = "x_train.bin";
pub const TRAIN_LABEL_FILE: &str = "y_train.bin";
pub const VAL_TENSOR_FILE: &str = "x_val.bin";
pub const VAL_LABEL_FILE: &str = "y_val.bin";
pub const LABEL_MAP_FILE: &str = "label_map.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Shapes and dtypes of the flat arrays, written next to them so a consumer
/// can check compatibility before reading a single byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub image_size: u32,
    pub channels: u32,
    pub classes: usize,
    pub train_samples: usize,
    pub val_samples: usize,
    pub tensor_dtype: String,
    pub label_dtype: String,
}

/// Writes the four flat arrays plus the versioned label map and manifest
/// into `dir`, creating it if needed.
pub fn persist(
    dir: &Path,
    split: &SplitDataset,
    index: &LabelIndex,
) -> Result<Manifest, PrepError> {
    fs::create_dir_all(dir)?;

    write_f32(&dir.join(TRAIN_TENSOR_FILE), &split.train.pixels)?;
    write_u32(&dir.join(TRAIN_LABEL_FILE), &split.train.labels)?;
    write_f32(&dir.join(VAL_TENSOR_FILE), &split.val.pixels)?;
    write_u32(&dir.join(VAL_LABEL_FILE), &split.val.labels)?;

    let label_map = index.to_file();
    fs::write(
        dir.join(LABEL_MAP_FILE),
        serde_json::to_vec_pretty(&label_map)?,
    )?;

    let manifest = Manifest {
        version: LABEL_MAP_VERSION,
        image_size: split.train.side,
        channels: CHANNELS as u32,
        classes: index.len(),
        train_samples: split.train.len(),
        val_samples: split.val.len(),
        tensor_dtype: "f32_le".to_string(),
        label_dtype: "u32_le".to_string(),
    };
    fs::write(
        dir.join(MANIFEST_FILE),
        serde_json::to_vec_pretty(&manifest)?,
    )?;

    Ok(manifest)
}

pub fn load_manifest(dir: &Path) -> Result<Manifest, PrepError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(PrepError::FileNotFound(path));
    }
    Ok(serde_json::from_slice(&fs::read(path)?)?)
}

pub fn load_label_map(dir: &Path) -> Result<LabelIndex, PrepError> {
    let path = dir.join(LABEL_MAP_FILE);
    if !path.is_file() {
        return Err(PrepError::FileNotFound(path));
    }
    let file: LabelMapFile = serde_json::from_slice(&fs::read(path)?)?;
    LabelIndex::from_file(&file)
}

pub fn load_split(dir: &Path, manifest: &Manifest) -> Result<SplitDataset, PrepError> {
    Ok(SplitDataset {
        train: SampleSet {
            pixels: read_f32(&dir.join(TRAIN_TENSOR_FILE))?,
            labels: read_u32(&dir.join(TRAIN_LABEL_FILE))?,
            side: manifest.image_size,
        },
        val: SampleSet {
            pixels: read_f32(&dir.join(VAL_TENSOR_FILE))?,
            labels: read_u32(&dir.join(VAL_LABEL_FILE))?,
            side: manifest.image_size,
        },
    })
}

fn write_f32(path: &Path, values: &[f32]) -> Result<(), PrepError> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn write_u32(path: &Path, values: &[u32]) -> Result<(), PrepError> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn read_f32(path: &Path) -> Result<Vec<f32>, PrepError> {
    let bytes = read_exact_multiple(path, 4)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn read_u32(path: &Path) -> Result<Vec<u32>, PrepError> {
    let bytes = read_exact_multiple(path, 4)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn read_exact_multiple(path: &Path, elem: usize) -> Result<Vec<u8>, PrepError> {
    if !path.is_file() {
        return Err(PrepError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    if bytes.len() % elem != 0 {
        return Err(PrepError::TruncatedArray {
            path: path.to_path_buf(),
            len: bytes.len(),
            elem,
        });
    }
    Ok(bytes)
}
