use std::path::Path;

use csv::ReaderBuilder;

use crate::pipeline::error::PrepError;
use crate::pipeline::report::DropCounts;
use crate::taxonomy;

use super::record::{CanonicalRecord, DatasetOrigin};

pub fn ingest_isic(
    csv_path: &Path,
    counts: &mut DropCounts,
) -> Result<Vec<CanonicalRecord>, PrepError> {
    if !csv_path.is_file() {
        return Err(PrepError::FileNotFound(csv_path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(csv_path)?;
    let headers = reader.headers()?.clone();

    // Newer metadata exports key images by isic_id, older ones by image_name
    let id_column = ["isic_id", "image_name"]
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| PrepError::MissingColumn {
            path: csv_path.to_path_buf(),
            column: "isic_id".into(),
        })?;
    let diagnosis_column =
        headers
            .iter()
            .position(|h| h == "diagnosis")
            .ok_or_else(|| PrepError::MissingColumn {
                path: csv_path.to_path_buf(),
                column: "diagnosis".into(),
            })?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(_) => {
                counts.unreadable_row += 1;
                continue;
            }
        };

        let image_id = row.get(id_column).map(str::trim).unwrap_or("");
        if image_id.is_empty() {
            counts.unreadable_row += 1;
            continue;
        }

        let diagnosis = row.get(diagnosis_column).map(str::trim).unwrap_or("");
        if diagnosis.is_empty() {
            counts.missing_diagnosis += 1;
            continue;
        }

        match taxonomy::isic::group(diagnosis) {
            Some(grouped) => {
                records.push(CanonicalRecord::new(image_id, grouped, DatasetOrigin::Isic))
            }
            None => counts.unmapped_label += 1,
        }
    }

    Ok(records)
}
