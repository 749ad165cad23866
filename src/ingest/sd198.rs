use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::pipeline::error::PrepError;
use crate::pipeline::report::DropCounts;
use crate::taxonomy;

use super::record::{CanonicalRecord, DatasetOrigin};

/// Joins the three SD-198 side files on image id and resolves numeric class
/// ids to class names. Records carry the image's relative path as their
/// source id so materialization can find the file again.
pub fn ingest_sd198(
    class_file: &Path,
    label_file: &Path,
    image_list: &Path,
    counts: &mut DropCounts,
) -> Result<Vec<CanonicalRecord>, PrepError> {
    let classes = read_class_list(class_file, counts)?;
    let image_paths = read_image_list(image_list, counts)?;

    if !label_file.is_file() {
        return Err(PrepError::FileNotFound(label_file.to_path_buf()));
    }

    let mut records = Vec::new();
    for line in fs::read_to_string(label_file)?.lines() {
        let mut parts = line.split_whitespace();
        let (image_id, class_id) = match (parts.next(), parts.next()) {
            (Some(id), Some(class)) => (id, class),
            _ => {
                if !line.trim().is_empty() {
                    counts.unreadable_row += 1;
                }
                continue;
            }
        };

        // Class ids are 1-based; the class list is zero-based line order
        let class_name = match class_id
            .parse::<usize>()
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| classes.get(index))
        {
            Some(name) => name,
            None => {
                counts.unreadable_row += 1;
                continue;
            }
        };

        let rel_path = match image_paths.get(image_id) {
            Some(path) => path,
            None => {
                counts.unreadable_row += 1;
                continue;
            }
        };

        match taxonomy::sd198::group(class_name) {
            Some(grouped) => records.push(CanonicalRecord::new(
                rel_path.clone(),
                grouped,
                DatasetOrigin::Sd198,
            )),
            None => counts.unmapped_label += 1,
        }
    }

    Ok(records)
}

// One "index name" pair per line; the name is everything after the first
// space, the position in the file defines the (1-based) id.
fn read_class_list(path: &Path, counts: &mut DropCounts) -> Result<Vec<String>, PrepError> {
    if !path.is_file() {
        return Err(PrepError::FileNotFound(path.to_path_buf()));
    }

    let mut classes = Vec::new();
    for line in fs::read_to_string(path)?.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(' ') {
            Some((_, name)) => classes.push(name.to_string()),
            None => counts.unreadable_row += 1,
        }
    }
    Ok(classes)
}

fn read_image_list(
    path: &Path,
    counts: &mut DropCounts,
) -> Result<HashMap<String, String>, PrepError> {
    if !path.is_file() {
        return Err(PrepError::FileNotFound(path.to_path_buf()));
    }

    let mut paths = HashMap::new();
    for line in fs::read_to_string(path)?.lines() {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(image_id), Some(rel_path)) => {
                paths.insert(image_id.to_string(), rel_path.to_string());
            }
            _ => {
                if !line.trim().is_empty() {
                    counts.unreadable_row += 1;
                }
            }
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        _dir: tempfile::TempDir,
        class_file: std::path::PathBuf,
        label_file: std::path::PathBuf,
        image_list: std::path::PathBuf,
    }

    fn fixture(classes: &str, labels: &str, images: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let class_file = dir.path().join("classes.txt");
        let label_file = dir.path().join("image_class_labels.txt");
        let image_list = dir.path().join("images.txt");
        fs::write(&class_file, classes).unwrap();
        fs::write(&label_file, labels).unwrap();
        fs::write(&image_list, images).unwrap();
        Fixture {
            _dir: dir,
            class_file,
            label_file,
            image_list,
        }
    }

    #[test]
    fn class_id_one_resolves_to_first_line() {
        let fx = fixture(
            "1 Psoriasis\n2 Tinea_Pedis\n",
            "7 1\n8 2\n",
            "7 images/Psoriasis/a.jpg\n8 images/Tinea_Pedis/b.jpg\n",
        );

        let mut counts = DropCounts::default();
        let records =
            ingest_sd198(&fx.class_file, &fx.label_file, &fx.image_list, &mut counts).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].canonical_label, "Psoriasis");
        assert_eq!(records[0].source_id, "images/Psoriasis/a.jpg");
        assert_eq!(records[1].canonical_label, "Fungal");
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn out_of_range_class_id_is_skipped() {
        let fx = fixture("1 Psoriasis\n", "7 0\n8 2\n9 1\n", "7 a\n8 b\n9 c\n");

        let mut counts = DropCounts::default();
        let records =
            ingest_sd198(&fx.class_file, &fx.label_file, &fx.image_list, &mut counts).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_id, "c");
        assert_eq!(counts.unreadable_row, 2);
    }

    #[test]
    fn labels_without_image_path_are_skipped() {
        let fx = fixture("1 Psoriasis\n", "7 1\n8 1\n", "7 images/Psoriasis/a.jpg\n");

        let mut counts = DropCounts::default();
        let records =
            ingest_sd198(&fx.class_file, &fx.label_file, &fx.image_list, &mut counts).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(counts.unreadable_row, 1);
    }

    #[test]
    fn ungrouped_class_counts_as_unmapped() {
        let fx = fixture("1 Rarity\n", "7 1\n", "7 images/Rarity/a.jpg\n");

        let mut counts = DropCounts::default();
        let records =
            ingest_sd198(&fx.class_file, &fx.label_file, &fx.image_list, &mut counts).unwrap();

        assert!(records.is_empty());
        assert_eq!(counts.unmapped_label, 1);
    }

    #[test]
    fn missing_side_file_is_fatal() {
        let fx = fixture("1 Psoriasis\n", "7 1\n", "7 a\n");
        let mut counts = DropCounts::default();
        assert!(matches!(
            ingest_sd198(
                &fx.class_file.with_file_name("absent.txt"),
                &fx.label_file,
                &fx.image_list,
                &mut counts,
            ),
            Err(PrepError::FileNotFound(_))
        ));
    }
}
