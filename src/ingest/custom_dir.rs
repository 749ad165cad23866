use std::fs;
use std::path::Path;

use crate::pipeline::error::PrepError;
use crate::pipeline::report::DropCounts;

use super::record::{CanonicalRecord, DatasetOrigin};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Each subdirectory of `root` is a class; the folder name is already the
/// grouped label, so nothing here consults the taxonomy tables.
pub fn ingest_custom(
    root: &Path,
    counts: &mut DropCounts,
) -> Result<Vec<CanonicalRecord>, PrepError> {
    if !root.is_dir() {
        return Err(PrepError::DirectoryNotFound(root.to_path_buf()));
    }

    // read_dir order is filesystem-dependent; sort every listing so output
    // order (and everything derived from it) is reproducible
    let mut class_dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => class_dirs.push(name),
            Err(_) => counts.unreadable_row += 1,
        }
    }
    class_dirs.sort_unstable();

    let mut records = Vec::new();
    for class_name in &class_dirs {
        let mut file_names = Vec::new();
        for entry in fs::read_dir(root.join(class_name))? {
            let entry = entry?;
            if !has_image_extension(&entry.path()) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => file_names.push(name),
                Err(_) => counts.unreadable_row += 1,
            }
        }
        file_names.sort_unstable();

        records.extend(file_names.into_iter().map(|file_name| {
            CanonicalRecord::new(file_name, class_name.clone(), DatasetOrigin::Custom)
        }));
    }

    Ok(records)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_name_is_the_label_and_bad_extensions_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let viral = dir.path().join("Viral");
        fs::create_dir(&viral).unwrap();
        fs::write(viral.join("a.jpg"), b"x").unwrap();
        fs::write(viral.join("b.JPEG"), b"x").unwrap();
        fs::write(viral.join("c.png"), b"x").unwrap();
        fs::write(viral.join("notes.txt"), b"x").unwrap();

        let mut counts = DropCounts::default();
        let records = ingest_custom(dir.path(), &mut counts).unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.canonical_label == "Viral"));
        assert!(records.iter().all(|r| r.origin == DatasetOrigin::Custom));
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn listings_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for class in ["Viral", "Acneiform"] {
            let class_dir = dir.path().join(class);
            fs::create_dir(&class_dir).unwrap();
            fs::write(class_dir.join("z.jpg"), b"x").unwrap();
            fs::write(class_dir.join("a.jpg"), b"x").unwrap();
        }

        let mut counts = DropCounts::default();
        let records = ingest_custom(dir.path(), &mut counts).unwrap();

        let seen: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.canonical_label.as_str(), r.source_id.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("Acneiform", "a.jpg"),
                ("Acneiform", "z.jpg"),
                ("Viral", "a.jpg"),
                ("Viral", "z.jpg"),
            ]
        );
    }

    #[test]
    fn loose_files_in_the_root_are_not_classes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stray.jpg"), b"x").unwrap();

        let mut counts = DropCounts::default();
        let records = ingest_custom(dir.path(), &mut counts).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut counts = DropCounts::default();
        assert!(matches!(
            ingest_custom(&dir.path().join("absent"), &mut counts),
            Err(PrepError::DirectoryNotFound(_))
        ));
    }
}
