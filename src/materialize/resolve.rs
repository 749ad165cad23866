use std::path::PathBuf;

use crate::ingest::custom_dir::IMAGE_EXTENSIONS;
use crate::ingest::{CanonicalRecord, DatasetOrigin};

/// Image roots for the three origins.
#[derive(Debug, Clone)]
pub struct ImageRoots {
    pub isic: PathBuf,
    pub sd198: PathBuf,
    pub custom: PathBuf,
}

/// Resolves a record to an existing file path, or `None` when no candidate
/// exists on disk (a soft failure the caller counts).
pub fn resolve(roots: &ImageRoots, record: &CanonicalRecord) -> Option<PathBuf> {
    match record.origin {
        DatasetOrigin::Isic => {
            let path = roots.isic.join(format!("{}.jpg", record.source_id));
            path.is_file().then_some(path)
        }
        DatasetOrigin::Sd198 => {
            // List paths are stored relative to the archive root; strip the
            // leading images/ so they resolve under the configured directory
            let rel = record
                .source_id
                .strip_prefix("images/")
                .unwrap_or(&record.source_id);
            let mut path = roots.sd198.join(rel);
            if path.extension().is_none() {
                path.set_extension("jpg");
            }
            path.is_file().then_some(path)
        }
        DatasetOrigin::Custom => {
            let base = roots
                .custom
                .join(&record.canonical_label)
                .join(&record.source_id);
            if base.is_file() {
                return Some(base);
            }
            // When several extension variants of one stem exist, the first
            // hit wins; only the candidate order is guaranteed
            IMAGE_EXTENSIONS
                .iter()
                .map(|ext| base.with_extension(ext))
                .find(|candidate| candidate.is_file())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn roots(dir: &Path) -> ImageRoots {
        ImageRoots {
            isic: dir.join("isic"),
            sd198: dir.join("sd198"),
            custom: dir.join("custom"),
        }
    }

    #[test]
    fn isic_ids_resolve_to_jpg_files() {
        let tmp = tempfile::tempdir().unwrap();
        let roots = roots(tmp.path());
        fs::create_dir_all(&roots.isic).unwrap();
        fs::write(roots.isic.join("ISIC_7.jpg"), b"x").unwrap();

        let record = CanonicalRecord::new("ISIC_7", "Benign_Nevus", DatasetOrigin::Isic);
        assert_eq!(
            resolve(&roots, &record),
            Some(roots.isic.join("ISIC_7.jpg"))
        );

        let missing = CanonicalRecord::new("ISIC_8", "Benign_Nevus", DatasetOrigin::Isic);
        assert_eq!(resolve(&roots, &missing), None);
    }

    #[test]
    fn sd198_paths_lose_their_prefix_and_gain_an_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let roots = roots(tmp.path());
        fs::create_dir_all(roots.sd198.join("Psoriasis")).unwrap();
        fs::write(roots.sd198.join("Psoriasis/a.jpg"), b"x").unwrap();

        for source_id in ["images/Psoriasis/a.jpg", "Psoriasis/a.jpg", "images/Psoriasis/a"] {
            let record = CanonicalRecord::new(source_id, "Psoriasis", DatasetOrigin::Sd198);
            assert_eq!(
                resolve(&roots, &record),
                Some(roots.sd198.join("Psoriasis/a.jpg")),
                "failed for {source_id}"
            );
        }
    }

    #[test]
    fn custom_records_try_extensions_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let roots = roots(tmp.path());
        fs::create_dir_all(roots.custom.join("Viral")).unwrap();
        fs::write(roots.custom.join("Viral/a.png"), b"x").unwrap();

        // Exact name on disk wins outright
        let exact = CanonicalRecord::new("a.png", "Viral", DatasetOrigin::Custom);
        assert_eq!(
            resolve(&roots, &exact),
            Some(roots.custom.join("Viral/a.png"))
        );

        // Stored as .jpg but only the .png variant exists
        let renamed = CanonicalRecord::new("a.jpg", "Viral", DatasetOrigin::Custom);
        assert_eq!(
            resolve(&roots, &renamed),
            Some(roots.custom.join("Viral/a.png"))
        );

        let missing = CanonicalRecord::new("b.jpg", "Viral", DatasetOrigin::Custom);
        assert_eq!(resolve(&roots, &missing), None);
    }
}
