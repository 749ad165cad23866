#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetOrigin {
    Isic,
    Sd198,
    Custom,
}

impl DatasetOrigin {
    pub const ALL: [DatasetOrigin; 3] =
        [DatasetOrigin::Isic, DatasetOrigin::Sd198, DatasetOrigin::Custom];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetOrigin::Isic => "ISIC",
            DatasetOrigin::Sd198 => "SD-198",
            DatasetOrigin::Custom => "custom",
        }
    }
}

/// One image after taxonomy mapping. `source_id` is whatever the origin
/// needs to find the file again: the ISIC image id, the SD-198 relative
/// path, or the file name inside a custom label folder.
#[derive(Debug, Clone)]
pub struct CanonicalRecord {
    pub source_id: String,
    pub canonical_label: String,
    pub origin: DatasetOrigin,
}

impl CanonicalRecord {
    pub fn new(
        source_id: impl Into<String>,
        canonical_label: impl Into<String>,
        origin: DatasetOrigin,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            canonical_label: canonical_label.into(),
            origin,
        }
    }
}
