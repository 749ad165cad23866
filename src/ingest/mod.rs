//! One ingestor per source, each converting its native metadata layout into
//! uniform canonical records. Missing metadata files abort the run; bad
//! individual rows are counted and skipped.

pub mod custom_dir;
pub mod isic;
pub mod record;
pub mod sd198;

pub use custom_dir::ingest_custom;
pub use isic::ingest_isic;
pub use record::{CanonicalRecord, DatasetOrigin};
pub use sd198::ingest_sd198;
