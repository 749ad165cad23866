pub mod census;
pub mod label_index;
pub mod merger;

pub use census::ClassCensus;
pub use label_index::{IndexRemap, LabelIndex, LabelMapFile, LABEL_MAP_VERSION};
pub use merger::{merge, MergedDataset};
