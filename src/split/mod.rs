pub mod persist;
pub mod stratified;

pub use persist::{load_label_map, load_manifest, load_split, persist, Manifest};
pub use stratified::{stratified_split, SplitDataset};
