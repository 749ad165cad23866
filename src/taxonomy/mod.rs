//! Static grouping tables mapping each source's native labels onto the
//! canonical class names used for training. Custom-folder labels never pass
//! through here: the folder name already is the grouped label.

pub mod isic;
pub mod sd198;
