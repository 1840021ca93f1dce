mod descriptor;
mod format;

pub use descriptor::{read_descriptor, write_descriptor};
pub use format::save_sheet_image;
