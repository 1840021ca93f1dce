mod frame;
mod loader;

pub use frame::Frame;
pub use loader::{load_frames, subfolders};
