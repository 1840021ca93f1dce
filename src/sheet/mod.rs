mod builder;
mod layout;
mod types;

pub use builder::SheetBuilder;
pub use layout::{GridLayout, MAX_COLUMNS};
pub use types::{AnimationEntry, Descriptor, GridConfig, Playback, Sheet};
