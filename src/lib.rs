pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod output;
pub mod pack;
pub mod sheet;
pub mod unpack;

pub use cli::CliArgs;
pub use config::SheetConfig;
pub use error::SheetgenError;
pub use frame::Frame;
pub use pack::{PackOptions, pack_folder, pack_tree};
pub use sheet::{AnimationEntry, Descriptor, GridConfig, Playback, Sheet, SheetBuilder};
pub use unpack::unpack_sheet;
