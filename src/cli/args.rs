use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetgen")]
#[command(version, about = "Sprite sheet packer and unpacker", long_about = None)]
pub struct CliArgs {
    /// Folder of subfolders to pack, or the base path (no extension) with --unpack
    pub folder: PathBuf,

    /// Stack frames vertically, allowing variable sizes
    #[arg(long, conflicts_with = "unpack")]
    pub stack: bool,

    /// Pack a single folder of frames instead of one subfolder per animation
    #[arg(long, conflicts_with = "unpack")]
    pub single: bool,

    /// Unpack a sheet (.png + .json) back into individual frames
    #[arg(long)]
    pub unpack: bool,

    /// Animation name for single-folder descriptors [default: idle]
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Load defaults from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
