use anyhow::Result;
use clap::Parser;
use log::info;

use sheetgen::cli::CliArgs;
use sheetgen::config::SheetConfig;
use sheetgen::pack::{PackOptions, pack_folder, pack_tree};
use sheetgen::unpack::unpack_sheet;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because the failure may predate
        // logger initialization (e.g. a bad config file)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified; CLI arguments take precedence
    let config = match &cli.config {
        Some(path) => SheetConfig::load(path)?,
        None => SheetConfig::default(),
    };
    let animation_name = cli.name.clone().unwrap_or(config.animation_name);

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("sheetgen v{}", env!("CARGO_PKG_VERSION"));

    if cli.unpack {
        unpack_sheet(&cli.folder)
    } else if cli.single {
        // Stack mode on a single folder tolerates variable sizes, which
        // also means no descriptor gets written
        let options = PackOptions {
            stack: cli.stack,
            allow_variable_sizes: cli.stack,
            animation_name,
            playback: config.playback,
        };
        pack_folder(&cli.folder, &options)?;
        Ok(())
    } else {
        pack_tree(&cli.folder, config.playback)
    }
}
