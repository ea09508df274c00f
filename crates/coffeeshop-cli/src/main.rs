//! Main entry point for the Coffee Shop configuration CLI

use clap::Parser;
use coffeeshop_cli::cli::Args;
use coffeeshop_common::logging;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    logging::init_logging(&args.verbosity, &args.default_log_filter())
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    let output = args.run()?;
    println!("{output}");
    Ok(())
}
