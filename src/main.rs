//! Asset Picker - selection and dialog engine driven over NDJSON
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use picker_app::config;

/// Asset Picker - browse, pick and confirm over stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "asset-picker")]
#[command(about = "Headless asset selection and dialog engine", long_about = None)]
struct Args {
    /// JSON file holding the initial ordered item list
    #[arg(long, value_name = "FILE")]
    items: Option<PathBuf>,

    /// Directory containing `.picker/config.toml`
    #[arg(long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Write a default `.picker/config.toml` and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let workdir = args
        .workdir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = config::init_config_dir(&workdir)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    if let Err(e) = picker_core::logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let items = match &args.items {
        Some(path) => asset_picker::load_items(path)
            .wrap_err_with(|| format!("Failed to load items from {}", path.display()))?,
        None => Vec::new(),
    };

    asset_picker::run_headless(&workdir, items).await?;
    Ok(())
}
