use super::args::{ColorsCli, DumpCli};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use hexsweep_core::Config;
use std::path::Path;

pub fn run_dump(cli: DumpCli) -> Result<()> {
    logging::init(cli.log_level);

    let config = load_config(cli.config.as_deref())?;
    ensure_directory(&cli.root)?;

    let output_dir = cli.output_dir.as_deref().unwrap_or(&cli.root);
    handlers::dump::handle(&cli.root, output_dir, &config.dump_filter())
}

pub fn run_colors(cli: ColorsCli) -> Result<()> {
    logging::init(cli.log_level);

    let config = load_config(cli.config.as_deref())?;
    ensure_directory(&cli.root)?;

    let output_base = match cli.output_base {
        Some(base) => base,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    handlers::colors::handle(&cli.root, &output_base, config.colors_filter())
}

fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    Config::load(explicit_path).context("Failed to load configuration")
}

fn ensure_directory(root: &Path) -> Result<()> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }
    Ok(())
}
