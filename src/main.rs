use anyhow::Context;
use clap::Parser;
use plate_finder::cli::Cli;
use plate_finder::config::{Config, ConfigOverrides};
use plate_finder::logging::init_tracing;
use plate_finder::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;
    let config = config
        .with_overrides(&cli.overrides(ConfigOverrides::from_env()))
        .context("Invalid configuration")?;

    match init_tracing(&config.logging) {
        Ok(path) => tracing::info!(log_file = %path.display(), "Logging initialized"),
        Err(err) => eprintln!("Warning: logging disabled: {err}"),
    }
    tracing::info!(base_url = %config.api.base_url, "Starting plate-finder");

    runtime::run(config)
}
