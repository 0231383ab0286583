use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Terminal viewer for randomly generated license-plate detections.
#[derive(Debug, Parser)]
#[command(name = "plate-finder", version, about)]
pub struct Cli {
    /// Base URL of the detection service (overrides PLATE_FINDER_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to the config file (default: <config dir>/plate-finder/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Combines flags with the environment-provided base URL.
    pub fn overrides(&self, env: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            env_base_url: env.env_base_url,
            log_file: self.log_file.clone(),
        }
    }
}
