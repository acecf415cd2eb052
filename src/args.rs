//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, ConfigOverrides};

#[derive(Debug, Parser)]
#[command(name = "catfact", version, about = "Your daily cat fact, in the terminal")]
pub struct Cli {
    /// Path to config file (default: ~/.config/catfact/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the fact service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Answer requests with synthetic sentences instead of calling the service
    #[arg(long)]
    pub mock: bool,

    /// Fetch a single fact, print it to stdout, and exit
    #[arg(long)]
    pub once: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            mock: self.mock,
            log_file: self.log_file.clone(),
        }
    }

    /// Load the config file, then layer flags and the build-mode variable on top.
    pub fn load_config(&self, env_mode: Option<&str>) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.with_overrides(self.overrides(), env_mode)
    }
}
