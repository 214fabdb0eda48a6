//! CLI for the sbpe SkyBlock profile extractor.

mod run;

use anyhow::Result;
use clap::Parser;
use sbpe_core::config;
use std::path::PathBuf;

/// Extract Hypixel SkyBlock profile data to local JSON files.
#[derive(Debug, Parser)]
#[command(name = "sbpe")]
#[command(version)]
#[command(about = "Extract Hypixel SkyBlock profile data to local JSON files", long_about = None)]
pub struct Cli {
    /// Minecraft username to extract data for (prompted when omitted).
    pub username: Option<String>,

    /// Specific profile name to extract (case-insensitive).
    #[arg(short = 'p', long = "profile", value_name = "NAME")]
    pub profile: Option<String>,

    /// Never prompt; missing inputs fail instead of asking.
    #[arg(short = 'u', long = "unattended")]
    pub unattended: bool,

    /// API key for the SkyBlock data API (overrides the config file).
    #[arg(long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Directory under which the timestamped output directory is created
    /// (defaults to the current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    run::run(cli, cfg)
}

#[cfg(test)]
mod tests;
