use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/sbpe/config.toml`.
///
/// The stored API key is only a convenience; the orchestration entry points
/// take the credential as an explicit argument, nothing reads it from here
/// behind the caller's back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SbpeConfig {
    /// Base URL of the SkyBlock data API (profiles, stats, per-category endpoints).
    pub data_api_base: String,
    /// Base URL of the name-resolution service (username -> UUID).
    pub identity_api_base: String,
    /// Connect timeout per HTTP call, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per HTTP call, in seconds.
    pub timeout_secs: u64,
    /// Pause between consecutive API calls, in milliseconds.
    pub rate_limit_ms: u64,
    /// Optional stored API key; CLI flag takes precedence when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for SbpeConfig {
    fn default() -> Self {
        Self {
            data_api_base: "https://cupcake.shiiyu.moe/api".to_string(),
            identity_api_base: "https://api.mojang.com".to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            rate_limit_ms: 500,
            api_key: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sbpe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SbpeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SbpeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SbpeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
