//! Application configuration: one TOML file with a section per concern.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tabhost_common::ConfigError;
use tabhost_protocol::RpcConfig;
use tabhost_wm::DragConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rpc: RpcConfig,
    pub drag: DragConfig,
}

/// Load config from a TOML file. Missing fields fall back to defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;
    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from an optional override path; any failure logs and falls
/// back to defaults.
pub fn load(path: Option<&str>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };
    load_from_path(Path::new(path)).unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        AppConfig::default()
    })
}
