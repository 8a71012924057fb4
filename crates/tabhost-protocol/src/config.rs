//! RPC configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the hosted-context RPC client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Deadline for a single call, in milliseconds.
    pub call_timeout_ms: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 1000,
        }
    }
}

impl RpcConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_one_second() {
        assert_eq!(RpcConfig::default().call_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: RpcConfig = toml::from_str("").unwrap();
        assert_eq!(config.call_timeout_ms, 1000);
    }
}
