//! Drag-reorder configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for the drag-reorder gesture and its animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Debounce before a press arms into a drag, in milliseconds. A release
    /// inside this window is a plain click.
    pub arm_delay_ms: u64,
    /// Horizontal movement that arms a drag before the delay elapses, in px.
    pub arm_distance: f64,
    /// Animation step per display tick, in px.
    pub speed: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            arm_delay_ms: 200,
            arm_distance: 3.0,
            speed: 8.0,
        }
    }
}

impl DragConfig {
    pub fn arm_delay(&self) -> Duration {
        Duration::from_millis(self.arm_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DragConfig::default();
        assert_eq!(config.arm_delay(), Duration::from_millis(200));
        assert_eq!(config.arm_distance, 3.0);
        assert_eq!(config.speed, 8.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: DragConfig = toml::from_str("arm_delay_ms = 150").unwrap();
        assert_eq!(config.arm_delay_ms, 150);
        assert_eq!(config.speed, 8.0);
    }
}
