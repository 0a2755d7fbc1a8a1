pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

// Presentation only; nothing here changes the rules of play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_grid: bool,
    pub frame_rate_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid: false,
            frame_rate_ms: 16,
        }
    }
}

impl DisplayConfig {
    /// Redraw interval, never below one millisecond.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(1))
    }
}
