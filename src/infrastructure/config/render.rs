//! Chart playback settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Play the animated charts. When false only the summary is printed.
    pub animate: bool,
    /// Pause after each frame.
    pub delay_ms: u64,
    /// How long a finished chart stays on screen waiting for a key.
    pub linger_ms: u64,
    /// Equal-width buckets in the profit histogram.
    pub histogram_bins: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animate: true,
            delay_ms: 100,
            linger_ms: 1500,
            histogram_bins: 15,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    #[must_use]
    pub const fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(ConfigError::InvalidValue {
                field: "histogram_bins",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
