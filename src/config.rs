//! Board Configuration
//!
//! Optional settings a host page can supply as `window.__moodboardConfig`.

use std::time::Duration;

use rolling_logger::LoggerConfig;
use serde::Deserialize;

/// Page-level settings (every field optional, camelCase on the JS side)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// How long a confirmation toast stays up
    pub toast_duration_ms: u32,
    /// Minimum log level: error, warn, info, debug or trace
    pub log_level: String,
    /// Log lines kept in memory
    pub log_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2200,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl BoardConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.toast_duration_ms))
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::from_level_name(&self.log_level, self.log_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.toast_duration(), Duration::from_millis(2200));
        assert_eq!(config.logger_config(), LoggerConfig::default());
    }

    #[test]
    fn test_logger_config() {
        let config = BoardConfig {
            log_level: "debug".to_string(),
            log_capacity: 20,
            ..BoardConfig::default()
        };
        let logger = config.logger_config();
        assert_eq!(logger.level, LoggerConfig::from_level_name("DEBUG", 1).level);
        assert_eq!(logger.capacity, 20);
    }
}
