use serde::{Deserialize, Serialize};
use std::time::Duration;

/// MorseCom configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorseComConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Serial link parameters
    #[serde(default)]
    pub link: LinkConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Port to use when none is given on the command line
    #[serde(default)]
    pub default_port: Option<String>,
}

/// Serial link parameters
///
/// The transmitter firmware expects 9600 baud and replies with
/// free-running text lines, so response collection is bounded by a
/// wall-clock window rather than a terminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Baud rate
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Blocking read timeout in milliseconds
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    /// Wait after opening the port, letting the device finish booting
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Pause between writing a command and the first poll
    #[serde(default = "default_command_delay_ms")]
    pub command_delay_ms: u64,
    /// Wall-clock window during which response lines are collected
    #[serde(default = "default_response_window_ms")]
    pub response_window_ms: u64,
    /// Sleep between polls while no bytes are available
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_baud_rate() -> u32 {
    9600
}

fn default_read_timeout_ms() -> u64 {
    1000
}

fn default_settle_delay_ms() -> u64 {
    2000
}

fn default_command_delay_ms() -> u64 {
    100
}

fn default_response_window_ms() -> u64 {
    1000
}

fn default_poll_interval_ms() -> u64 {
    50
}

impl Default for MorseComConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            link: LinkConfig::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_port: None,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: default_baud_rate(),
            read_timeout_ms: default_read_timeout_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            command_delay_ms: default_command_delay_ms(),
            response_window_ms: default_response_window_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl LinkConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn command_delay(&self) -> Duration {
        Duration::from_millis(self.command_delay_ms)
    }

    pub fn response_window(&self) -> Duration {
        Duration::from_millis(self.response_window_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
