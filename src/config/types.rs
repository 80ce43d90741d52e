use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Startup values for the root screen and event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Text shown on the root screen at startup.
    #[serde(default = "default_text")]
    pub text: String,
    /// Event poll and redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_text() -> String {
    "Hello".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            text: default_text(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
