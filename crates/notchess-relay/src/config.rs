//! Relay settings, usually the `[network]` table of `notchess.toml`.

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Port the host listens on and the joining side connects to.
    pub port: u16,
    /// Interface the host binds.
    pub bind_address: String,
    /// Give up on a silent peer after this many seconds. Unset waits forever.
    pub idle_timeout_secs: Option<u64>,
}

impl RelayConfig {
    pub const DEFAULT_PORT: u16 = 3074;

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            port: Self::DEFAULT_PORT,
            bind_address: "0.0.0.0".to_string(),
            idle_timeout_secs: None,
        }
    }
}
