//! Loading `notchess.toml`.
//!
//! Every table and key is optional:
//!
//! ```toml
//! [game]
//! move_limit = 50
//!
//! [bot]
//! max_attempts = 500
//! seed = 7
//! capture_selection = "last-piece"
//!
//! [network]
//! port = 3074
//! bind_address = "0.0.0.0"
//! idle_timeout_secs = 120
//! ```

use std::path::{Path, PathBuf};

use notchess_engine::{CaptureSelection, NotChess, RandomPlayer};
use notchess_relay::RelayConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub bot: BotConfig,
    pub network: RelayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds (Black moves) before the game is scored on material.
    pub move_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            move_limit: NotChess::DEFAULT_MOVE_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub max_attempts: usize,
    /// Fixed seed for reproducible games. Unset seeds from the OS.
    pub seed: Option<u64>,
    pub capture_selection: CaptureStrategy,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            max_attempts: <RandomPlayer>::DEFAULT_MAX_ATTEMPTS,
            seed: None,
            capture_selection: CaptureStrategy::default(),
        }
    }
}

impl BotConfig {
    /// Builds the automated player. `seed` takes precedence over the
    /// configured one.
    pub fn player(&self, seed: Option<u64>) -> RandomPlayer {
        let player = match seed.or(self.seed) {
            Some(seed) => RandomPlayer::seeded(seed),
            None => RandomPlayer::from_entropy(),
        };
        player
            .with_max_attempts(self.max_attempts)
            .with_capture_selection(self.capture_selection.into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureStrategy {
    #[default]
    Uniform,
    LastPiece,
}

impl From<CaptureStrategy> for CaptureSelection {
    fn from(strategy: CaptureStrategy) -> Self {
        match strategy {
            CaptureStrategy::Uniform => CaptureSelection::Uniform,
            CaptureStrategy::LastPiece => CaptureSelection::LastPiece,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "notchess.toml";

    /// Reads the config at `path`, or `notchess.toml` in the working directory
    /// when no path is given. Only the default file may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(Self::DEFAULT_PATH), false),
        };
        if !required && !path.exists() {
            tracing::debug!("no {} found, using defaults", Self::DEFAULT_PATH);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file() {
        let config: Config = toml::from_str(
            r#"
[game]
move_limit = 20

[bot]
max_attempts = 50
seed = 9
capture_selection = "last-piece"

[network]
port = 4000
idle_timeout_secs = 60
"#,
        )
        .unwrap();

        assert_eq!(config.game.move_limit, 20);
        assert_eq!(config.bot.max_attempts, 50);
        assert_eq!(config.bot.seed, Some(9));
        assert_eq!(config.bot.capture_selection, CaptureStrategy::LastPiece);
        assert_eq!(config.network.port, 4000);
        assert_eq!(config.network.bind_address, "0.0.0.0");
        assert_eq!(config.network.idle_timeout_secs, Some(60));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.game.move_limit, 50);
        assert_eq!(config.bot.max_attempts, 500);
        assert_eq!(config.bot.seed, None);
        assert_eq!(config.bot.capture_selection, CaptureStrategy::Uniform);
        assert_eq!(config.network, RelayConfig::default());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(toml::from_str::<Config>("[bot]\ncapture_selection = \"first\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn player_uses_configured_settings() {
        let bot = BotConfig {
            max_attempts: 3,
            seed: Some(1),
            capture_selection: CaptureStrategy::LastPiece,
        };
        let player = bot.player(None);
        assert_eq!(player.max_attempts(), 3);
        assert_eq!(player.capture_selection(), CaptureSelection::LastPiece);
    }
}
