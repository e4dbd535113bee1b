//! Playing notchess over a TCP connection.
//!
//! Two processes each keep their own [`Game`](notchess_engine::Game) and
//! exchange newline-terminated move strings in turn order:
//!
//! - The **host** listens, sends `Please Move` once a peer connects, and plays
//!   Black. It validates every move the peer sends and answers a refused one
//!   with `INVALID MOVE` or `NEED TO CAPTURE`.
//! - The **joining** side connects, plays White, and moves first.
//! - Whoever sees the game end sends `WHITE WINS`, `BLACK WINS` or `TIE GAME`.
//!
//! Where each side's own moves come from is up to its [`MoveSource`].

mod config;
pub mod host;
pub mod join;
mod protocol;
mod source;

use std::time::Duration;

use notchess_engine::{GameResult, MoveError};
use thiserror::Error;

pub use config::RelayConfig;
pub use host::Host;
pub use protocol::{Connection, Message};
pub use source::{AutomatedSource, MoveSource};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("peer disconnected")]
    Disconnected,
    #[error("peer sent nothing for {0:?}")]
    Timeout(Duration),
    #[error("game state diverged from peer: local result {local:?}, peer result {remote:?}")]
    Desync {
        local: Option<GameResult>,
        remote: Option<GameResult>,
    },
    #[error(transparent)]
    Engine(#[from] MoveError),
}
