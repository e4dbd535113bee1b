//! Where a side's own moves come from.

use notchess_engine::{Game, MoveError, RandomPlayer};
use rand::rngs::StdRng;
use rand::Rng;

use crate::RelayError;

/// Supplies the moves of the local side during a relayed game.
#[allow(async_fn_in_trait)]
pub trait MoveSource {
    /// Produces a move string for the side to move in `game`.
    async fn next_move(&mut self, game: &Game) -> Result<String, RelayError>;

    /// Called when a move from [`next_move`](Self::next_move) was refused,
    /// locally or by the peer. Another call to `next_move` follows.
    fn rejected(&mut self, mov: &str, reason: &MoveError) {
        tracing::debug!(mov, %reason, "move refused");
    }
}

/// Moves chosen by a [`RandomPlayer`].
#[derive(Debug)]
pub struct AutomatedSource<R = StdRng> {
    player: RandomPlayer<R>,
}

impl<R: Rng> AutomatedSource<R> {
    pub fn new(player: RandomPlayer<R>) -> Self {
        AutomatedSource { player }
    }
}

impl<R: Rng> MoveSource for AutomatedSource<R> {
    async fn next_move(&mut self, game: &Game) -> Result<String, RelayError> {
        let mov = game.propose_move(game.side_to_move(), &mut self.player)?;
        Ok(mov.to_string())
    }

    fn rejected(&mut self, mov: &str, reason: &MoveError) {
        tracing::warn!(mov, %reason, "automated move refused");
    }
}
