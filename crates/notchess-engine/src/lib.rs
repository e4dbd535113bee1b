//! Rules engine for notchess, a chess variant with forced captures.
//!
//! This crate provides:
//! - [`Board`] and [`Roster`] - the two views of the pieces, kept in lockstep
//! - [`Position`] - board, rosters, side to move and the round counter
//! - [`RuleSet`] and [`NotChess`] - capture obligation, promotion and endings
//! - [`Game`] - move validation and application, with history
//! - [`RandomPlayer`] - a seedable automated player
//!
//! There is no check or checkmate. A side must capture whenever it can, and
//! the game ends when a side has no pieces, when the round counter runs out,
//! or when the side to move is left with nothing but blocked pawns.
//!
//! # Example
//!
//! ```
//! use notchess_engine::{Game, RandomPlayer};
//!
//! let mut game = Game::new();
//! let mut player = RandomPlayer::seeded(42);
//!
//! while !game.is_game_over() {
//!     let side = game.side_to_move();
//!     let Ok(mov) = game.propose_move(side, &mut player) else {
//!         break;
//!     };
//!     game.submit_move(&mov.to_string()).unwrap();
//! }
//! println!("{:?}", game.result());
//! ```

mod board;
mod game;
pub mod movegen;
mod player;
mod position;
mod roster;
pub mod rules;

pub use board::Board;
pub use game::{Game, MoveError, Outcome};
pub use movegen::{capture_moves, capturing_moves, destinations, is_legal_move, legal_moves};
pub use player::{CaptureSelection, RandomPlayer};
pub use position::{PlacementError, Position};
pub use roster::Roster;
pub use rules::{GameResult, NotChess, RuleSet, Termination};
