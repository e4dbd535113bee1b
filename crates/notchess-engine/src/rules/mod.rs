//! Rule set abstraction.
//!
//! [`crate::Game`] drives the move protocol; everything that decides
//! promotion, forced captures and the end of the game is delegated to a
//! [`RuleSet`].

mod notchess;

pub use notchess::NotChess;

use notchess_core::{Color, Move, Piece, PieceKind};

use crate::Position;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Tie,
}

impl GameResult {
    /// The side that won, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Tie => None,
        }
    }

    /// The line announcing this result to a peer and to players.
    pub const fn wire_text(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "WHITE WINS",
            GameResult::BlackWins => "BLACK WINS",
            GameResult::Tie => "TIE GAME",
        }
    }

    /// Parses a line produced by [`GameResult::wire_text`].
    pub fn from_wire_text(text: &str) -> Option<Self> {
        match text {
            "WHITE WINS" => Some(GameResult::WhiteWins),
            "BLACK WINS" => Some(GameResult::BlackWins),
            "TIE GAME" => Some(GameResult::Tie),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_text())
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// One side lost its last piece.
    Elimination,
    /// The move counter ran out; the larger roster wins.
    MoveLimit,
    /// The side to move was found to have no move.
    Stalemate,
}

/// Trait for the game-specific rules.
///
/// # Example
///
/// ```
/// use notchess_engine::rules::{NotChess, RuleSet};
///
/// let position = NotChess::default().initial_position();
/// assert_eq!(position.moves_remaining(), 50);
/// ```
pub trait RuleSet {
    /// Returns the position a new game starts from.
    fn initial_position(&self) -> Position;

    /// Moves the side to move is obliged to choose from. Empty when no
    /// capture is available.
    fn forced_captures(&self, position: &Position) -> Vec<Move>;

    /// The kind a piece turns into after landing on `piece.square`, if any.
    fn promotion_kind(&self, piece: &Piece) -> Option<PieceKind>;

    /// Returns true if `color` has at least one move.
    fn has_any_move(&self, position: &Position, color: Color) -> bool;

    /// Returns the result if the game is over after the last applied move.
    fn game_result(&self, position: &Position) -> Option<(GameResult, Termination)>;
}
