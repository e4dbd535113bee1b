//! Game lifecycle and the forced-capture move protocol.
//!
//! The [`Game`] struct is the only writer of its [`Position`]. A move string
//! goes through, in order:
//! 1. the forced-capture check across the mover's whole roster
//! 2. decoding
//! 3. resolution against the first roster piece that can legally play it
//! 4. capture, move, promotion, turn hand-over
//! 5. the end-of-game checks of the [`RuleSet`]

use notchess_core::{Color, Move, NotationError, Piece};
use rand::Rng;
use thiserror::Error;

use crate::movegen::is_legal_move;
use crate::player::RandomPlayer;
use crate::rules::{GameResult, NotChess, RuleSet, Termination};
use crate::Position;

/// Why a submitted move was refused.
///
/// Every variant is recoverable: the game state is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move string is not five valid characters.
    #[error("invalid move format: {0}")]
    InvalidFormat(#[from] NotationError),
    /// Well-formed, but no piece of the side to move can play it.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// A capture is available and the move is not one of them.
    #[error("need to capture: {0} is not a capture")]
    NeedToCapture(String),
    /// The automated player could not come up with a move.
    #[error("no move found after {attempts} attempts")]
    NoMoveFound { attempts: usize },
    /// The game has ended; start a new one first.
    #[error("game has already ended")]
    GameOver,
}

impl MoveError {
    /// The line the relay sends back for a refused move, if this error is a
    /// refusal of a submitted move.
    pub const fn wire_text(&self) -> Option<&'static str> {
        match self {
            MoveError::InvalidFormat(_) | MoveError::InvalidMove(_) => Some("INVALID MOVE"),
            MoveError::NeedToCapture(_) => Some("NEED TO CAPTURE"),
            MoveError::NoMoveFound { .. } | MoveError::GameOver => None,
        }
    }
}

/// What an applied move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The move as played.
    pub mov: Move,
    /// The side that played it.
    pub mover: Color,
    /// The opponent piece taken, if any.
    pub captured: Option<Piece>,
    /// The piece a promoted pawn became, if any.
    pub promoted: Option<Piece>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
    pub termination: Option<Termination>,
    /// Counter value after the move.
    pub moves_remaining: u32,
}

/// A game in progress or finished.
///
/// Once a result is set every submission is refused with
/// [`MoveError::GameOver`] until [`Game::reset`] is called.
#[derive(Debug, Clone)]
pub struct Game<R = NotChess> {
    rules: R,
    position: Position,
    result: Option<GameResult>,
    termination: Option<Termination>,
    history: Vec<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard rules and starting position.
    pub fn new() -> Self {
        Self::with_rules(NotChess::default())
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game from the rule set's initial position.
    pub fn with_rules(rules: R) -> Self {
        let position = rules.initial_position();
        Self::from_position(rules, position)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// A position that is already decided yields a finished game.
    pub fn from_position(rules: R, position: Position) -> Self {
        let decided = rules.game_result(&position);
        if let Some((result, termination)) = decided {
            tracing::info!(%result, ?termination, "position is already decided");
        }
        Game {
            rules,
            position,
            result: decided.map(|(result, _)| result),
            termination: decided.map(|(_, termination)| termination),
            history: Vec::new(),
        }
    }

    /// Starts over from the initial position.
    pub fn reset(&mut self) {
        self.position = self.rules.initial_position();
        self.result = None;
        self.termination = None;
        self.history.clear();
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn moves_remaining(&self) -> u32 {
        self.position.moves_remaining()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// Captures the side to move must choose from.
    pub fn forced_captures(&self) -> Vec<Move> {
        self.rules.forced_captures(&self.position)
    }

    /// Checks a move string without applying it.
    pub fn validate(&self, text: &str) -> Result<Move, MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }
        self.resolve(text)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// # Example
    ///
    /// ```
    /// use notchess_engine::Game;
    /// use notchess_core::Color;
    ///
    /// let mut game = Game::new();
    /// let outcome = game.submit_move("PE2E4").unwrap();
    /// assert_eq!(outcome.mover, Color::White);
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// ```
    pub fn submit_move(&mut self, text: &str) -> Result<Outcome, MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }
        let mov = self.resolve(text).inspect_err(|err| {
            tracing::debug!(side = %self.position.side_to_move(), text, %err, "move rejected");
        })?;
        Ok(self.apply(mov))
    }

    /// Asks `player` for a move for `side`. The move is not applied.
    pub fn propose_move<G: Rng>(
        &self,
        side: Color,
        player: &mut RandomPlayer<G>,
    ) -> Result<Move, MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }
        player.propose(&self.position, side)
    }

    /// Runs the forced-capture check, decodes, and finds the piece that plays
    /// the move.
    fn resolve(&self, text: &str) -> Result<Move, MoveError> {
        let forced = self.rules.forced_captures(&self.position);
        if !forced.is_empty() && !forced.iter().any(|m| m.to_string() == text) {
            return Err(MoveError::NeedToCapture(text.to_string()));
        }

        let mov = Move::parse(text)?;

        let side = self.position.side_to_move();
        let board = self.position.board();
        self.position
            .roster(side)
            .iter()
            .find(|piece| {
                piece.kind == mov.kind
                    && piece.square == mov.from
                    && is_legal_move(board, piece, mov.to)
            })
            .map(|_| mov)
            .ok_or_else(|| MoveError::InvalidMove(text.to_string()))
    }

    fn apply(&mut self, mov: Move) -> Outcome {
        let mover = self.position.side_to_move();

        let captured = self.position.remove_piece(mov.to);
        debug_assert!(captured.map_or(true, |p| p.color != mover));

        let moved = self
            .position
            .move_piece(mov.from, mov.to)
            .expect("resolved move starts on one of the mover's pieces");

        let promoted = self
            .rules
            .promotion_kind(&moved)
            .and_then(|kind| self.position.promote(mov.to, kind));

        self.position.pass_turn();
        debug_assert!(self.position.is_consistent());

        tracing::debug!(
            side = %mover,
            mov = %mov,
            captured = captured.is_some(),
            promoted = promoted.is_some(),
            moves_remaining = self.position.moves_remaining(),
            "move applied"
        );
        tracing::trace!(placement = %self.position.to_placement(), "position");

        if let Some((result, termination)) = self.rules.game_result(&self.position) {
            tracing::info!(%result, ?termination, plies = self.history.len() + 1, "game over");
            self.result = Some(result);
            self.termination = Some(termination);
        }

        let outcome = Outcome {
            mov,
            mover,
            captured,
            promoted,
            result: self.result,
            termination: self.termination,
            moves_remaining: self.position.moves_remaining(),
        };
        self.history.push(outcome.clone());
        outcome
    }
}
