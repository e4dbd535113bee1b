//! The notchess rules.

use super::{GameResult, RuleSet, Termination};
use crate::movegen::{capture_moves, pawn_capture_squares};
use crate::Position;
use notchess_core::{Color, Move, Piece, PieceKind};

/// Notchess: chess movement with mandatory captures.
///
/// - No check, checkmate, castling or en passant
/// - Captures are mandatory whenever one is available
/// - Pawns reaching the far rank become queens
/// - A side that loses every piece loses the game
/// - After `move_limit` rounds the side with more pieces wins
/// - A side left with only blocked pawns ties the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotChess {
    /// Rounds (counted on Black's moves) before the game is scored.
    pub move_limit: u32,
}

impl NotChess {
    pub const DEFAULT_MOVE_LIMIT: u32 = 50;

    pub const fn with_move_limit(move_limit: u32) -> Self {
        NotChess { move_limit }
    }
}

impl Default for NotChess {
    fn default() -> Self {
        NotChess::with_move_limit(Self::DEFAULT_MOVE_LIMIT)
    }
}

impl RuleSet for NotChess {
    fn initial_position(&self) -> Position {
        Position::startpos(self.move_limit)
    }

    fn forced_captures(&self, position: &Position) -> Vec<Move> {
        capture_moves(position, position.side_to_move())
    }

    fn promotion_kind(&self, piece: &Piece) -> Option<PieceKind> {
        let on_last_rank = piece.square.rank() == piece.color.promotion_rank();
        (piece.kind == PieceKind::Pawn && on_last_rank).then_some(PieceKind::Queen)
    }

    /// Any piece other than a pawn is assumed to have a move, even when it is
    /// boxed in. A side made only of pawns has a move if one of them can step
    /// forward or capture diagonally.
    fn has_any_move(&self, position: &Position, color: Color) -> bool {
        let board = position.board();
        position.roster(color).iter().any(|piece| {
            if piece.kind != PieceKind::Pawn {
                return true;
            }
            let can_push = piece
                .square
                .offset(0, color.forward())
                .is_some_and(|ahead| board.is_empty(ahead));
            let can_capture = pawn_capture_squares(piece).any(|target| {
                board
                    .occupant(target)
                    .is_some_and(|other| other.color != color)
            });
            can_push || can_capture
        })
    }

    fn game_result(&self, position: &Position) -> Option<(GameResult, Termination)> {
        let white = position.roster(Color::White).len();
        let black = position.roster(Color::Black).len();

        if white == 0 {
            return Some((GameResult::BlackWins, Termination::Elimination));
        }
        if black == 0 {
            return Some((GameResult::WhiteWins, Termination::Elimination));
        }

        if position.moves_remaining() == 0 {
            let result = match white.cmp(&black) {
                std::cmp::Ordering::Greater => GameResult::WhiteWins,
                std::cmp::Ordering::Less => GameResult::BlackWins,
                std::cmp::Ordering::Equal => GameResult::Tie,
            };
            return Some((result, Termination::MoveLimit));
        }

        if !self.has_any_move(position, position.side_to_move()) {
            return Some((GameResult::Tie, Termination::Stalemate));
        }

        None
    }
}
