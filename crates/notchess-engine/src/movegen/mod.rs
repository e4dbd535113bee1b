//! Piece geometry: which squares each piece may move to.
//!
//! Every kind is described by a [`Movement`]: sliding along rays, stepping
//! through a fixed offset table, or the pawn rules. [`destinations`] is the
//! single source of truth; [`is_legal_move`] and [`capturing_moves`] are both
//! derived from it so the two can never disagree.

mod pawn;
mod rays;

pub use pawn::capture_squares as pawn_capture_squares;
pub use rays::{
    slide, step, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};

use notchess_core::{Color, Move, Piece, PieceKind, Square};

use crate::{Board, Position};

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Any distance along each ray until blocked.
    Slide(&'static [(i8, i8)]),
    /// Exactly one of a fixed set of offsets, jumping over anything between.
    Step(&'static [(i8, i8)]),
    /// Forward pushes and diagonal captures.
    Pawn,
}

impl Movement {
    /// Returns the movement rule for a piece kind.
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Rook => Movement::Slide(&ROOK_DIRECTIONS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRECTIONS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRECTIONS),
            PieceKind::Knight => Movement::Step(&KNIGHT_OFFSETS),
            PieceKind::King => Movement::Step(&KING_OFFSETS),
        }
    }
}

/// All squares `piece` may move to on `board`.
///
/// Never includes the piece's own square or a square held by its own side.
pub fn destinations(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::new();
    match Movement::of(piece.kind) {
        Movement::Slide(directions) => slide(board, piece, directions, &mut out),
        Movement::Step(offsets) => step(board, piece, offsets, &mut out),
        Movement::Pawn => pawn::pawn_targets(board, piece, &mut out),
    }
    out
}

/// Returns true if `piece` may move to `target`.
pub fn is_legal_move(board: &Board, piece: &Piece, target: Square) -> bool {
    target != piece.square && destinations(board, piece).contains(&target)
}

/// Destinations of `piece` that hold an opponent piece.
pub fn capturing_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    destinations(board, piece)
        .into_iter()
        .filter(|&target| {
            board
                .occupant(target)
                .is_some_and(|other| other.color != piece.color)
        })
        .collect()
}

/// Every capture available to `color`, in roster order. When this is
/// non-empty the side must play one of these moves.
pub fn capture_moves(position: &Position, color: Color) -> Vec<Move> {
    let board = position.board();
    position
        .roster(color)
        .iter()
        .flat_map(|piece| {
            capturing_moves(board, piece)
                .into_iter()
                .map(move |to| Move::new(piece.kind, piece.square, to))
        })
        .collect()
}

/// Every move `color` could play, ignoring the forced-capture rule.
pub fn legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let board = position.board();
    position
        .roster(color)
        .iter()
        .flat_map(|piece| {
            destinations(board, piece)
                .into_iter()
                .map(move |to| Move::new(piece.kind, piece.square, to))
        })
        .collect()
}
