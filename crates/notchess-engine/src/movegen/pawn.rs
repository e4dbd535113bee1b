//! Pawn movement, the one asymmetric piece.

use notchess_core::{Piece, Square};

use crate::Board;

/// Destinations of a pawn: one step forward onto an empty square, two from
/// its starting rank when both squares are empty, and one diagonal step
/// forward only onto an opponent piece.
pub fn pawn_targets(board: &Board, pawn: &Piece, out: &mut Vec<Square>) {
    let forward = pawn.color.forward();

    if let Some(one) = pawn.square.offset(0, forward) {
        if board.is_empty(one) {
            out.push(one);
            if pawn.square.rank() == pawn.color.pawn_rank() {
                if let Some(two) = one.offset(0, forward) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    out.extend(capture_squares(pawn).filter(|&target| {
        board
            .occupant(target)
            .is_some_and(|other| other.color != pawn.color)
    }));
}

/// The forward diagonals of a pawn, whatever is on them.
pub fn capture_squares(pawn: &Piece) -> impl Iterator<Item = Square> {
    let forward = pawn.color.forward();
    let from = pawn.square;
    [-1, 1]
        .into_iter()
        .filter_map(move |df| from.offset(df, forward))
}
