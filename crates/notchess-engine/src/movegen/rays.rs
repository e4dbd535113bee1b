//! Direction tables and the two shared movement primitives.
//!
//! Offsets are `(file delta, rank delta)` pairs.

use notchess_core::{Piece, Square};

use crate::Board;

/// The four orthogonal rays.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal rays.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal and diagonal rays.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One square in any direction.
pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// The eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Walks each ray from the piece until the edge or the first occupied square.
/// The blocking square is included only when it holds an opponent piece.
pub fn slide(board: &Board, piece: &Piece, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(df, dr) {
            match board.occupant(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Tries each fixed offset once, ignoring anything in between. Squares off the
/// board or held by a friendly piece are skipped.
pub fn step(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in offsets {
        let Some(target) = piece.square.offset(df, dr) else {
            continue;
        };
        match board.occupant(target) {
            Some(other) if other.color == piece.color => {}
            _ => out.push(target),
        }
    }
}
