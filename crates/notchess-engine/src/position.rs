//! Board plus rosters plus turn bookkeeping.

use notchess_core::{Color, Piece, PieceKind, Square};
use thiserror::Error;

use crate::{Board, Roster};

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid placement: rank {rank} covers {width} files")]
    RankWidth { rank: u8, width: usize },

    #[error("invalid placement: unknown piece '{0}'")]
    InvalidPiece(char),

    #[error("invalid placement: {0} is already occupied")]
    Occupied(Square),
}

/// Back-rank order used to build the starting rosters: king, pawns A-H,
/// rooks, bishops, knights, queen.
const STARTING_ORDER: [(PieceKind, &[u8]); 6] = [
    (PieceKind::King, &[4]),
    (PieceKind::Pawn, &[0, 1, 2, 3, 4, 5, 6, 7]),
    (PieceKind::Rook, &[0, 7]),
    (PieceKind::Bishop, &[2, 5]),
    (PieceKind::Knight, &[1, 6]),
    (PieceKind::Queen, &[3]),
];

/// Complete board state between two moves.
///
/// Invariant: every piece in either roster sits on the board cell named by
/// its own square, and every occupied cell belongs to exactly one roster
/// entry. All mutation goes through methods that keep both sides in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    rosters: [Roster; 2],
    side_to_move: Color,
    moves_remaining: u32,
}

impl Position {
    /// Creates an empty position.
    pub fn empty(side_to_move: Color, moves_remaining: u32) -> Self {
        Position {
            board: Board::EMPTY,
            rosters: [Roster::new(), Roster::new()],
            side_to_move,
            moves_remaining,
        }
    }

    /// Creates the standard starting position with White to move.
    pub fn startpos(move_limit: u32) -> Self {
        let mut position = Position::empty(Color::White, move_limit);
        for color in Color::BOTH {
            let (back, pawns) = match color {
                Color::White => (0, 1),
                Color::Black => (7, 6),
            };
            for (kind, files) in STARTING_ORDER {
                let rank = if kind == PieceKind::Pawn { pawns } else { back };
                for &file in files {
                    if let Some(square) = Square::new(file, rank) {
                        let added = position.add_piece(kind, color, square);
                        debug_assert!(added.is_ok());
                    }
                }
            }
        }
        position
    }

    /// Parses a placement string such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// Ranks run from 8 down to 1, files from A to H; uppercase letters are
    /// White pieces, lowercase Black, digits count empty squares. Roster order
    /// follows that scan order.
    pub fn from_placement(
        placement: &str,
        side_to_move: Color,
        moves_remaining: u32,
    ) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut position = Position::empty(side_to_move, moves_remaining);
        for (row, text) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let (kind, color) = Piece::from_symbol(c).ok_or(PlacementError::InvalidPiece(c))?;
                let square = Square::new(file as u8, rank).ok_or(PlacementError::RankWidth {
                    rank: rank + 1,
                    width: file + 1,
                })?;
                position.add_piece(kind, color, square)?;
                file += 1;
            }
            if file != 8 {
                return Err(PlacementError::RankWidth {
                    rank: rank + 1,
                    width: file,
                });
            }
        }
        Ok(position)
    }

    /// Serializes the board as a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                let piece = Square::from_row_col(row, col).and_then(|sq| self.board.occupant(sq));
                match piece {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self, color: Color) -> &Roster {
        &self.rosters[color.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Black moves left before the move limit ends the game.
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    /// Adds a new piece to the end of its side's roster and to the board.
    ///
    /// Refuses an occupied square, leaving the position unchanged.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<Piece, PlacementError> {
        if !self.board.is_empty(square) {
            return Err(PlacementError::Occupied(square));
        }
        let piece = Piece::new(kind, color, square);
        self.board.place(square, piece);
        self.rosters[color.index()].push(piece);
        Ok(piece)
    }

    /// Removes the piece on `square` from both the board and its roster.
    pub(crate) fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board.clear(square)?;
        let removed = self.rosters[piece.color.index()].remove(square);
        debug_assert_eq!(removed, Some(piece));
        Some(piece)
    }

    /// Moves the piece on `from` to the empty square `to`, updating its roster
    /// record in place so its roster index is unchanged.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        debug_assert!(self.board.is_empty(to), "{} is occupied", to);
        let piece = self.board.clear(from)?;
        let record = self.rosters[piece.color.index()].find_mut(from)?;
        record.square = to;
        let moved = *record;
        self.board.place(to, moved);
        Some(moved)
    }

    /// Replaces the piece on `square` with a new piece of `kind`, appended at
    /// the end of the same roster.
    pub(crate) fn promote(&mut self, square: Square, kind: PieceKind) -> Option<Piece> {
        let old = self.remove_piece(square)?;
        self.add_piece(kind, old.color, square).ok()
    }

    /// Hands the move to the other side. The move counter drops once per
    /// round, when Black has just moved.
    pub(crate) fn pass_turn(&mut self) {
        if self.side_to_move == Color::Black {
            self.moves_remaining = self.moves_remaining.saturating_sub(1);
        }
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Checks the board/roster invariant.
    pub fn is_consistent(&self) -> bool {
        let roster_ok = Color::BOTH.iter().all(|&color| {
            self.roster(color)
                .iter()
                .all(|p| p.color == color && self.board.occupant(p.square) == Some(*p))
        });
        let total = self.rosters[0].len() + self.rosters[1].len();
        roster_ok && self.board.pieces().count() == total
    }
}
