//! The 8x8 grid of cells.

use notchess_core::{Piece, Square};

/// Fixed 8x8 board. Each cell is empty or holds one piece.
///
/// The board has no rule knowledge; legality lives in [`crate::movegen`] and
/// [`crate::Game`]. Keeping the board in step with the rosters is the job of
/// [`crate::Position`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// An empty board.
    pub const EMPTY: Board = Board { cells: [None; 64] };

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.cells[square.index() as usize]
    }

    /// Returns true if no piece is on `square`.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Puts `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.index() as usize] = Some(piece);
    }

    /// Empties `square`, returning the piece that was on it.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index() as usize].take()
    }

    /// Iterates over all occupied cells, A1 to H8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.occupant(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notchess_core::{Color, PieceKind};

    #[test]
    fn place_and_clear() {
        let e4 = Square::parse("E4").unwrap();
        let pawn = Piece::new(PieceKind::Pawn, Color::White, e4);
        let mut board = Board::EMPTY;

        assert!(board.is_empty(e4));
        board.place(e4, pawn);
        assert_eq!(board.occupant(e4), Some(pawn));
        assert_eq!(board.pieces().count(), 1);

        assert_eq!(board.clear(e4), Some(pawn));
        assert_eq!(board.clear(e4), None);
        assert!(board.is_empty(e4));
    }
}
