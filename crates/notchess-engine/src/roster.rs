//! One side's live pieces.

use notchess_core::{Piece, PieceKind, Square};

/// The ordered pieces of one side.
///
/// Order matters: move resolution takes the first matching piece, and the
/// automated player samples by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pieces: Vec<Piece>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a piece at the end of the roster.
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// Removes the piece standing on `square`, keeping the order of the rest.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.square == square)?;
        Some(self.pieces.remove(index))
    }

    /// Returns the piece standing on `square`.
    pub fn find(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    pub(crate) fn find_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.square == square)
    }

    /// Returns the piece at roster position `index`.
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Number of pieces of the given kind.
    pub fn count(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|p| p.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}
