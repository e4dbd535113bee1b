//! Move representation and the five-character move notation.
//!
//! A move is written `<Kind><FromFile><FromRank><ToFile><ToRank>`, for example
//! `PE2E4` (pawn E2 to E4) or `NB1C3` (knight B1 to C3). Letters are uppercase.

use crate::{PieceKind, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when decoding a move string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move must be 5 characters, got {0}")]
    WrongLength(usize),

    #[error("invalid piece letter '{0}'")]
    InvalidKind(char),

    #[error("invalid file '{0}'")]
    InvalidFile(char),

    #[error("invalid rank '{0}'")]
    InvalidRank(char),
}

/// A move of one piece from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(kind: PieceKind, from: Square, to: Square) -> Self {
        Move { kind, from, to }
    }

    /// Decodes a move string.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let chars: Vec<char> = s.chars().collect();
        let &[kind, from_file, from_rank, to_file, to_rank] = chars.as_slice() else {
            return Err(NotationError::WrongLength(chars.len()));
        };

        let kind = PieceKind::from_letter(kind).ok_or(NotationError::InvalidKind(kind))?;
        let from = parse_square(from_file, from_rank)?;
        let to = parse_square(to_file, to_rank)?;
        Ok(Move { kind, from, to })
    }

    /// Encodes the move, the exact inverse of [`Move::parse`].
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

fn parse_square(file: char, rank: char) -> Result<Square, NotationError> {
    if !matches!(file, 'A'..='H') {
        return Err(NotationError::InvalidFile(file));
    }
    Square::from_chars(file, rank).ok_or(NotationError::InvalidRank(rank))
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.letter(), self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn parse_pawn_push() {
        let m = Move::parse("PE2E4").unwrap();
        assert_eq!(m.kind, PieceKind::Pawn);
        assert_eq!(m.from, sq("E2"));
        assert_eq!(m.to, sq("E4"));
    }

    #[test]
    fn encode() {
        let m = Move::new(PieceKind::Knight, sq("B1"), sq("C3"));
        assert_eq!(m.to_notation(), "NB1C3");
        assert_eq!(format!("{:?}", m), "Move(NB1C3)");
    }

    #[test]
    fn wrong_length() {
        assert_eq!(Move::parse(""), Err(NotationError::WrongLength(0)));
        assert_eq!(Move::parse("PE2E"), Err(NotationError::WrongLength(4)));
        assert_eq!(Move::parse("PE2E45"), Err(NotationError::WrongLength(6)));
    }

    #[test]
    fn invalid_components() {
        assert_eq!(Move::parse("XE2E4"), Err(NotationError::InvalidKind('X')));
        assert_eq!(Move::parse("pE2E4"), Err(NotationError::InvalidKind('p')));
        assert_eq!(Move::parse("PI2E4"), Err(NotationError::InvalidFile('I')));
        assert_eq!(Move::parse("Pe2e4"), Err(NotationError::InvalidFile('e')));
        assert_eq!(Move::parse("PE9E4"), Err(NotationError::InvalidRank('9')));
        assert_eq!(Move::parse("PE2J4"), Err(NotationError::InvalidFile('J')));
        assert_eq!(Move::parse("PE2E0"), Err(NotationError::InvalidRank('0')));
    }

    #[test]
    fn multibyte_input_is_a_length_error() {
        assert!(matches!(
            Move::parse("PÉ2E4X"),
            Err(NotationError::WrongLength(6))
        ));
        assert!(matches!(Move::parse("PÉ2E4"), Err(NotationError::InvalidFile('É'))));
    }

    fn move_string() -> impl Strategy<Value = String> {
        "[PRNBQK][A-H][1-8][A-H][1-8]"
    }

    proptest! {
        #[test]
        fn decode_then_encode_is_identity(s in move_string()) {
            let m = Move::parse(&s).unwrap();
            prop_assert_eq!(m.to_notation(), s);
        }

        #[test]
        fn encode_then_decode_is_identity(
            kind in 0usize..6,
            from in 0u8..64,
            to in 0u8..64,
        ) {
            let m = Move::new(
                PieceKind::ALL[kind],
                Square::from_index(from).unwrap(),
                Square::from_index(to).unwrap(),
            );
            prop_assert_eq!(Move::parse(&m.to_notation()), Ok(m));
        }

        #[test]
        fn arbitrary_input_never_panics(s in "\\PC{0,8}") {
            let _ = Move::parse(&s);
        }
    }
}
