//! Board square representation.
//!
//! Two coordinate systems meet here and nowhere else:
//! - algebraic: file `A`-`H` (0-7) and rank `1`-`8` (0-7)
//! - storage: row 0-7 from the top of the board (rank 8 is row 0) and column 0-7

use std::fmt;

/// A square on the board, indexed 0-63.
///
/// Squares are indexed rank-major from A1:
/// - A1 = 0, B1 = 1, ..., H1 = 7
/// - A2 = 8, ..., H8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank indices (0-7 each).
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from storage coordinates (row 0 is rank 8).
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 8 {
            Self::new(col, 7 - row)
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from its notation characters (`'A'..='H'`, `'1'..='8'`).
    ///
    /// Files are case-sensitive: lowercase letters are rejected.
    #[inline]
    pub const fn from_chars(file: char, rank: char) -> Option<Self> {
        match (file_index(file), rank_index(rank)) {
            (Some(f), Some(r)) => Some(Square(r * 8 + f)),
            _ => None,
        }
    }

    /// Parses a two-character square such as `"E4"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        Self::from_chars(file, rank)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// File index, 0 for `A`.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank index, 0 for rank `1`.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Storage row, 0 for rank `8`.
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self.rank()
    }

    /// Storage column, same as the file index.
    #[inline]
    pub const fn col(self) -> u8 {
        self.file()
    }

    /// Returns the square shifted by `df` files and `dr` ranks, or `None` if
    /// that leaves the board. Offsets never wrap around an edge.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let (Some(file), Some(rank)) = (
            (self.file() as i8).checked_add(df),
            (self.rank() as i8).checked_add(dr),
        ) else {
            return None;
        };
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Square((rank * 8 + file) as u8))
    }

    /// Uppercase file letter.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'A' + self.file()) as char
    }

    /// Rank digit.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Iterates over all 64 squares from A1 to H8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

const fn file_index(c: char) -> Option<u8> {
    match c {
        'A'..='H' => Some(c as u8 - b'A'),
        _ => None,
    }
}

const fn rank_index(c: char) -> Option<u8> {
    match c {
        '1'..='8' => Some(c as u8 - b'1'),
        _ => None,
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
