//! Core types for notchess.
//!
//! This crate provides the fundamental types shared by the engine, the
//! network relay and the launcher:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (algebraic and row/column)
//! - [`Move`] and the five-character move notation (`PE2E4`)

mod color;
mod notation;
mod piece;
mod square;

pub use color::Color;
pub use notation::{Move, NotationError};
pub use piece::{Piece, PieceKind};
pub use square::Square;
