//! Automated player: random piece, random target within the piece's
//! movement envelope, repeated until the engine would accept the move.

use notchess_core::{Color, Move, Piece, PieceKind, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::MoveError;
use crate::movegen::{capture_moves, capturing_moves, is_legal_move, legal_moves};
use crate::Position;

/// How the player picks among several available captures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaptureSelection {
    /// Every available capture is equally likely.
    #[default]
    Uniform,
    /// A random capture of the last roster piece that has one.
    LastPiece,
}

/// Plays random moves, always capturing when it has to.
///
/// Deterministic for a fixed seed and position; see [`RandomPlayer::seeded`].
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = StdRng> {
    rng: R,
    max_attempts: usize,
    capture_selection: CaptureSelection,
}

impl RandomPlayer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 500;

    pub fn new(rng: R) -> Self {
        RandomPlayer {
            rng,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            capture_selection: CaptureSelection::default(),
        }
    }

    /// Caps the random proposals before falling back to a full enumeration.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_capture_selection(mut self, selection: CaptureSelection) -> Self {
        self.capture_selection = selection;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn capture_selection(&self) -> CaptureSelection {
        self.capture_selection
    }

    /// Picks a move for `color`.
    ///
    /// If a capture is available one is returned. Otherwise random
    /// proposals are tried, then every legal move is enumerated. Fails only
    /// when `color` has no legal move at all.
    pub fn propose(&mut self, position: &Position, color: Color) -> Result<Move, MoveError> {
        if let Some(capture) = self.choose_capture(position, color) {
            return Ok(capture);
        }

        let roster = position.roster(color);
        if roster.is_empty() {
            return Err(MoveError::NoMoveFound { attempts: 0 });
        }

        let board = position.board();
        for _ in 0..self.max_attempts {
            let Some(piece) = roster.get(self.rng.gen_range(0..roster.len())) else {
                continue;
            };
            let Some(target) = self.heuristic_target(piece) else {
                continue;
            };
            if is_legal_move(board, piece, target) {
                return Ok(Move::new(piece.kind, piece.square, target));
            }
        }

        tracing::debug!(side = %color, attempts = self.max_attempts, "random proposals exhausted");
        legal_moves(position, color)
            .choose(&mut self.rng)
            .copied()
            .ok_or(MoveError::NoMoveFound {
                attempts: self.max_attempts,
            })
    }

    fn choose_capture(&mut self, position: &Position, color: Color) -> Option<Move> {
        match self.capture_selection {
            CaptureSelection::Uniform => capture_moves(position, color)
                .choose(&mut self.rng)
                .copied(),
            CaptureSelection::LastPiece => {
                let board = position.board();
                let mut chosen = None;
                for piece in position.roster(color) {
                    if let Some(&to) = capturing_moves(board, piece).choose(&mut self.rng) {
                        chosen = Some(Move::new(piece.kind, piece.square, to));
                    }
                }
                chosen
            }
        }
    }

    /// A random square inside the piece's movement envelope, ignoring other
    /// pieces. `None` when the guess falls off the board.
    fn heuristic_target(&mut self, piece: &Piece) -> Option<Square> {
        let from = piece.square;
        match piece.kind {
            PieceKind::Pawn => {
                let steps = if from.rank() == piece.color.pawn_rank() {
                    self.rng.gen_range(1..=2)
                } else {
                    1
                };
                from.offset(0, piece.color.forward() * steps)
            }
            PieceKind::Rook => self.rook_target(from),
            PieceKind::Bishop => self.bishop_target(from),
            PieceKind::Queen => {
                if self.rng.gen_bool(0.5) {
                    self.rook_target(from)
                } else {
                    self.bishop_target(from)
                }
            }
            PieceKind::Knight => {
                let long = if self.rng.gen_bool(0.5) { 2 } else { -2 };
                let short = if self.rng.gen_bool(0.5) { 1 } else { -1 };
                if self.rng.gen_bool(0.5) {
                    from.offset(long, short)
                } else {
                    from.offset(short, long)
                }
            }
            PieceKind::King => {
                from.offset(self.rng.gen_range(-1..=1), self.rng.gen_range(-1..=1))
            }
        }
    }

    fn rook_target(&mut self, from: Square) -> Option<Square> {
        let distance = self.rng.gen_range(-8..8);
        if self.rng.gen_bool(0.5) {
            from.offset(0, distance)
        } else {
            from.offset(distance, 0)
        }
    }

    fn bishop_target(&mut self, from: Square) -> Option<Square> {
        let distance = self.rng.gen_range(-8..8);
        if self.rng.gen_bool(0.5) {
            from.offset(distance, distance)
        } else {
            from.offset(-distance, distance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(placement: &str, side: Color) -> Position {
        Position::from_placement(placement, side, 10).unwrap()
    }

    #[test]
    fn opening_move_is_legal() {
        let pos = Position::startpos(50);
        let legal = legal_moves(&pos, Color::White);
        for seed in 0..32 {
            let mov = RandomPlayer::seeded(seed).propose(&pos, Color::White).unwrap();
            assert!(legal.contains(&mov), "{mov} is not legal");
        }
    }

    #[test]
    fn same_seed_same_move() {
        let pos = Position::startpos(50);
        let a = RandomPlayer::seeded(7).propose(&pos, Color::Black).unwrap();
        let b = RandomPlayer::seeded(7).propose(&pos, Color::Black).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn always_takes_when_possible() {
        let pos = position("k7/8/8/3p4/4P3/8/8/K7", Color::White);
        for seed in 0..16 {
            let mov = RandomPlayer::seeded(seed).propose(&pos, Color::White).unwrap();
            assert_eq!(mov.to_string(), "PE4D5");
        }
    }

    #[test]
    fn capture_selection_strategies() {
        // The pawn on B2 and the rook on H1 both have a capture.
        let mut pos = position("k7/8/8/8/8/2p5/1P6/K6R", Color::White);
        pos.add_piece(PieceKind::Knight, Color::Black, Square::parse("H5").unwrap())
            .unwrap();
        let captures = capture_moves(&pos, Color::White);
        assert_eq!(captures.len(), 2);

        for seed in 0..16 {
            let mov = RandomPlayer::seeded(seed)
                .with_capture_selection(CaptureSelection::LastPiece)
                .propose(&pos, Color::White)
                .unwrap();
            // Scan order puts the B2 pawn ahead of the H1 rook.
            assert_eq!(mov.to_string(), "RH1H5");
        }

        let mut seen = Vec::new();
        for seed in 0..64 {
            let mov = RandomPlayer::seeded(seed).propose(&pos, Color::White).unwrap();
            assert!(captures.contains(&mov));
            if !seen.contains(&mov) {
                seen.push(mov);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn falls_back_to_enumeration() {
        // With no random attempts the move comes straight from enumeration.
        let pos = position("7k/8/8/8/8/8/P7/K7", Color::White);
        let mov = RandomPlayer::seeded(3)
            .with_max_attempts(0)
            .propose(&pos, Color::White)
            .unwrap();
        assert!(legal_moves(&pos, Color::White).contains(&mov));
    }

    #[test]
    fn no_move_found() {
        let pos = position("7k/8/8/8/1p6/1Pp5/2P5/N7", Color::White);
        assert_eq!(
            RandomPlayer::seeded(1).with_max_attempts(20).propose(&pos, Color::White),
            Err(MoveError::NoMoveFound { attempts: 20 })
        );
        let empty = Position::empty(Color::White, 10);
        assert_eq!(
            RandomPlayer::seeded(1).propose(&empty, Color::White),
            Err(MoveError::NoMoveFound { attempts: 0 })
        );
    }
}
