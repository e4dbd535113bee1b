//! Games played entirely in this process.

use anyhow::Context;
use notchess_core::Color;
use notchess_engine::{Game, GameResult, MoveError};
use notchess_relay::{MoveSource, RelayError};

/// A different move source for each side.
pub struct Seats<W, B> {
    white: W,
    black: B,
    last: Color,
}

impl<W, B> Seats<W, B> {
    pub fn new(white: W, black: B) -> Self {
        Seats {
            white,
            black,
            last: Color::White,
        }
    }
}

impl<W: MoveSource, B: MoveSource> MoveSource for Seats<W, B> {
    async fn next_move(&mut self, game: &Game) -> Result<String, RelayError> {
        self.last = game.side_to_move();
        match self.last {
            Color::White => self.white.next_move(game).await,
            Color::Black => self.black.next_move(game).await,
        }
    }

    fn rejected(&mut self, mov: &str, reason: &MoveError) {
        match self.last {
            Color::White => self.white.rejected(mov, reason),
            Color::Black => self.black.rejected(mov, reason),
        }
    }
}

/// Plays `game` to the end, asking `source` for every move.
///
/// Refused moves are reported back to the source and asked for again.
pub async fn play<M: MoveSource>(game: &mut Game, source: &mut M) -> anyhow::Result<GameResult> {
    loop {
        if let Some(result) = game.result() {
            return Ok(result);
        }
        let side = game.side_to_move();
        let mov = source
            .next_move(game)
            .await
            .with_context(|| format!("no move for {side}"))?;

        match game.submit_move(&mov) {
            Ok(outcome) => {
                println!("{side} plays {mov}");
                if let Some(captured) = outcome.captured {
                    println!("  takes {captured}");
                }
                if let Some(promoted) = outcome.promoted {
                    println!("  promotes to {}", promoted.kind);
                }
                if let Some(result) = outcome.result {
                    return Ok(result);
                }
            }
            Err(err) if err.wire_text().is_some() => source.rejected(&mov, &err),
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notchess_engine::{NotChess, RandomPlayer};
    use notchess_relay::AutomatedSource;

    use crate::human::HumanSource;

    #[tokio::test]
    async fn computer_against_itself() {
        let mut game = Game::new();
        let mut seats = Seats::new(
            AutomatedSource::new(RandomPlayer::seeded(5)),
            AutomatedSource::new(RandomPlayer::seeded(6)),
        );
        match play(&mut game, &mut seats).await {
            Ok(result) => assert_eq!(game.result(), Some(result)),
            // Boxed in with no legal move.
            Err(err) => assert!(err.to_string().starts_with("no move for")),
        }
    }

    #[tokio::test]
    async fn typed_moves_with_mistakes() {
        let mut game = Game::with_rules(NotChess::with_move_limit(1));
        let input = "PE2E5\ne2e4\npe2e4\npe7e5\n";
        let mut source = HumanSource::new(input.as_bytes());
        let result = play(&mut game, &mut source).await.unwrap();
        assert_eq!(result, GameResult::Tie);
        assert_eq!(game.history().len(), 2);
    }

    #[tokio::test]
    async fn decided_position_needs_no_moves() {
        use notchess_engine::Position;

        let position = Position::from_placement("k7/8/8/8/8/8/8/K7", Color::White, 0).unwrap();
        let mut game = Game::from_position(NotChess::default(), position);
        let mut source = HumanSource::new("".as_bytes());
        assert_eq!(play(&mut game, &mut source).await.unwrap(), GameResult::Tie);
        assert!(game.history().is_empty());
    }
}
