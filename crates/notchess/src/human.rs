//! Moves typed at the terminal.

use std::io;

use notchess_engine::{Game, MoveError};
use notchess_relay::{MoveSource, RelayError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::render;

/// Prompts with the board and reads one move per line.
///
/// Input is trimmed and upper-cased, so `pe2e4` is accepted.
pub struct HumanSource<R> {
    lines: Lines<R>,
    show_board: bool,
}

impl HumanSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> HumanSource<R> {
    pub fn new(reader: R) -> Self {
        HumanSource {
            lines: reader.lines(),
            show_board: true,
        }
    }

    #[cfg(test)]
    fn quiet(mut self) -> Self {
        self.show_board = false;
        self
    }
}

impl<R: AsyncBufRead + Unpin> MoveSource for HumanSource<R> {
    async fn next_move(&mut self, game: &Game) -> Result<String, RelayError> {
        if self.show_board {
            println!("{}", render::board(game.position()));
            println!("{} move:", game.side_to_move());
        }
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Err(RelayError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                )));
            };
            let mov = line.trim();
            if !mov.is_empty() {
                return Ok(mov.to_ascii_uppercase());
            }
        }
    }

    fn rejected(&mut self, _mov: &str, reason: &MoveError) {
        match reason.wire_text() {
            Some(text) => println!("{text}"),
            None => println!("{reason}"),
        }
    }
}
