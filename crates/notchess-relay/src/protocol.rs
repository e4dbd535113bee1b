//! Wire messages and a line-oriented connection.

use std::time::Duration;

use notchess_engine::{GameResult, MoveError};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::RelayError;

const PLEASE_MOVE: &str = "Please Move";
const INVALID_MOVE: &str = "INVALID MOVE";
const NEED_TO_CAPTURE: &str = "NEED TO CAPTURE";

/// One line of the relay protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Sent once by the host after accepting a peer.
    PleaseMove,
    /// A move string. Not checked here; the receiving game validates it.
    Move(String),
    /// The last move was refused as malformed or illegal.
    InvalidMove,
    /// The last move was refused because a capture was available.
    NeedToCapture,
    /// The game is over.
    Result(GameResult),
}

impl Message {
    /// Parses one line.
    ///
    /// Control lines must match exactly. Anything else, blank lines
    /// included, is a move for the receiving game to accept or refuse.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            PLEASE_MOVE => Message::PleaseMove,
            INVALID_MOVE => Message::InvalidMove,
            NEED_TO_CAPTURE => Message::NeedToCapture,
            _ => match GameResult::from_wire_text(line) {
                Some(result) => Message::Result(result),
                None => Message::Move(line.to_string()),
            },
        }
    }

    /// Formats the message as a line, without its terminator.
    pub fn to_line(&self) -> String {
        match self {
            Message::PleaseMove => PLEASE_MOVE.to_string(),
            Message::Move(text) => text.clone(),
            Message::InvalidMove => INVALID_MOVE.to_string(),
            Message::NeedToCapture => NEED_TO_CAPTURE.to_string(),
            Message::Result(result) => result.wire_text().to_string(),
        }
    }

    /// The reply refusing a move, for errors that are refusals.
    pub fn rejection(err: &MoveError) -> Option<Self> {
        match err {
            MoveError::InvalidFormat(_) | MoveError::InvalidMove(_) => Some(Message::InvalidMove),
            MoveError::NeedToCapture(_) => Some(Message::NeedToCapture),
            MoveError::NoMoveFound { .. } | MoveError::GameOver => None,
        }
    }

    /// The engine error matching a refusal received for `mov`.
    pub fn rejection_error(&self, mov: &str) -> Option<MoveError> {
        match self {
            Message::InvalidMove => Some(MoveError::InvalidMove(mov.to_string())),
            Message::NeedToCapture => Some(MoveError::NeedToCapture(mov.to_string())),
            _ => None,
        }
    }
}

/// A stream carrying one message per line.
#[derive(Debug)]
pub struct Connection<S> {
    stream: BufReader<S>,
    idle_timeout: Option<Duration>,
    line: String,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, idle_timeout: Option<Duration>) -> Self {
        Connection {
            stream: BufReader::new(stream),
            idle_timeout,
            line: String::new(),
        }
    }

    pub async fn send(&mut self, message: &Message) -> Result<(), RelayError> {
        let mut line = message.to_line();
        tracing::debug!(line = %line, "send");
        line.push('\n');
        self.stream.write_all(line.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Waits for the next message. End of stream is
    /// [`RelayError::Disconnected`].
    pub async fn recv(&mut self) -> Result<Message, RelayError> {
        self.line.clear();
        let read = self.stream.read_line(&mut self.line);
        let n = match self.idle_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| RelayError::Timeout(limit))??,
            None => read.await?,
        };
        if n == 0 {
            return Err(RelayError::Disconnected);
        }
        tracing::debug!(line = %self.line.trim_end(), "recv");
        Ok(Message::parse(&self.line))
    }

    /// Reads a message that must be a move.
    pub(crate) async fn recv_move(&mut self) -> Result<String, RelayError> {
        match self.recv().await? {
            Message::Move(text) => Ok(text),
            other => Err(RelayError::Protocol(format!(
                "expected a move, got {:?}",
                other.to_line()
            ))),
        }
    }
}
