//! The listening side. It plays Black and referees the peer's moves.

use std::net::SocketAddr;
use std::time::Duration;

use notchess_engine::{Game, GameResult};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};

use crate::{Connection, Message, MoveSource, RelayConfig, RelayError};

/// A bound listener waiting for a peer.
#[derive(Debug)]
pub struct Host {
    listener: TcpListener,
    idle_timeout: Option<Duration>,
}

impl Host {
    pub async fn bind(config: &RelayConfig) -> Result<Self, RelayError> {
        let listener = TcpListener::bind((config.bind_address.as_str(), config.port)).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        Ok(Host {
            listener,
            idle_timeout: config.idle_timeout(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Waits for the next peer.
    pub async fn accept(&self) -> Result<Connection<TcpStream>, RelayError> {
        let (stream, peer) = self.listener.accept().await?;
        tracing::info!(%peer, "peer connected");
        Ok(Connection::new(stream, self.idle_timeout))
    }
}

/// Runs one game as the host, from `Please Move` to the result line.
///
/// `game` should be fresh; the peer moves first. A game that is already
/// decided sends its result straight away. Refused peer moves are answered
/// and the peer is expected to try again. Returns the result once it has been
/// sent.
pub async fn play<S, M>(
    conn: &mut Connection<S>,
    game: &mut Game,
    source: &mut M,
) -> Result<GameResult, RelayError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    M: MoveSource,
{
    conn.send(&Message::PleaseMove).await?;
    if let Some(result) = game.result() {
        return finish(conn, result).await;
    }

    loop {
        let theirs = conn.recv_move().await?;
        match game.submit_move(&theirs) {
            Ok(outcome) => {
                if let Some(result) = outcome.result {
                    return finish(conn, result).await;
                }
            }
            Err(err) => {
                let reply = Message::rejection(&err).ok_or(RelayError::Engine(err))?;
                tracing::debug!(mov = %theirs, reply = %reply.to_line(), "peer move refused");
                conn.send(&reply).await?;
                continue;
            }
        }

        let result = loop {
            let ours = source.next_move(game).await?;
            match game.submit_move(&ours) {
                Ok(outcome) => {
                    conn.send(&Message::Move(ours)).await?;
                    break outcome.result;
                }
                Err(err) if Message::rejection(&err).is_some() => source.rejected(&ours, &err),
                Err(err) => return Err(err.into()),
            }
        };
        if let Some(result) = result {
            return finish(conn, result).await;
        }
    }
}

async fn finish<S>(conn: &mut Connection<S>, result: GameResult) -> Result<GameResult, RelayError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    tracing::info!(%result, "game over");
    conn.send(&Message::Result(result)).await?;
    Ok(result)
}
