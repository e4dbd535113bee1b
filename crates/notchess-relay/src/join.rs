//! The connecting side. It plays White and moves first.

use notchess_engine::{Game, GameResult};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

use crate::{Connection, Message, MoveSource, RelayConfig, RelayError};

/// Connects to a host at `address` on the configured port.
pub async fn connect(
    address: &str,
    config: &RelayConfig,
) -> Result<Connection<TcpStream>, RelayError> {
    let stream = TcpStream::connect((address, config.port)).await?;
    tracing::info!(peer = %stream.peer_addr()?, "connected");
    Ok(Connection::new(stream, config.idle_timeout()))
}

/// Runs one game as the joining side.
///
/// Each local move is checked against `game` before it is sent, and only
/// applied once the host has accepted it. A result line from the host must
/// agree with the local game.
pub async fn play<S, M>(
    conn: &mut Connection<S>,
    game: &mut Game,
    source: &mut M,
) -> Result<GameResult, RelayError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    M: MoveSource,
{
    match conn.recv().await? {
        Message::PleaseMove => {}
        other => {
            return Err(RelayError::Protocol(format!(
                "expected {:?}, got {:?}",
                Message::PleaseMove.to_line(),
                other.to_line()
            )))
        }
    }
    if let Some(local) = game.result() {
        return match conn.recv().await? {
            Message::Result(remote) => agree(Some(local), remote),
            other => Err(RelayError::Protocol(format!(
                "expected a result, got {:?}",
                other.to_line()
            ))),
        };
    }

    loop {
        let ours = source.next_move(game).await?;
        if let Err(err) = game.validate(&ours) {
            if Message::rejection(&err).is_none() {
                return Err(err.into());
            }
            source.rejected(&ours, &err);
            continue;
        }
        conn.send(&Message::Move(ours.clone())).await?;

        let reply = conn.recv().await?;
        if let Some(err) = reply.rejection_error(&ours) {
            tracing::debug!(mov = %ours, reply = %reply.to_line(), "host refused move");
            source.rejected(&ours, &err);
            continue;
        }

        let local = game.submit_move(&ours)?.result;
        match reply {
            Message::Result(remote) => return agree(local, remote),
            Message::Move(theirs) => {
                if local.is_some() {
                    return Err(RelayError::Desync {
                        local,
                        remote: None,
                    });
                }
                if let Some(result) = game.submit_move(&theirs)?.result {
                    return match conn.recv().await? {
                        Message::Result(remote) => agree(Some(result), remote),
                        other => Err(RelayError::Protocol(format!(
                            "expected a result, got {:?}",
                            other.to_line()
                        ))),
                    };
                }
            }
            other => {
                return Err(RelayError::Protocol(format!(
                    "unexpected reply {:?}",
                    other.to_line()
                )))
            }
        }
    }
}

fn agree(local: Option<GameResult>, remote: GameResult) -> Result<GameResult, RelayError> {
    if local == Some(remote) {
        tracing::info!(result = %remote, "game over");
        Ok(remote)
    } else {
        Err(RelayError::Desync {
            local,
            remote: Some(remote),
        })
    }
}
