//! notchess: chess where captures are mandatory.
//!
//! Four ways to play: two people at one terminal, against the computer,
//! hosting a network game, or joining one.

mod config;
mod human;
mod local;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use notchess_core::Color;
use notchess_engine::{Game, NotChess, Position};
use notchess_relay::{host, join, AutomatedSource, Host};
use tracing_subscriber::EnvFilter;

use config::Config;
use human::HumanSource;
use local::Seats;

#[derive(Parser)]
#[command(name = "notchess", version)]
#[command(about = "Chess with forced captures and queen promotion")]
struct Cli {
    /// Config file (default: notchess.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rounds before the game is scored on material
    #[arg(long, global = true)]
    move_limit: Option<u32>,

    /// Start from this placement (e.g. "k7/8/8/8/8/8/P7/K7") with White to move
    #[arg(long, global = true)]
    position: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two players at this terminal
    #[command(alias = "h")]
    Human,
    /// Play White against the computer
    #[command(alias = "c")]
    Computer {
        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Wait for a player to connect, then play Black
    #[command(alias = "s")]
    Host {
        #[arg(short, long)]
        port: Option<u16>,
        /// Type moves instead of letting the computer play
        #[arg(long)]
        human: bool,
    },
    /// Connect to a host and play White
    #[command(alias = "t")]
    Join {
        /// Host name or IP address
        address: String,
        #[arg(short, long)]
        port: Option<u16>,
        /// Type moves instead of letting the computer play
        #[arg(long)]
        human: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(move_limit) = cli.move_limit {
        config.game.move_limit = move_limit;
    }
    tracing::info!(command = ?cli.command, move_limit = config.game.move_limit, "starting");

    let rules = NotChess::with_move_limit(config.game.move_limit);
    let mut game = match &cli.position {
        Some(placement) => {
            let position = Position::from_placement(placement, Color::White, rules.move_limit)
                .with_context(|| format!("invalid --position {placement:?}"))?;
            Game::from_position(rules, position)
        }
        None => Game::with_rules(rules),
    };

    let result = match cli.command {
        Command::Human => local::play(&mut game, &mut HumanSource::stdin()).await?,
        Command::Computer { seed } => {
            let computer = AutomatedSource::new(config.bot.player(seed));
            let mut seats = Seats::new(HumanSource::stdin(), computer);
            local::play(&mut game, &mut seats).await?
        }
        Command::Host { port, human } => {
            if let Some(port) = port {
                config.network.port = port;
            }
            let listener = Host::bind(&config.network).await?;
            println!("Waiting for a player on port {}", listener.local_addr()?.port());
            let mut conn = listener.accept().await?;
            if human {
                host::play(&mut conn, &mut game, &mut HumanSource::stdin()).await?
            } else {
                let mut computer = AutomatedSource::new(config.bot.player(None));
                host::play(&mut conn, &mut game, &mut computer).await?
            }
        }
        Command::Join {
            address,
            port,
            human,
        } => {
            if let Some(port) = port {
                config.network.port = port;
            }
            let mut conn = join::connect(&address, &config.network).await?;
            if human {
                join::play(&mut conn, &mut game, &mut HumanSource::stdin()).await?
            } else {
                let mut computer = AutomatedSource::new(config.bot.player(None));
                join::play(&mut conn, &mut game, &mut computer).await?
            }
        }
    };

    println!("{}", render::board(game.position()));
    println!("{result}");
    Ok(())
}
