//! Host process for the simulation core: world lifecycle commands.
//!
//! Exit codes: 0 success, 1 invalid world directory, 2 corrupt submap,
//! 3 I/O failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ashfall_runtime::{SessionError, WorldSession};

#[derive(Parser)]
#[command(name = "ashfall", about = "Turn-based survival simulation core host")]
struct Cli {
    #[command(subcommand)]
    command: TopCommand,
}

#[derive(Subcommand)]
enum TopCommand {
    /// World lifecycle operations.
    World {
        #[command(subcommand)]
        command: WorldCommand,
    },
}

#[derive(Subcommand)]
enum WorldCommand {
    /// Create a new world with the given seed.
    New {
        seed: u32,
        /// World directory; falls back to $WORLD_DIR.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Open an existing world and verify it loads cleanly.
    Open { path: PathBuf },
    /// Open a world, advance nothing, and flush it back out.
    Save {
        /// World directory; falls back to $WORLD_DIR.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Open a world and close it cleanly.
    Close {
        /// World directory; falls back to $WORLD_DIR.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<SessionError>()
                .map_or(3, SessionError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let TopCommand::World { command } = cli.command;
    match command {
        WorldCommand::New { seed, dir } => {
            let root = WorldSession::resolve_root(dir.as_deref())?;
            let session = WorldSession::create(&root, seed)?;
            println!("created world at {}", session.root().display());
            session.close()?;
        }
        WorldCommand::Open { path } => {
            let session = WorldSession::open(&path)?;
            println!(
                "world at {} is valid (turn {})",
                session.root().display(),
                session.world.turn
            );
            session.close()?;
        }
        WorldCommand::Save { dir } => {
            let root = WorldSession::resolve_root(dir.as_deref())?;
            let mut session = WorldSession::open(&root)?;
            session.save()?;
            println!("saved world at {}", session.root().display());
            session.close()?;
        }
        WorldCommand::Close { dir } => {
            let root = WorldSession::resolve_root(dir.as_deref())?;
            let session = WorldSession::open(&root)?;
            session.close()?;
            println!("closed world at {}", root.display());
        }
    }
    Ok(())
}
