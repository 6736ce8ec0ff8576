mod console;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mufti_uci::UciEngine;

use crate::console::{ConsoleConfig, Variant};

#[derive(Parser, Debug)]
#[command(name = "mufti", version, about = "Alpha-beta chess engine")]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Speak UCI on stdin/stdout (default)
    Uci,
    /// Play a console game against the engine
    Play {
        #[arg(long, value_enum, default_value_t = Variant::Bishop)]
        variant: Variant,
        /// Let the engine take White
        #[arg(long)]
        engine_first: bool,
        #[arg(long, default_value_t = 5)]
        depth: u32,
        /// Engine time per move in milliseconds
        #[arg(long, default_value_t = 1000)]
        movetime: u64,
    },
}

fn main() -> Result<()> {
    // stdout belongs to the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(mode = ?cli.mode, "mufti starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match cli.mode.unwrap_or(Mode::Uci) {
        Mode::Uci => UciEngine::new().run(stdin.lock(), &mut stdout)?,
        Mode::Play {
            variant,
            engine_first,
            depth,
            movetime,
        } => {
            let config = ConsoleConfig {
                variant,
                engine_first,
                depth,
                movetime: Duration::from_millis(movetime),
            };
            console::play(&config, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
