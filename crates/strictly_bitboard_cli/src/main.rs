//! Strictly Bitboard - unified CLI
//!
//! Play, benchmark or replay N×N tic-tac-toe games.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_bitboard::Engine;
use strictly_bitboard_cli::{Cli, CliConfig, Command, PlaySession, replay, run_bench};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)?;
    init_tracing(&config);

    match cli.command {
        Command::Play { size } => run_play(size.unwrap_or(*config.board_size())),
        Command::Bench { iterations } => {
            run_bench_command(iterations.unwrap_or(*config.bench_iterations()))
        }
        Command::Replay { size, moves } => {
            run_replay(size.unwrap_or(*config.board_size()), &moves)
        }
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game
#[instrument]
fn run_play(size: i64) -> Result<()> {
    let engine = Engine::new(size).context("Cannot start game")?;
    info!(size, "Starting interactive game");

    let stdin = io::stdin();
    let mut session = PlaySession::new(engine, stdin.lock(), io::stdout().lock());
    session.run().context("Terminal I/O failed")?;
    Ok(())
}

/// Run the benchmark
#[instrument]
fn run_bench_command(iterations: u32) -> Result<()> {
    let report = run_bench(iterations).context("Benchmark setup failed")?;
    print!("{report}");
    Ok(())
}

/// Replay a move list
#[instrument(skip(moves))]
fn run_replay(size: i64, moves: &[(i64, i64)]) -> Result<()> {
    let report = replay(size, moves).context("Cannot start replay")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
