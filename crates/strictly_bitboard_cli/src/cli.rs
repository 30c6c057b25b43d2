//! Command-line interface for strictly_bitboard.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Bitboard - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_bitboard")]
#[command(about = "N×N tic-tac-toe on a bit-mask engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_bitboard.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<i64>,
    },

    /// Time construction, moves and resets
    Bench {
        /// Iterations per pass (overrides the config file)
        #[arg(short, long)]
        iterations: Option<u32>,
    },

    /// Apply a move list and print the final state as JSON
    Replay {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<i64>,

        /// Moves as `row,col`, X first
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        moves: Vec<(i64, i64)>,
    },
}

/// Parses `row,col`.
pub fn parse_coordinate(s: &str) -> Result<(i64, i64), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", part, e))
    };
    Ok((parse(row)?, parse(col)?))
}
