//! Terminal front end for the strictly_bitboard engine.
//!
//! - **Play**: interactive game over stdin/stdout
//! - **Bench**: timing of construction, moves and resets
//! - **Replay**: apply a move list and dump the snapshot as JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bench;
mod cli;
mod config;
mod play;
mod replay;

pub use bench::{BenchReport, LARGE_BOARD_MOVES, LARGE_BOARD_SIZES, LargeBoardTiming, run as run_bench};
pub use cli::{Cli, Command, parse_coordinate};
pub use config::{CliConfig, ConfigError};
pub use play::{Command as PlayCommand, PlaySession};
pub use replay::{ReplayReport, replay};
