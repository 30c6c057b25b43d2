//! Interactive line-based game loop.
//!
//! Reads commands from any `BufRead` and writes the board to any `Write`,
//! so the loop runs the same against a terminal or an in-memory buffer.

use std::io::{BufRead, Write};
use strictly_bitboard::{Engine, GameStatus, MoveOutcome};
use tracing::{debug, instrument};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at `(row, col)`.
    Move(i64, i64),
    /// Start a new game on the same board.
    Reset,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Parses `row col`, `row,col`, `reset` or `quit`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Some(Command::Reset),
            "quit" | "q" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        match parts.next() {
            Some(_) => None,
            None => Some(Command::Move(row, col)),
        }
    }
}

/// Drives an [`Engine`] from text input.
#[derive(Debug, derive_new::new)]
pub struct PlaySession<R, W> {
    engine: Engine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(size = %self.engine.board_size()))]
    pub fn run(&mut self) -> std::io::Result<()> {
        self.render()?;
        self.prompt()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Reset) => {
                    self.engine.reset();
                    writeln!(self.output, "New game.")?;
                    self.render()?;
                }
                Some(Command::Move(row, col)) => self.apply(row, col)?,
                None => writeln!(
                    self.output,
                    "Enter `row col`, `reset` or `quit`."
                )?,
            }
            self.prompt()?;
        }
        self.output.flush()
    }

    /// The engine being played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn apply(&mut self, row: i64, col: i64) -> std::io::Result<()> {
        match self.engine.make_move(row, col) {
            MoveOutcome::Success => {
                self.render()?;
                self.announce()
            }
            rejected => writeln!(self.output, "{rejected}."),
        }
    }

    fn announce(&mut self) -> std::io::Result<()> {
        match self.engine.status() {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Won(player) => {
                let line = self.engine.winning_coordinates().unwrap_or_default();
                match (line.first(), line.last()) {
                    (Some(start), Some(end)) => writeln!(
                        self.output,
                        "Player {player} wins from {start:?} to {end:?}! Type `reset` to play again."
                    ),
                    _ => writeln!(self.output, "Player {player} wins!"),
                }
            }
            GameStatus::Draw => {
                writeln!(self.output, "Draw! Type `reset` to play again.")
            }
        }
    }

    fn render(&mut self) -> std::io::Result<()> {
        write!(self.output, "{}", self.engine)
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        if !self.engine.is_over() {
            write!(self.output, "{} > ", self.engine.current_player())?;
        }
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1 2"), Some(Command::Move(1, 2)));
        assert_eq!(Command::parse(" 0,2\n"), Some(Command::Move(0, 2)));
        assert_eq!(Command::parse("-1 0"), Some(Command::Move(-1, 0)));
        assert_eq!(Command::parse("RESET"), Some(Command::Reset));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("1"), None);
        assert_eq!(Command::parse("1 2 3"), None);
        assert_eq!(Command::parse("a b"), None);
    }
}
