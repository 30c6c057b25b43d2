//! Wall-clock timings for the hot engine operations.

use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use strictly_bitboard::{BoardSize, Engine, EngineError};
use tracing::{info, instrument};

/// Board sizes timed by the large-board pass.
pub const LARGE_BOARD_SIZES: [i64; 2] = [5, 8];

/// Moves played on each large board.
pub const LARGE_BOARD_MOVES: usize = 50;

/// Timing for one large-board run.
#[derive(Debug, Clone, Serialize)]
pub struct LargeBoardTiming {
    /// Side length.
    pub board_size: usize,
    /// Moves actually attempted.
    pub moves: usize,
    /// Total time in milliseconds.
    pub total_ms: f64,
}

/// Benchmark results, per-operation averages in microseconds.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Iterations per averaged pass.
    pub iterations: u32,
    /// Average engine construction time.
    pub construct_us: f64,
    /// Average move time on a 3×3 board, reset every nine moves.
    pub move_us: f64,
    /// Average reset time.
    pub reset_us: f64,
    /// Fixed-length runs on larger boards.
    pub large_boards: Vec<LargeBoardTiming>,
}

fn measure<F: FnMut()>(mut operation: F) -> Duration {
    let start = Instant::now();
    operation();
    start.elapsed()
}

fn per_iteration_us(elapsed: Duration, iterations: u32) -> f64 {
    elapsed.as_secs_f64() * 1_000_000.0 / f64::from(iterations.max(1))
}

/// Runs every pass with `iterations` repetitions.
#[instrument]
pub fn run(iterations: u32) -> Result<BenchReport, EngineError> {
    let size = BoardSize::new(3)?;

    let construct = measure(|| {
        for _ in 0..iterations {
            black_box(Engine::with_size(black_box(size)));
        }
    });

    let mut engine = Engine::with_size(size);
    let moves = measure(|| {
        for i in 0..i64::from(iterations) {
            black_box(engine.make_move(i % 3, (i / 3) % 3));
            if i % 9 == 8 {
                engine.reset();
            }
        }
    });

    let large_boards = LARGE_BOARD_SIZES
        .iter()
        .map(|&n| -> Result<LargeBoardTiming, EngineError> {
            let mut engine = Engine::new(n)?;
            let cells = engine.board_size().cells();
            let count = LARGE_BOARD_MOVES.min(cells);
            let elapsed = measure(|| {
                for i in 0..count as i64 {
                    black_box(engine.make_move(i % n, (i / n) % n));
                }
            });
            Ok(LargeBoardTiming {
                board_size: n as usize,
                moves: count,
                total_ms: elapsed.as_secs_f64() * 1_000.0,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    let reset = measure(|| {
        for _ in 0..iterations {
            engine.reset();
            black_box(&engine);
        }
    });

    let report = BenchReport {
        iterations,
        construct_us: per_iteration_us(construct, iterations),
        move_us: per_iteration_us(moves, iterations),
        reset_us: per_iteration_us(reset, iterations),
        large_boards,
    };
    info!(?report, "Benchmark finished");
    Ok(report)
}

impl std::fmt::Display for BenchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Engine benchmark ({} iterations)", self.iterations)?;
        writeln!(f, "  construction: {:.3} µs", self.construct_us)?;
        writeln!(f, "  move (3×3):   {:.3} µs", self.move_us)?;
        writeln!(f, "  reset:        {:.3} µs", self.reset_us)?;
        for timing in &self.large_boards {
            writeln!(
                f,
                "  {n}×{n} board ({} moves): {:.3} ms",
                timing.moves,
                timing.total_ms,
                n = timing.board_size
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_pass() {
        let report = run(18).unwrap();
        assert_eq!(report.iterations, 18);
        assert_eq!(report.large_boards.len(), LARGE_BOARD_SIZES.len());
        assert_eq!(report.large_boards[0].moves, 25);
        assert_eq!(report.large_boards[1].moves, 50);
        assert!(report.to_string().contains("8×8 board (50 moves)"));
    }

    #[test]
    fn test_zero_iterations_is_safe() {
        let report = run(0).unwrap();
        assert_eq!(report.iterations, 0);
        assert!(report.construct_us.is_finite());
        assert!(report.reset_us.is_finite());
    }
}
