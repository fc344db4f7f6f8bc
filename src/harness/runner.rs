#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Trial execution: timing, memory probing, and outcome classification.
//!
//! A *trial* is one input puzzle run through every benchmarked algorithm.
//! Each run clones the input board (no shared mutable state crosses
//! algorithm invocations), times the solve with [`std::time::Instant`],
//! and then samples the allocator's live byte count through
//! `tikv-jemalloc-ctl`, the same probe sequence the binary uses for its
//! statistics table: advance the jemalloc epoch, then read
//! `stats::allocated`.
//!
//! Solver results are classified three ways rather than two: a solver that
//! claims success on a board failing the independent row/column/box check
//! is a correctness fault ([`Outcome::Corrupt`]) and is never folded into a
//! clean success.

use crate::search::astar::AstarOrdering;
use crate::search::board::Board;
use crate::search::{ALGORITHMS, Algorithm};
use std::path::Path;
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};
use walkdir::WalkDir;

/// Classification of a single solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The solver succeeded and the board passed verification.
    Solved,
    /// The solver claimed success but verification failed. A correctness
    /// fault, recorded distinctly from a clean success.
    Corrupt,
    /// The solver reported the puzzle unsolvable.
    Unsolved,
}

impl Outcome {
    /// Short status tag used in console output and the CSV report.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Solved => "OK",
            Self::Corrupt => "NOK",
            Self::Unsolved => "UNSOLVED",
        }
    }
}

/// One algorithm's result within a trial.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// The strategy that produced this measurement.
    pub algorithm: Algorithm,
    /// How the run ended.
    pub outcome: Outcome,
    /// Wall-clock solve time; `None` when the solver reported failure
    /// (the recorded non-result, not an error).
    pub duration: Option<Duration>,
    /// Allocator live bytes after the run, in KiB.
    pub allocated_kib: f64,
    /// The board the solver left behind, for optional printing.
    pub board: Board,
}

/// One puzzle run through all four algorithms.
#[derive(Debug, Clone)]
pub struct Trial {
    /// Label for reports, usually the puzzle file stem or an index.
    pub label: String,
    /// One measurement per algorithm, in [`ALGORITHMS`] order.
    pub measurements: Vec<Measurement>,
}

/// Samples the allocator's live byte count, in KiB.
///
/// Advancing the epoch flushes jemalloc's cached statistics so the read
/// reflects the just-finished solve.
#[must_use]
pub fn allocated_kib() -> f64 {
    epoch::advance().unwrap();
    #[allow(clippy::cast_precision_loss)]
    let bytes = stats::allocated::read().unwrap() as f64;
    bytes / 1024.0
}

/// Runs one algorithm against a copy of `puzzle` and records the result.
#[must_use]
pub fn measure(algorithm: Algorithm, puzzle: &Board, ordering: AstarOrdering) -> Measurement {
    let mut board = *puzzle;

    let start = Instant::now();
    let solved = algorithm.solve(&mut board, ordering);
    let elapsed = start.elapsed();

    let allocated = allocated_kib();

    let (outcome, duration) = if solved {
        if board.is_solved() {
            (Outcome::Solved, Some(elapsed))
        } else {
            (Outcome::Corrupt, Some(elapsed))
        }
    } else {
        (Outcome::Unsolved, None)
    };

    Measurement {
        algorithm,
        outcome,
        duration,
        allocated_kib: allocated,
        board,
    }
}

/// Runs every algorithm in `algorithms` against `puzzle`.
#[must_use]
pub fn run_trial(
    label: impl Into<String>,
    puzzle: &Board,
    algorithms: &[Algorithm],
    ordering: AstarOrdering,
) -> Trial {
    Trial {
        label: label.into(),
        measurements: algorithms
            .iter()
            .map(|&algorithm| measure(algorithm, puzzle, ordering))
            .collect(),
    }
}

/// Runs the full benchmark order against `puzzle`.
#[must_use]
pub fn run_full_trial(label: impl Into<String>, puzzle: &Board, ordering: AstarOrdering) -> Trial {
    run_trial(label, puzzle, &ALGORITHMS, ordering)
}

/// Collects every puzzle file under `dir`, sorted by path.
///
/// An unreadable or malformed file is a non-fatal condition: a diagnostic
/// goes to stderr and an all-zero board is substituted so the batch keeps
/// its shape.
#[must_use]
pub fn collect_puzzles(dir: &Path) -> Vec<(String, Board)> {
    let mut entries: Vec<_> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();

    entries
        .into_iter()
        .map(|path| {
            let label = path
                .file_stem()
                .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
            let board = Board::from_file(&path).unwrap_or_else(|e| {
                eprintln!("warning: {}: {e}; substituting an empty board", path.display());
                Board::empty()
            });
            (label, board)
        })
        .collect()
}
