#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Aggregate statistics and the CSV benchmark report.
//!
//! The report mirrors the historical `resultados.csv` layout: one row per
//! trial carrying the time (microseconds) and allocated memory (KiB) of
//! every algorithm, followed by aggregate rows with the per-algorithm mean
//! and population standard deviation. An unsolved run leaves its time cell
//! empty and is excluded from the time aggregates; memory samples are
//! always present and always aggregated.

use crate::harness::runner::{Outcome, Trial};
use crate::search::{ALGORITHMS, Algorithm};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Mean and population standard deviation of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Arithmetic mean, `0.0` for an empty sample set.
    pub mean: f64,
    /// Population standard deviation (`sqrt(sum((x - mean)^2) / n)`).
    pub std_dev: f64,
    /// Number of samples aggregated.
    pub count: usize,
}

impl Summary {
    /// Summarizes `values`.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
            count: values.len(),
        }
    }
}

/// The collected results of a benchmark run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// All executed trials, in execution order.
    pub trials: Vec<Trial>,
}

impl Report {
    /// Creates a report over `trials`.
    #[must_use]
    pub const fn new(trials: Vec<Trial>) -> Self {
        Self { trials }
    }

    /// Per-algorithm solve times in microseconds, solved and corrupt runs
    /// only (a corrupt run still has a real duration; its fault is visible
    /// in the outcome column, not hidden from the timing data).
    #[must_use]
    pub fn times_us(&self) -> FxHashMap<Algorithm, Vec<f64>> {
        let mut out: FxHashMap<Algorithm, Vec<f64>> = FxHashMap::default();
        for trial in &self.trials {
            for m in &trial.measurements {
                if let Some(duration) = m.duration {
                    #[allow(clippy::cast_precision_loss)]
                    out.entry(m.algorithm)
                        .or_default()
                        .push(duration.as_micros() as f64);
                }
            }
        }
        out
    }

    /// Per-algorithm allocated-memory samples in KiB, all runs.
    #[must_use]
    pub fn memory_kib(&self) -> FxHashMap<Algorithm, Vec<f64>> {
        let mut out: FxHashMap<Algorithm, Vec<f64>> = FxHashMap::default();
        for trial in &self.trials {
            for m in &trial.measurements {
                out.entry(m.algorithm).or_default().push(m.allocated_kib);
            }
        }
        out
    }

    /// Time summary for one algorithm.
    #[must_use]
    pub fn time_summary(&self, algorithm: Algorithm) -> Summary {
        Summary::of(self.times_us().get(&algorithm).map_or(&[], Vec::as_slice))
    }

    /// Memory summary for one algorithm.
    #[must_use]
    pub fn memory_summary(&self, algorithm: Algorithm) -> Summary {
        Summary::of(self.memory_kib().get(&algorithm).map_or(&[], Vec::as_slice))
    }

    /// Number of correctness faults (success claims failing verification)
    /// across all trials.
    #[must_use]
    pub fn corrupt_count(&self) -> usize {
        self.trials
            .iter()
            .flat_map(|t| &t.measurements)
            .filter(|m| m.outcome == Outcome::Corrupt)
            .count()
    }

    /// Renders the report as CSV.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        let time_heads = ALGORITHMS.iter().map(|a| format!("{a} Time(us)")).join(",");
        let mem_heads = ALGORITHMS.iter().map(|a| format!("{a} Memory(KiB)")).join(",");
        let result_heads = ALGORITHMS.iter().map(|a| format!("{a} Result")).join(",");
        out.push_str(&format!("Trial,{time_heads},{mem_heads},{result_heads}\n"));

        for trial in &self.trials {
            let by_algorithm: FxHashMap<_, _> = trial
                .measurements
                .iter()
                .map(|m| (m.algorithm, m))
                .collect();

            let times = ALGORITHMS
                .iter()
                .map(|a| {
                    by_algorithm
                        .get(a)
                        .and_then(|m| m.duration)
                        .map_or_else(String::new, |d| d.as_micros().to_string())
                })
                .join(",");
            let memory = ALGORITHMS
                .iter()
                .map(|a| {
                    by_algorithm
                        .get(a)
                        .map_or_else(String::new, |m| format!("{:.2}", m.allocated_kib))
                })
                .join(",");
            let results = ALGORITHMS
                .iter()
                .map(|a| by_algorithm.get(a).map_or("", |m| m.outcome.tag()))
                .join(",");

            out.push_str(&format!("{},{times},{memory},{results}\n", trial.label));
        }

        let time_summaries = self.summaries(Self::time_summary);
        let memory_summaries = self.summaries(Self::memory_summary);
        push_aggregate_row(&mut out, "Mean Time(us)", time_summaries.iter().map(|s| s.mean));
        push_aggregate_row(
            &mut out,
            "Std Dev Time(us)",
            time_summaries.iter().map(|s| s.std_dev),
        );
        push_aggregate_row(
            &mut out,
            "Mean Memory(KiB)",
            memory_summaries.iter().map(|s| s.mean),
        );
        push_aggregate_row(
            &mut out,
            "Std Dev Memory(KiB)",
            memory_summaries.iter().map(|s| s.std_dev),
        );

        out
    }

    /// Writes the CSV report to `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be written.
    pub fn write_csv(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_csv())
    }

    fn summaries(&self, f: impl Fn(&Self, Algorithm) -> Summary) -> Vec<Summary> {
        ALGORITHMS.iter().map(|&a| f(self, a)).collect()
    }
}

/// Appends one aggregate CSV row with a value per algorithm.
fn push_aggregate_row(out: &mut String, name: &str, values: impl Iterator<Item = f64>) {
    let cells = values.map(|v| format!("{v:.2}")).join(",");
    out.push_str(&format!("{name},{cells}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::runner::Measurement;
    use crate::search::Board;
    use std::time::Duration;

    fn measurement(
        algorithm: Algorithm,
        outcome: Outcome,
        micros: Option<u64>,
        kib: f64,
    ) -> Measurement {
        Measurement {
            algorithm,
            outcome,
            duration: micros.map(Duration::from_micros),
            allocated_kib: kib,
            board: Board::empty(),
        }
    }

    fn sample_report() -> Report {
        let trial = |label: &str, dfs_us: Option<u64>| Trial {
            label: label.to_string(),
            measurements: vec![
                measurement(
                    Algorithm::Dfs,
                    if dfs_us.is_some() { Outcome::Solved } else { Outcome::Unsolved },
                    dfs_us,
                    100.0,
                ),
                measurement(Algorithm::Bfs, Outcome::Solved, Some(40), 300.0),
                measurement(Algorithm::Greedy, Outcome::Solved, Some(10), 100.0),
                measurement(Algorithm::Astar, Outcome::Corrupt, Some(20), 200.0),
            ],
        };
        Report::new(vec![trial("1", Some(30)), trial("2", None)])
    }

    #[test]
    fn summary_of_known_values() {
        let summary = Summary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((summary.mean - 5.0).abs() < 1e-9);
        assert!((summary.std_dev - 2.0).abs() < 1e-9);
        assert_eq!(summary.count, 8);
    }

    #[test]
    fn summary_of_empty_sample_is_zero() {
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn unsolved_runs_are_excluded_from_time_aggregates_only() {
        let report = sample_report();

        let dfs_time = report.time_summary(Algorithm::Dfs);
        assert_eq!(dfs_time.count, 1, "the unsolved trial has no duration");
        assert!((dfs_time.mean - 30.0).abs() < 1e-9);

        let dfs_memory = report.memory_summary(Algorithm::Dfs);
        assert_eq!(dfs_memory.count, 2, "memory is sampled on every run");
    }

    #[test]
    fn corrupt_runs_keep_their_duration_and_are_counted() {
        let report = sample_report();
        assert_eq!(report.corrupt_count(), 2);
        assert_eq!(report.time_summary(Algorithm::Astar).count, 2);
    }

    #[test]
    fn csv_has_one_row_per_trial_plus_aggregates() {
        let report = sample_report();
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        // header + 2 trials + 4 aggregate rows
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Trial,DFS Time(us)"));
        assert!(lines[1].starts_with("1,30,"));
        assert!(lines[1].ends_with("OK,OK,OK,NOK"));
        // the unsolved DFS run leaves its time cell empty
        assert!(lines[2].starts_with("2,,40,"));
        assert!(lines[3].starts_with("Mean Time(us),"));
        assert!(lines[6].starts_with("Std Dev Memory(KiB),"));
    }
}
