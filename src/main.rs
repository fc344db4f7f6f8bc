//! # sudoku-bench
//!
//! `sudoku-bench` solves and generates 9x9 Sudoku puzzles and benchmarks
//! four search strategies against each other:
//!
//! 1. **DFS**: exhaustive depth-first backtracking over the first empty
//!    cell, mutating one board in place.
//! 2. **BFS**: breadth-first expansion of an explicit frontier of board
//!    snapshots -- the intentionally memory-heavy comparison point.
//! 3. **Greedy**: backtracking that always attacks the most-constrained
//!    cell (fewest remaining candidates) first.
//! 4. **A\***: best-first search over a priority frontier keyed by
//!    `f = g + fill_score`, with a configurable dequeue policy.
//!
//! Each solver run is timed with a monotonic clock and followed by a
//! jemalloc statistics read, so the final report carries both elapsed time
//! and allocated memory per algorithm, with per-algorithm means and
//! standard deviations.
//!
//! ## Usage
//!
//! ```sh
//! # Solve one puzzle file with every algorithm and print the stats table
//! sudoku-bench solve --path puzzle.txt
//!
//! # Solve with a single algorithm and print the solved board
//! sudoku-bench solve --path puzzle.txt --algorithm greedy --print-boards
//!
//! # Generate 100 puzzle files into ./testes (15..=45 empty cells each)
//! sudoku-bench generate --count 100 --out-dir testes --seed 7
//!
//! # Benchmark every puzzle under ./testes and write resultados.csv
//! sudoku-bench bench --dir testes --output resultados.csv
//!
//! # Per-trial timing output and board printing, like the historical -t/-i
//! sudoku-bench bench --dir testes --print-times --print-boards
//! ```
//!
//! A puzzle file is 81 whitespace-separated integers in `0..=9`, row-major,
//! `0` for an empty cell. An unreadable or malformed file inside a `bench`
//! batch is logged to stderr and replaced by an all-zero board rather than
//! aborting the batch.

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sudoku_bench::generator::{DEFAULT_EMPTY_RANGE, Generator};
use sudoku_bench::harness::runner::{self, Trial};
use sudoku_bench::harness::{Outcome, Report};
use sudoku_bench::search::{ALGORITHMS, Algorithm, AstarOrdering, Board};

/// Global allocator. Required for the `tikv-jemalloc-ctl` statistics the
/// harness reads after every solver run.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the benchmark application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-bench", version, about = "A Sudoku search-strategy benchmark")]
struct Cli {
    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a single puzzle file.
    Solve {
        /// Path to the puzzle file (81 whitespace-separated digits).
        #[arg(long)]
        path: PathBuf,

        /// Solve with one specific algorithm instead of all four.
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Run the benchmark over a directory of puzzle files.
    Bench {
        /// Directory containing puzzle files.
        #[arg(long, default_value = "testes")]
        dir: PathBuf,

        /// Cap the number of puzzle files used.
        #[arg(long)]
        trials: Option<usize>,

        /// Where to write the CSV report.
        #[arg(short, long, default_value = "resultados.csv")]
        output: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate puzzle files.
    Generate {
        /// How many puzzles to generate.
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Directory to write `<k>.txt` puzzle files into.
        #[arg(long, default_value = "testes")]
        out_dir: PathBuf,

        /// Fixed number of empty cells per puzzle; drawn uniformly from
        /// 15..=45 when omitted.
        #[arg(short, long)]
        empty: Option<usize>,

        /// Seed for deterministic generation; entropy-seeded when omitted.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Only emit puzzles with exactly one solution.
        #[arg(short, long, default_value_t = false)]
        unique: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Print each board before and after solving.
    #[arg(short = 'i', long, default_value_t = false)]
    print_boards: bool,

    /// Print per-run timing as trials execute.
    #[arg(short = 't', long, default_value_t = false)]
    print_times: bool,

    /// Dequeue policy for the A* frontier.
    #[arg(long, default_value_t = AstarOrdering::HighestCostFirst)]
    astar_ordering: AstarOrdering,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            path,
            algorithm,
            common,
        } => solve_command(&path, algorithm, &common),
        Commands::Bench {
            dir,
            trials,
            output,
            common,
        } => bench_command(&dir, trials, &output, &common),
        Commands::Generate {
            count,
            out_dir,
            empty,
            seed,
            unique,
        } => generate_command(count, &out_dir, empty, seed, unique),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}

/// Solves one puzzle file with one or all algorithms.
fn solve_command(path: &Path, algorithm: Option<Algorithm>, common: &CommonOptions) -> ExitCode {
    let puzzle = match Board::from_file(path) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("error: {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    println!("Solving: {}", path.display());
    if common.print_boards {
        println!("{puzzle}");
    }

    let algorithms: Vec<Algorithm> = algorithm.map_or_else(|| ALGORITHMS.to_vec(), |a| vec![a]);
    let trial = runner::run_trial(
        path.display().to_string(),
        &puzzle,
        &algorithms,
        common.astar_ordering,
    );

    let mut failed = false;
    for m in &trial.measurements {
        match m.duration {
            Some(duration) => println!(
                "{}:\t{} microseconds\tResult: {}",
                m.algorithm,
                duration.as_micros(),
                m.outcome.tag()
            ),
            None => {
                println!("{}:\tno solution", m.algorithm);
                failed = true;
            }
        }
        failed |= m.outcome == Outcome::Corrupt;
        if common.print_boards && m.outcome == Outcome::Solved {
            println!("{}", m.board);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs the benchmark batch and writes the CSV report.
fn bench_command(
    dir: &Path,
    trials: Option<usize>,
    output: &Path,
    common: &CommonOptions,
) -> ExitCode {
    let mut puzzles = runner::collect_puzzles(dir);
    if let Some(cap) = trials {
        puzzles.truncate(cap);
    }
    if puzzles.is_empty() {
        eprintln!("error: no puzzle files found under {}", dir.display());
        return ExitCode::FAILURE;
    }

    let mut executed = Vec::with_capacity(puzzles.len());
    for (label, puzzle) in puzzles {
        if common.print_boards || common.print_times {
            println!("=========================");
            println!("\tTrial {label}");
            println!("=========================");
        }
        if common.print_boards {
            println!("{puzzle}");
        }

        let trial = runner::run_full_trial(label, &puzzle, common.astar_ordering);
        if common.print_times {
            print_trial_times(&trial);
        }
        executed.push(trial);
    }

    let report = Report::new(executed);
    print_report(&report);

    if let Err(e) = report.write_csv(output) {
        eprintln!("error: failed to write {}: {e}", output.display());
        return ExitCode::FAILURE;
    }
    println!("Results saved to {}", output.display());

    if report.corrupt_count() > 0 {
        eprintln!("error: correctness faults detected, see the report");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Generates `count` puzzle files named `<k>.txt` under `out_dir`.
fn generate_command(
    count: usize,
    out_dir: &Path,
    empty: Option<usize>,
    seed: Option<u64>,
    unique: bool,
) -> ExitCode {
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        eprintln!("error: failed to create {}: {e}", out_dir.display());
        return ExitCode::FAILURE;
    }

    let mut generator = seed
        .map_or_else(Generator::new, Generator::with_seed)
        .unique(unique);

    for k in 1..=count {
        let empties = empty.unwrap_or_else(|| generator.empty_count_in(DEFAULT_EMPTY_RANGE));
        let board = generator.puzzle(empties);
        let path = out_dir.join(format!("{k}.txt"));

        if let Err(e) = board.write_file(&path) {
            eprintln!("error: failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        println!(
            "Puzzle {k}: {} empty cells -> {}",
            board.count_empty(),
            path.display()
        );
    }

    ExitCode::SUCCESS
}

/// Prints one trial's per-algorithm timing lines, `-t` style.
fn print_trial_times(trial: &Trial) {
    for m in &trial.measurements {
        match m.duration {
            Some(duration) => println!(
                "{}:\t{} microseconds\tResult: {}",
                m.algorithm,
                duration.as_micros(),
                m.outcome.tag()
            ),
            None => println!("{}:\tno solution", m.algorithm),
        }
    }
}

/// Prints the aggregate statistics table for a finished benchmark run.
fn print_report(report: &Report) {
    println!("\n====================[ Benchmark Statistics ]====================");
    stat_line("Trials", report.trials.len());
    for algorithm in ALGORITHMS {
        let time = report.time_summary(algorithm);
        let memory = report.memory_summary(algorithm);

        println!("----------------------------------------------------------------");
        stat_line("Algorithm", algorithm);
        stat_line("Solved trials", time.count);
        stat_line("Mean time (us)", format!("{:.2}", time.mean));
        stat_line("Std dev time (us)", format!("{:.2}", time.std_dev));
        stat_line("Mean memory (KiB)", format!("{:.2}", memory.mean));
        stat_line("Std dev memory (KiB)", format!("{:.2}", memory.std_dev));
    }
    println!("================================================================");

    let faults = report.corrupt_count();
    if faults > 0 {
        println!("\nCORRECTNESS FAULTS: {faults}");
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {:<28} {:>28}  |", label, value.to_string());
}
