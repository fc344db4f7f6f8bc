#![deny(missing_docs)]
//! Sudoku solving, generation, and search-strategy benchmarking.
//!
//! This crate solves 9x9 Sudoku puzzles with four distinct search
//! strategies -- exhaustive depth-first backtracking, breadth-first
//! frontier expansion, greedy most-constrained-cell backtracking, and A*
//! best-first search -- and measures them against each other by execution
//! time and allocated memory. It also generates puzzles: a fully solved
//! board is built from randomized diagonal seeding plus backtracking, then
//! clues are removed while the solver re-certifies solvability.

/// The `generator` module builds fully solved boards and extracts puzzles
/// from them by removing clues while keeping the board solvable.
pub mod generator;

/// The `harness` module runs benchmark trials, probes time and allocated
/// memory per solver run, and aggregates and serializes the results.
pub mod harness;

/// The `search` module implements the board, the constraint predicate, the
/// shared heuristics, and the four solving strategies.
pub mod search;
