#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Exhaustive depth-first backtracking solver.
//!
//! The baseline strategy: scan row-major for the first empty cell, try the
//! digits `1..=9` in ascending order, recurse, and reset the cell to `0`
//! when a branch dead-ends. The board is mutated in place; auxiliary memory
//! is the call stack alone, whose depth is bounded by the 81 cells.
//!
//! Given a board this walk is fully deterministic, which also makes it the
//! solver the generator re-runs when certifying that a puzzle still has a
//! solution after a clue has been removed.

use crate::search::board::{Board, SIZE};

/// Solves `board` in place.
///
/// Returns `true` and leaves a fully solved board on success. Returns
/// `false` when the partial assignment admits no completion; every cell
/// touched during the search has then been reset, so the board is restored
/// to its input configuration.
pub fn solve(board: &mut Board) -> bool {
    let Some((row, col)) = board.first_empty() else {
        return true;
    };

    for digit in 1..=SIZE as u8 {
        if board.is_safe(row, col, digit) {
            board.set(row, col, digit);
            if solve(board) {
                return true;
            }
            board.set(row, col, 0);
        }
    }

    false
}

/// Counts complete solutions of `board`, stopping early once `limit` is
/// reached.
///
/// The board is restored to its input configuration before returning. The
/// generator's uniqueness mode calls this with a limit of 2: one solution
/// means the puzzle is proper, two mean a removal went too far.
pub fn count_solutions(board: &mut Board, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }

    let Some((row, col)) = board.first_empty() else {
        return 1;
    };

    let mut found = 0;
    for digit in 1..=SIZE as u8 {
        if board.is_safe(row, col, digit) {
            board.set(row, col, digit);
            found += count_solutions(board, limit - found);
            board.set(row, col, 0);
            if found >= limit {
                break;
            }
        }
    }

    found
}
