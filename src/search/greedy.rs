#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Greedy most-constrained-cell backtracking solver.
//!
//! The control structure is identical to the DFS solver -- in-place
//! mutation, recursion, reset-to-zero on a dead branch -- but the next cell
//! is chosen by [`most_constrained_cell`] instead of the row-major scan.
//! Attacking the cell with the fewest remaining candidates usually prunes
//! the tree much earlier; the search stays exhaustive, so it can still
//! backtrack arbitrarily and offers no admissibility guarantee.

use crate::search::board::Board;
use crate::search::heuristics::{candidates, most_constrained_cell};

/// Solves `board` in place, most-constrained cell first.
///
/// Same contract as [`crate::search::dfs::solve`]: `true` with a solved
/// board, or `false` with every touched cell reset to its input state.
pub fn solve(board: &mut Board) -> bool {
    let Some((row, col)) = most_constrained_cell(board) else {
        return true;
    };

    // A zero-candidate cell yields an empty list and fails the branch
    // immediately, which is what prunes contradictions early.
    for digit in candidates(board, row, col) {
        board.set(row, col, digit);
        if solve(board) {
            return true;
        }
        board.set(row, col, 0);
    }

    false
}
