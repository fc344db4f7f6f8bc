#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Breadth-first frontier solver.
//!
//! Instead of backtracking in place, this solver keeps an explicit FIFO
//! queue of full board snapshots. Each dequeued state branches on its first
//! empty cell (the same row-major scan as the DFS solver) and enqueues one
//! owned copy per safe digit, so no two frontier states ever alias.
//!
//! Level-by-level expansion reaches the same solutions as DFS but trades
//! stack depth for queue memory that grows with the branching factor at
//! every level. That makes this the intentionally memory-heavy point of the
//! benchmark comparison.

use crate::search::board::{Board, SIZE};
use std::collections::VecDeque;

/// Solves `board` via breadth-first frontier expansion.
///
/// On success the solved snapshot is copied into `board` and `true` is
/// returned. On failure (empty frontier) the input board is left exactly as
/// given -- frontier states are copies, the original is never mutated.
pub fn solve(board: &mut Board) -> bool {
    let mut frontier = VecDeque::new();
    frontier.push_back(*board);

    while let Some(state) = frontier.pop_front() {
        let Some((row, col)) = state.first_empty() else {
            *board = state;
            return true;
        };

        for digit in 1..=SIZE as u8 {
            if state.is_safe(row, col, digit) {
                let mut next = state;
                next.set(row, col, digit);
                frontier.push_back(next);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board::{EXAMPLE_NINE_SOLVED, SIZE};

    #[test]
    fn solves_a_nearly_complete_board() {
        let mut board = Board::from(EXAMPLE_NINE_SOLVED);
        for col in 0..SIZE {
            board.set(4, col, 0);
        }

        assert!(solve(&mut board));
        assert_eq!(board, Board::from(EXAMPLE_NINE_SOLVED));
    }

    #[test]
    fn succeeds_immediately_on_a_solved_board() {
        let mut board = Board::from(EXAMPLE_NINE_SOLVED);
        assert!(solve(&mut board));
        assert_eq!(board, Board::from(EXAMPLE_NINE_SOLVED));
    }

    #[test]
    fn leaves_the_input_untouched_on_failure() {
        let mut board = Board::from(EXAMPLE_NINE_SOLVED);
        board.set(0, 0, 0);
        board.set(0, 1, 0);
        // Column 0 now blocks the 5, so both cleared cells need the 3 and
        // one of them is always left without a candidate.
        board.set(8, 0, 5);

        let snapshot = board;
        assert!(!solve(&mut board));
        assert_eq!(board, snapshot);
    }
}
