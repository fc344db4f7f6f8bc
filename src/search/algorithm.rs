#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Uniform dispatch over the four search strategies.

use crate::search::astar::AstarOrdering;
use crate::search::board::Board;
use crate::search::{astar, bfs, dfs, greedy};
use clap::ValueEnum;
use std::fmt::Display;

/// The four benchmarked search strategies.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum Algorithm {
    /// Exhaustive depth-first backtracking, first empty cell, in place.
    #[default]
    Dfs,
    /// Breadth-first frontier expansion over full board snapshots.
    Bfs,
    /// Backtracking over the most-constrained cell first.
    Greedy,
    /// Best-first search keyed by the fill-score cost function.
    Astar,
}

/// All algorithms in benchmark order.
pub const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Dfs,
    Algorithm::Bfs,
    Algorithm::Greedy,
    Algorithm::Astar,
];

impl Algorithm {
    /// Runs this strategy against `board`.
    ///
    /// Returns `true` on success with the solution written into `board`.
    /// On failure the in-place strategies (DFS, greedy) have restored the
    /// board and the frontier strategies (BFS, A*) never mutated it.
    pub fn solve(self, board: &mut Board, ordering: AstarOrdering) -> bool {
        match self {
            Self::Dfs => dfs::solve(board),
            Self::Bfs => bfs::solve(board),
            Self::Greedy => greedy::solve(board),
            Self::Astar => astar::solve_with(board, ordering),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dfs => write!(f, "DFS"),
            Self::Bfs => write!(f, "BFS"),
            Self::Greedy => write!(f, "Greedy"),
            Self::Astar => write!(f, "A*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board::{EXAMPLE_NINE_SOLVED, SIZE};

    /// A valid board with a single empty cell has exactly one completion;
    /// every strategy must find that digit and report success.
    #[test]
    fn all_algorithms_agree_on_a_one_cell_puzzle() {
        let removed = Board::from(EXAMPLE_NINE_SOLVED).get(4, 4);

        for algorithm in ALGORITHMS {
            let mut board = Board::from(EXAMPLE_NINE_SOLVED);
            board.set(4, 4, 0);

            assert!(
                algorithm.solve(&mut board, AstarOrdering::default()),
                "{algorithm} failed"
            );
            assert_eq!(board.get(4, 4), removed, "{algorithm} placed the wrong digit");
            assert!(board.is_solved(), "{algorithm} left an invalid board");
        }
    }

    #[test]
    fn all_algorithms_solve_a_row_of_blanks() {
        for algorithm in ALGORITHMS {
            let mut board = Board::from(EXAMPLE_NINE_SOLVED);
            for col in 0..SIZE {
                board.set(2, col, 0);
            }

            assert!(algorithm.solve(&mut board, AstarOrdering::default()));
            assert_eq!(board, Board::from(EXAMPLE_NINE_SOLVED), "{algorithm} diverged");
        }
    }

    #[test]
    fn solved_boards_pass_through_every_algorithm_unchanged() {
        for algorithm in ALGORITHMS {
            let mut board = Board::from(EXAMPLE_NINE_SOLVED);
            assert!(algorithm.solve(&mut board, AstarOrdering::default()));
            assert_eq!(board, Board::from(EXAMPLE_NINE_SOLVED));
        }
    }
}
