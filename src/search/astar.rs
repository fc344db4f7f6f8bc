#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A* best-first solver over a priority frontier.
//!
//! Each frontier entry is an owned board snapshot together with its path
//! cost `g` (digits placed since the initial state) and priority
//! `f = g + fill_score`. Expansion picks the most-constrained empty cell
//! and pushes one successor per legal digit with `g + 1` and a recomputed
//! `f`. Success is a dequeued state with no empty cell; an exhausted
//! frontier is failure, with the caller's board left untouched.
//!
//! Because the fill score grows monotonically with every placement this is
//! not an admissible heuristic, and the dequeue policy matters far more
//! than in textbook A*; see [`AstarOrdering`].

use crate::search::board::Board;
use crate::search::heuristics::{candidates, cost, most_constrained_cell};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Display;

/// Dequeue policy for the A* frontier.
///
/// The system this crate reproduces pushed `(f, g, state)` tuples into a
/// max-priority queue, so the *highest* cost was expanded first. Under the
/// monotone fill-score heuristic that policy expands the deepest state
/// first and behaves like best-fill-first search; it is kept as the
/// default. `LowestCostFirst` is the textbook ordering, but with this
/// heuristic `f` is dominated by depth and the search degenerates toward
/// level-order expansion -- expect BFS-like memory on anything but nearly
/// complete boards. The choice is deliberately explicit rather than
/// silently "fixed".
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum AstarOrdering {
    /// Expand the frontier state with the highest `f` first (as built).
    #[default]
    HighestCostFirst,
    /// Expand the frontier state with the lowest `f` first (textbook A*).
    LowestCostFirst,
}

impl Display for AstarOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighestCostFirst => write!(f, "highest-cost-first"),
            Self::LowestCostFirst => write!(f, "lowest-cost-first"),
        }
    }
}

/// One frontier entry: priority key, path cost, and an owned snapshot.
///
/// `key` is `f` negated under [`AstarOrdering::LowestCostFirst`] so that
/// the std max-heap always pops the entry the policy wants next. Ties on
/// `key` fall through to `g`, matching the lexicographic tuple ordering of
/// the original queue.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: i64,
    g: u32,
    state: Board,
}

impl Entry {
    fn new(policy: AstarOrdering, state: Board, g: u32) -> Self {
        let f = i64::from(cost(&state, g));
        let key = match policy {
            AstarOrdering::HighestCostFirst => f,
            AstarOrdering::LowestCostFirst => -f,
        };
        Self { key, g, state }
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Solves `board` with the default dequeue policy.
pub fn solve(board: &mut Board) -> bool {
    solve_with(board, AstarOrdering::default())
}

/// Solves `board` via A* search under the given dequeue policy.
///
/// On success the solved snapshot is copied into `board` and `true` is
/// returned; on failure the input board is never mutated.
pub fn solve_with(board: &mut Board, policy: AstarOrdering) -> bool {
    let mut frontier = BinaryHeap::new();
    frontier.push(Entry::new(policy, *board, 0));

    while let Some(Entry { g, state, .. }) = frontier.pop() {
        let Some((row, col)) = most_constrained_cell(&state) else {
            *board = state;
            return true;
        };

        for digit in candidates(&state, row, col) {
            let mut next = state;
            next.set(row, col, digit);
            frontier.push(Entry::new(policy, next, g + 1));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board::{EXAMPLE_NINE, EXAMPLE_NINE_SOLVED, SIZE};

    #[test]
    fn solves_the_example_puzzle() {
        let mut board = Board::from(EXAMPLE_NINE);
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
    fn lowest_cost_first_solves_a_nearly_complete_board() {
        let mut board = Board::from(EXAMPLE_NINE_SOLVED);
        for col in 0..SIZE {
            board.set(6, col, 0);
        }

        assert!(solve_with(&mut board, AstarOrdering::LowestCostFirst));
        assert_eq!(board, Board::from(EXAMPLE_NINE_SOLVED));
    }

    #[test]
    fn leaves_the_input_untouched_on_failure() {
        let mut board = Board::from(EXAMPLE_NINE_SOLVED);
        board.set(0, 0, 0);
        board.set(0, 1, 0);
        board.set(8, 0, 5);

        let snapshot = board;
        assert!(!solve(&mut board));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn highest_cost_entries_win_under_the_default_policy() {
        let deep = Entry::new(AstarOrdering::HighestCostFirst, Board::from(EXAMPLE_NINE), 4);
        let shallow = Entry::new(AstarOrdering::HighestCostFirst, Board::from(EXAMPLE_NINE), 2);
        assert!(deep > shallow);

        let deep = Entry::new(AstarOrdering::LowestCostFirst, Board::from(EXAMPLE_NINE), 4);
        let shallow = Entry::new(AstarOrdering::LowestCostFirst, Board::from(EXAMPLE_NINE), 2);
        assert!(deep < shallow);
    }
}
