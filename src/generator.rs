#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Puzzle generation: full-board construction and minimal-clue extraction.
//!
//! Generation runs in two phases. First a fully solved board is built by
//! seeding the three diagonal 3x3 boxes with independently shuffled
//! permutations of `1..=9` (they share no row or column, so they can never
//! conflict) and completing the rest with the DFS backtracking solver.
//! Then clues are removed one random cell at a time, re-running the solver
//! on a copy after each tentative clearing to certify the puzzle is still
//! solvable, until the requested number of empty cells is reached.
//!
//! The default removal loop certifies only that *a* solution exists; the
//! opt-in uniqueness mode additionally counts solutions (capped at two) and
//! rolls back any clearing that lets a second solution in.
//!
//! All randomness flows through an [`fastrand::Rng`] owned by the
//! [`Generator`], so [`Generator::with_seed`] makes every produced board
//! reproducible. There is no process-global random state.

use crate::search::board::{BOX_SIZE, Board, CELLS, SIZE};
use crate::search::dfs;

/// Empty-cell range used by the batch generator, matching the historical
/// test corpus (easy to mid-hard puzzles).
pub const DEFAULT_EMPTY_RANGE: std::ops::RangeInclusive<usize> = 15..=45;

/// A seedable Sudoku puzzle generator.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: fastrand::Rng,
    unique: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            unique: false,
        }
    }

    /// Creates a fully deterministic generator from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            unique: false,
        }
    }

    /// Requires produced puzzles to have exactly one solution.
    ///
    /// Each tentative clearing then also counts solutions up to two and is
    /// rolled back when a second one appears. Removal may stop short of the
    /// requested empty count once no cell can be cleared without losing
    /// uniqueness.
    #[must_use]
    pub const fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Builds one fully solved, valid board.
    #[must_use]
    pub fn full_board(&mut self) -> Board {
        let mut board = Board::empty();
        let mut digits: [u8; SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

        // The diagonal boxes are independent, so a shuffled permutation can
        // be written into each without any legality checks.
        for anchor in (0..SIZE).step_by(BOX_SIZE) {
            self.rng.shuffle(&mut digits);
            for r in 0..BOX_SIZE {
                for c in 0..BOX_SIZE {
                    board.set(anchor + r, anchor + c, digits[r * BOX_SIZE + c]);
                }
            }
        }

        // A diagonally seeded board always completes.
        let solved = dfs::solve(&mut board);
        debug_assert!(solved, "diagonal seeding must stay completable");
        board
    }

    /// Generates a puzzle with `empty_cells` blank cells.
    ///
    /// In uniqueness mode the result may have fewer blanks than requested;
    /// the existence-only mode always reaches the target (clearing a cell
    /// can never remove an existing solution).
    #[must_use]
    pub fn puzzle(&mut self, empty_cells: usize) -> Board {
        let mut board = self.full_board();
        self.remove_clues(&mut board, empty_cells.min(CELLS));
        board
    }

    /// Clears up to `target` cells from a solved board, keeping it solvable
    /// (and uniquely so in uniqueness mode).
    fn remove_clues(&mut self, board: &mut Board, target: usize) {
        let mut remaining = target.saturating_sub(board.count_empty());
        // In uniqueness mode a clearing can be permanently rejected; budget
        // the retries so generation always terminates.
        let mut attempts = CELLS * CELLS;

        while remaining > 0 && attempts > 0 {
            attempts -= 1;
            let row = self.rng.usize(0..SIZE);
            let col = self.rng.usize(0..SIZE);
            let backup = board.get(row, col);
            if backup == 0 {
                continue;
            }

            board.set(row, col, 0);
            if self.still_acceptable(board) {
                remaining -= 1;
            } else {
                board.set(row, col, backup);
            }
        }
    }

    /// Re-certifies a board after a tentative clearing, on a copy.
    fn still_acceptable(&self, board: &Board) -> bool {
        let mut probe = *board;
        if self.unique {
            dfs::count_solutions(&mut probe, 2) == 1
        } else {
            dfs::solve(&mut probe)
        }
    }

    /// Draws an empty-cell count uniformly from `range`.
    pub fn empty_count_in(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.rng.usize(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_board_is_a_valid_solution() {
        let board = Generator::with_seed(7).full_board();
        assert!(board.is_solved());
    }

    #[test]
    fn puzzle_has_the_requested_number_of_blanks() {
        for &empties in &[15, 30, 45] {
            let board = Generator::with_seed(42).puzzle(empties);
            assert_eq!(board.count_empty(), empties);
        }
    }

    #[test]
    fn puzzle_remains_solvable_after_removal() {
        for seed in 0..4 {
            let mut board = Generator::with_seed(seed).puzzle(45);
            assert!(dfs::solve(&mut board), "seed {seed} produced a dead puzzle");
            assert!(board.is_solved());
        }
    }

    #[test]
    fn cleared_cells_never_violate_the_constraint_predicate() {
        let board = Generator::with_seed(3).puzzle(40);
        for (row, col, digit) in board.cells() {
            if digit != 0 {
                let mut probe = board;
                probe.set(row, col, 0);
                assert!(probe.is_safe(row, col, digit));
            }
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let first = Generator::with_seed(1234).puzzle(30);
        let second = Generator::with_seed(1234).puzzle(30);
        assert_eq!(first, second);
    }

    #[test]
    fn unique_mode_produces_single_solution_puzzles() {
        let mut board = Generator::with_seed(5).unique(true).puzzle(45);
        assert_eq!(dfs::count_solutions(&mut board, 2), 1);
    }

    #[test]
    fn round_trip_preserves_every_cell() {
        let dir = std::env::temp_dir().join("sudoku-bench-roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("puzzle.txt");

        let board = Generator::with_seed(99).puzzle(27);
        board.write_file(&path).unwrap();
        let read = Board::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(read, board);
        assert_eq!(read.count_empty(), 27);
    }

    #[test]
    fn empty_count_in_respects_the_range() {
        let mut generator = Generator::with_seed(0);
        for _ in 0..100 {
            let n = generator.empty_count_in(DEFAULT_EMPTY_RANGE);
            assert!(DEFAULT_EMPTY_RANGE.contains(&n));
        }
    }
}
