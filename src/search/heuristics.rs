#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Cell-selection and cost heuristics shared by the greedy and A* solvers.
//!
//! Two ideas live here:
//!
//! 1. **Most-constrained-cell selection** (minimum remaining values): pick
//!    the empty cell with the fewest legal candidate digits. A cell with
//!    zero candidates is a contradiction; it is not special-cased, the
//!    branch loop over its (empty) candidate set simply fails immediately.
//! 2. **The fill-score cost function** used by A*: the total count of
//!    already-filled cells summed over every row, every column, and every
//!    box, so each filled cell contributes three times. This score grows
//!    monotonically with fill and behaves as a best-fill-first measure, not
//!    an admissible distance-to-goal estimate. That is the intended,
//!    documented behavior, inherited from the system this crate benchmarks
//!    against -- see [`crate::search::astar::AstarOrdering`] for how the
//!    queue ordering interacts with it.

use crate::search::board::{BOX_SIZE, Board, SIZE};
use bit_vec::BitVec;
use smallvec::SmallVec;

/// The legal candidate digits for `(row, col)`, ascending.
///
/// Empty when the cell is already filled or when no digit fits. The set is
/// exactly the digits accepted by [`Board::is_safe`] at that cell.
#[must_use]
pub fn candidates(board: &Board, row: usize, col: usize) -> SmallVec<[u8; SIZE]> {
    let mut out = SmallVec::new();
    if board.get(row, col) != 0 {
        return out;
    }

    let mut excluded = BitVec::from_elem(SIZE + 1, false);
    for x in 0..SIZE {
        excluded.set(board.get(row, x) as usize, true);
        excluded.set(board.get(x, col) as usize, true);
    }

    let box_row = row - row % BOX_SIZE;
    let box_col = col - col % BOX_SIZE;
    for r in box_row..box_row + BOX_SIZE {
        for c in box_col..box_col + BOX_SIZE {
            excluded.set(board.get(r, c) as usize, true);
        }
    }

    for digit in 1..=SIZE as u8 {
        if !excluded[digit as usize] {
            out.push(digit);
        }
    }
    out
}

/// The number of legal candidate digits for `(row, col)`.
///
/// Returns `0` for an already-filled cell.
#[must_use]
pub fn candidate_count(board: &Board, row: usize, col: usize) -> usize {
    candidates(board, row, col).len()
}

/// Finds the empty cell with the fewest legal candidates.
///
/// Single top-to-bottom, left-to-right scan; only a strictly smaller count
/// displaces the current best, so the first occurrence wins ties. Returns
/// `None` when the board has no empty cell.
#[must_use]
pub fn most_constrained_cell(board: &Board) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut best_count = SIZE + 1;

    for row in 0..SIZE {
        for col in 0..SIZE {
            if board.get(row, col) == 0 {
                let count = candidate_count(board, row, col);
                if count < best_count {
                    best_count = count;
                    best = Some((row, col));
                }
            }
        }
    }

    best
}

/// The A* heuristic term: filled-cell counts summed over all rows, all
/// columns, and all boxes (each filled cell counted three times).
#[must_use]
pub fn fill_score(board: &Board) -> u32 {
    let mut score = 0u32;

    for i in 0..SIZE {
        for j in 0..SIZE {
            if board.get(i, j) != 0 {
                score += 1; // row pass
            }
            if board.get(j, i) != 0 {
                score += 1; // column pass
            }
        }
    }

    for box_row in (0..SIZE).step_by(BOX_SIZE) {
        for box_col in (0..SIZE).step_by(BOX_SIZE) {
            for r in box_row..box_row + BOX_SIZE {
                for c in box_col..box_col + BOX_SIZE {
                    if board.get(r, c) != 0 {
                        score += 1;
                    }
                }
            }
        }
    }

    score
}

/// The A* cost `f = g + h`, where `g` is the number of digits placed since
/// the initial state and `h` is [`fill_score`].
#[must_use]
pub fn cost(board: &Board, g: u32) -> u32 {
    g + fill_score(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board::EXAMPLE_NINE;

    #[test]
    fn candidates_exclude_row_col_and_box_digits() {
        let board = Board::from(EXAMPLE_NINE);
        // Cell (0, 2): row 0 holds {5, 3, 7}, column 2 holds {8}, its box
        // holds {5, 3, 6, 9, 8}. Legal digits are the complement.
        let cands = candidates(&board, 0, 2);
        assert_eq!(cands.as_slice(), &[1, 2, 4]);
        assert_eq!(candidate_count(&board, 0, 2), 3);
    }

    #[test]
    fn candidates_agree_with_is_safe() {
        let board = Board::from(EXAMPLE_NINE);
        for (row, col, digit) in board.cells() {
            if digit != 0 {
                continue;
            }
            let cands = candidates(&board, row, col);
            for d in 1..=9u8 {
                assert_eq!(
                    cands.contains(&d),
                    board.is_safe(row, col, d),
                    "disagreement at ({row}, {col}) digit {d}"
                );
            }
        }
    }

    #[test]
    fn filled_cells_have_no_candidates() {
        let board = Board::from(EXAMPLE_NINE);
        assert_eq!(candidate_count(&board, 0, 0), 0);
    }

    #[test]
    fn most_constrained_cell_prefers_fewest_candidates() {
        let mut board = Board::empty();
        // Pack row 8 so that (8, 8) has exactly one candidate while every
        // other empty cell has more.
        for col in 0..8 {
            board.set(8, col, col as u8 + 1);
        }

        assert_eq!(most_constrained_cell(&board), Some((8, 8)));
        assert_eq!(candidate_count(&board, 8, 8), 1);
    }

    #[test]
    fn most_constrained_cell_breaks_ties_by_scan_order() {
        // Empty board: every cell has nine candidates, so the first cell of
        // the scan must win.
        assert_eq!(most_constrained_cell(&Board::empty()), Some((0, 0)));
    }

    #[test]
    fn most_constrained_cell_is_none_on_full_boards() {
        use crate::search::board::EXAMPLE_NINE_SOLVED;
        assert_eq!(most_constrained_cell(&Board::from(EXAMPLE_NINE_SOLVED)), None);
    }

    #[test]
    fn fill_score_counts_each_cell_three_times() {
        assert_eq!(fill_score(&Board::empty()), 0);

        let mut board = Board::empty();
        board.set(4, 4, 7);
        assert_eq!(fill_score(&board), 3);

        let board = Board::from(EXAMPLE_NINE);
        assert_eq!(fill_score(&board), 3 * board.count_filled() as u32);
    }

    #[test]
    fn cost_adds_path_length_to_the_fill_score() {
        let board = Board::from(EXAMPLE_NINE);
        assert_eq!(cost(&board, 5), 5 + fill_score(&board));
    }
}
