#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The 9x9 Sudoku board and its constraint predicate.
//!
//! A [`Board`] is a plain 81-cell grid of digits where `0` marks an empty
//! cell. The constraint predicate [`Board::is_safe`] is the single source of
//! truth for placement legality -- every solver and the generator go through
//! it. The module also owns the plain-text puzzle format (81 whitespace
//! separated integers, row-major) used by the generator and the benchmark
//! harness.

use bit_vec::BitVec;
use std::fmt;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Side length of the board.
pub const SIZE: usize = 9;

/// Side length of one of the nine non-overlapping boxes.
pub const BOX_SIZE: usize = 3;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// Errors produced when reading a puzzle from text or from a file.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The underlying file could not be read.
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),

    /// The input did not contain exactly [`CELLS`] values.
    #[error("expected {CELLS} cells, found {0}")]
    CellCount(usize),

    /// A token was not an integer.
    #[error("invalid cell token {token:?}")]
    Token {
        /// The offending token as it appeared in the input.
        token: String,
    },

    /// A cell held an integer outside `0..=9`.
    #[error("cell value {0} out of range 0..=9")]
    DigitRange(u32),
}

/// A 9x9 Sudoku grid. `0` denotes an empty cell.
///
/// The grid is a fixed 81-byte array, so cloning a board (which the BFS and
/// A* frontiers do on every branch) is a plain memcpy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[u8; SIZE]; SIZE]);

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self([[0; SIZE]; SIZE])
    }

    /// Returns the digit at `(row, col)`; `0` if the cell is empty.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Writes `digit` into `(row, col)`. `0` clears the cell.
    pub const fn set(&mut self, row: usize, col: usize, digit: u8) {
        self.0[row][col] = digit;
    }

    /// Returns true iff placing `digit` at `(row, col)` would not clash with
    /// any digit already present in that row, that column, or the containing
    /// 3x3 box. O(27), no side effects.
    #[must_use]
    pub fn is_safe(&self, row: usize, col: usize, digit: u8) -> bool {
        for x in 0..SIZE {
            if self.0[row][x] == digit || self.0[x][col] == digit {
                return false;
            }
        }

        let box_row = row - row % BOX_SIZE;
        let box_col = col - col % BOX_SIZE;
        for r in box_row..box_row + BOX_SIZE {
            for c in box_col..box_col + BOX_SIZE {
                if self.0[r][c] == digit {
                    return false;
                }
            }
        }

        true
    }

    /// Finds the first empty cell in row-major order.
    ///
    /// This is the cell-selection policy of the DFS and BFS solvers; the
    /// greedy and A* solvers use the most-constrained-cell heuristic instead.
    #[must_use]
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.0[row][col] == 0 {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Iterates over all cells as `(row, col, digit)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, digits)| {
            digits
                .iter()
                .enumerate()
                .map(move |(col, &digit)| (row, col, digit))
        })
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, _, digit)| digit == 0).count()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn count_filled(&self) -> usize {
        CELLS - self.count_empty()
    }

    /// Returns true iff every row, column, and box is exactly the digit set
    /// `{1..=9}`.
    ///
    /// This is the independent post-solve check: a solver that reports
    /// success on a board failing it has produced a corrupt solution, which
    /// the harness records separately from a clean success.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let row = |i: usize| (0..SIZE).map(move |j| self.0[i][j]);
        let col = |i: usize| (0..SIZE).map(move |j| self.0[j][i]);
        let boxed = |i: usize| {
            let (br, bc) = (i / BOX_SIZE * BOX_SIZE, i % BOX_SIZE * BOX_SIZE);
            (0..SIZE).map(move |j| self.0[br + j / BOX_SIZE][bc + j % BOX_SIZE])
        };

        (0..SIZE).all(|i| {
            Self::is_digit_set(row(i)) && Self::is_digit_set(col(i)) && Self::is_digit_set(boxed(i))
        })
    }

    /// Returns true iff the nine digits are exactly `{1..=9}`.
    fn is_digit_set(digits: impl Iterator<Item = u8>) -> bool {
        let mut seen = BitVec::from_elem(SIZE + 1, false);
        for digit in digits {
            if digit == 0 || seen[digit as usize] {
                return false;
            }
            seen.set(digit as usize, true);
        }
        seen.iter().skip(1).all(|b| b)
    }

    /// Transposes the board, swapping rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::empty();
        for (row, col, digit) in self.cells() {
            out.set(col, row, digit);
        }
        out
    }

    /// Reads a puzzle from a file in the plain-text format.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the file cannot be read or its contents
    /// are not 81 integers in `0..=9`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// Writes the board to a file, one row per line, digits space-separated.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError::Io`] if the file cannot be written.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PuzzleError> {
        std::fs::write(path, self.to_puzzle_string())?;
        Ok(())
    }

    /// Serializes the board in the puzzle file format: nine lines of nine
    /// space-separated digits, `0` for empty cells.
    #[must_use]
    pub fn to_puzzle_string(&self) -> String {
        let mut out = String::with_capacity(CELLS * 2);
        for row in &self.0 {
            for (col, digit) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push((b'0' + digit) as char);
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses 81 whitespace-separated integers in row-major order. Any
    /// whitespace layout is accepted; the writer always emits one row per
    /// line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut count = 0usize;

        for token in s.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| PuzzleError::Token {
                token: token.to_string(),
            })?;
            if value > 9 {
                return Err(PuzzleError::DigitRange(value));
            }
            if count < CELLS {
                #[allow(clippy::cast_possible_truncation)]
                board.set(count / SIZE, count % SIZE, value as u8);
            }
            count += 1;
        }

        if count == CELLS {
            Ok(board)
        } else {
            Err(PuzzleError::CellCount(count))
        }
    }
}

impl From<[[u8; SIZE]; SIZE]> for Board {
    fn from(grid: [[u8; SIZE]; SIZE]) -> Self {
        Self(grid)
    }
}

impl From<Board> for [[u8; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl Display for Board {
    /// Pretty-prints the board with box separators, e.g. for `--print-boards`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i % BOX_SIZE == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for (j, digit) in row.iter().enumerate() {
                if j % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                write!(f, "{digit} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}

/// A 9x9 example puzzle used by documentation, tests, and the benchmarks.
pub const EXAMPLE_NINE: [[u8; SIZE]; SIZE] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// The unique solution of [`EXAMPLE_NINE`].
pub const EXAMPLE_NINE_SOLVED: [[u8; SIZE]; SIZE] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];
