#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod algorithm;
pub mod astar;
pub mod bfs;
pub mod board;
pub mod dfs;
pub mod greedy;
pub mod heuristics;

pub use algorithm::{ALGORITHMS, Algorithm};
pub use astar::AstarOrdering;
pub use board::{Board, PuzzleError};
