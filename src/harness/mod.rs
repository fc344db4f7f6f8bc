#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod report;
pub mod runner;

pub use report::{Report, Summary};
pub use runner::{Measurement, Outcome, Trial};
