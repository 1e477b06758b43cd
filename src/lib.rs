//! Probability-driven scratch card evaluation
//!
//! A round draws a symbol grid from per-cell weights, finds the win patterns
//! every symbol satisfies, and turns the matches into a payout using symbol,
//! pattern and bonus multipliers.

#![forbid(unsafe_code)]

/// Board generation, pattern matching, payout and round orchestration
pub mod algorithm;
/// Multi-round statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Weighted selection and payout arithmetic
pub mod math;
/// Validated game configuration
pub mod model;
/// Symbol grid
pub mod spatial;

pub use algorithm::evaluator::{RoundEvaluator, RoundResult};
pub use io::error::{GameError, Result};
pub use model::GameConfig;
