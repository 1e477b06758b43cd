//! Mathematical utilities for the game

/// Weighted random selection and the injectable random source
pub mod probability;
/// Fixed-precision payout arithmetic
pub mod rounding;
