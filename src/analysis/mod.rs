//! Aggregate statistics over many independent rounds

/// Multi-round simulation and return-to-player statistics
pub mod simulation;
