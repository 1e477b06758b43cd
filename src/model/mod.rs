//! Validated, read-only game configuration
//!
//! Everything is resolved once from the configuration document: symbol kinds
//! become typed variants, pattern names and `"row:column"` strings are parsed,
//! and every symbol reference is checked against the symbol table.

/// Game configuration and probability rules
pub mod config;
/// Win pattern definitions
pub mod patterns;
/// Symbol definitions and bonus impacts
pub mod symbols;

pub use config::GameConfig;
