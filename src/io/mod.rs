/// Command-line interface
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Serde model of the configuration document
pub mod document;
/// Error types
pub mod error;
/// Diagnostic logging setup
pub mod logging;
/// Simulation progress display
pub mod progress;
/// JSON result rendering
pub mod report;
