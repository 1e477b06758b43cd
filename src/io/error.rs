//! Error types for configuration loading and round evaluation

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all game operations
#[derive(Debug, Error)]
pub enum GameError {
    /// A configuration field is missing, out of range, or inconsistent
    #[error("Invalid configuration field '{field}': {reason}")]
    Configuration {
        /// Dotted path of the offending field
        field: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A symbol identifier has no definition in the configuration
    #[error("Symbol '{symbol}' referenced by {referenced_by} has no definition")]
    UnknownSymbol {
        /// The undefined symbol identifier
        symbol: String,
        /// What referenced the symbol
        referenced_by: String,
    },

    /// A win pattern name has no definition in the configuration
    #[error("Win pattern '{pattern}' matched for symbol '{symbol}' has no definition")]
    UnknownPattern {
        /// The undefined pattern name
        pattern: String,
        /// Symbol the pattern was recorded for
        symbol: String,
    },

    /// Configuration text could not be decoded into the document model
    #[error("Malformed configuration: {source}")]
    MalformedConfiguration {
        /// Underlying JSON decoding error
        #[from]
        source: serde_json::Error,
    },

    /// The wager amount is negative or not a number
    #[error("Invalid wager '{value}': {reason}")]
    InvalidWager {
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No free cell was found for the bonus symbol within the retry budget
    #[error(
        "Could not place bonus symbol '{symbol}' after {attempts} attempts (grid size {}x{})",
        .grid_dimensions.0,
        .grid_dimensions.1
    )]
    BonusPlacement {
        /// Bonus symbol awaiting placement
        symbol: String,
        /// Number of random draws made
        attempts: usize,
        /// Grid dimensions (rows, columns)
        grid_dimensions: (usize, usize),
    },

    /// A result could not be rendered as JSON
    #[error("Failed to render output: {source}")]
    Serialization {
        /// Underlying JSON encoding error
        source: serde_json::Error,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Broad classification of a [`GameError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or inconsistent configuration
    Configuration,
    /// Invalid caller input such as a negative wager
    Input,
    /// Random board generation could not complete
    Generation,
    /// Reading input or writing output failed
    Io,
}

impl GameError {
    /// Classify the error for callers deciding how to report it
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. }
            | Self::UnknownSymbol { .. }
            | Self::UnknownPattern { .. }
            | Self::MalformedConfiguration { .. } => ErrorKind::Configuration,
            Self::InvalidWager { .. } => ErrorKind::Input,
            Self::BonusPlacement { .. } => ErrorKind::Generation,
            Self::Serialization { .. } | Self::FileSystem { .. } => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

/// Create a configuration error
pub fn configuration_error(field: impl Into<String>, reason: &impl ToString) -> GameError {
    GameError::Configuration {
        field: field.into(),
        reason: reason.to_string(),
    }
}

/// Create an unknown symbol error
pub fn unknown_symbol(symbol: &str, referenced_by: impl Into<String>) -> GameError {
    GameError::UnknownSymbol {
        symbol: symbol.to_string(),
        referenced_by: referenced_by.into(),
    }
}

/// Create an invalid wager error
pub fn invalid_wager(value: &impl ToString, reason: &impl ToString) -> GameError {
    GameError::InvalidWager {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
