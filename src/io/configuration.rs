//! Game constants and runtime configuration defaults

// Cells own their symbol strings, so 1_000 x 1_000 stays in the tens of megabytes
/// Maximum allowed grid dimension (rows or columns)
pub const MAX_GRID_DIMENSION: usize = 1_000;

// With n cells and one free cell, the chance of exhausting n * 64 draws is about e^-64
/// Random draws allowed per grid cell when searching for a free bonus cell
pub const BONUS_PLACEMENT_ATTEMPTS_PER_CELL: usize = 64;

/// Decimal places kept after every payout arithmetic step
pub const PAYOUT_DECIMAL_PLACES: i32 = 6;

// Count patterns encode their requirement in the name, e.g. `same_symbol_5_times`
/// Prefix of a count pattern name
pub const COUNT_PATTERN_PREFIX: &str = "same_symbol_";
/// Suffix of a count pattern name
pub const COUNT_PATTERN_SUFFIX: &str = "_times";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Rounds between progress bar refreshes in simulation mode
pub const PROGRESS_UPDATE_INTERVAL: usize = 1_000;
