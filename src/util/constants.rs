// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "LogTally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report layout
// =============================================================================

/// Header of the level column in the summary table.
pub const LEVEL_HEADER: &str = "Level";

/// Header of the count column in the summary table.
pub const COUNT_HEADER: &str = "Count";

/// Default padded width of the level column.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 17;

/// Smallest configurable level column width (fits "DEBUG").
pub const MIN_LEVEL_COLUMN_WIDTH: usize = 5;

/// Largest configurable level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

/// Width of the hyphen run under the count column.
pub const COUNT_COLUMN_RULE_WIDTH: usize = 8;

/// Line printed when a level filter matches nothing.
pub const NO_RECORDS_NOTICE: &str = "No records for this level.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. The report goes to stdout, so stay quiet on stderr
/// unless asked.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Exit codes
// =============================================================================

/// Process exit code for usage errors and load failures.
pub const EXIT_FAILURE: i32 = 1;
