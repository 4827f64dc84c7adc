//! Centralized constants for the envguard crate.
//!
//! File names, sentinels and logger defaults live here so the three helpers
//! never disagree on a literal.

// =============================================================================
// Environment File
// =============================================================================

/// File name searched for by the locator and read by the key guard.
pub const ENV_FILE_NAME: &str = ".env";

// =============================================================================
// Logger Defaults
// =============================================================================

/// Default IANA time zone used to render log timestamps.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Berlin";

/// Default locale identifier selecting the timestamp layout.
pub const DEFAULT_DATE_FORMAT: &str = "en-US";

/// Sentinel `file_path` value asking for an automatically named log file.
pub const AUTO_LOG_PATH: &str = "AUTO";

/// Directory (under the current working directory) holding auto-named log files.
pub const LOGS_DIR_NAME: &str = "logs";

/// Extension of auto-named log files.
pub const LOG_FILE_EXTENSION: &str = "log";

/// Exclusive upper bound of the random suffix appended to auto-named log files.
pub const AUTO_SUFFIX_BOUND: u32 = 10_000;
