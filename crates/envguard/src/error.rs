//! Error types for the three helpers.
//!
//! Responsibilities:
//! - Define one error enum per component (`LocateError`, `GuardError`, `LogError`).
//! - Keep every message human-readable; context travels as fields.
//!
//! Does NOT handle:
//! - Recovering from failures (callers decide).
//! - Reporting non-fatal log file failures (see `logger::sink`).
//!
//! Invariants:
//! - Guard errors NEVER include raw .env line contents to prevent secret leakage.
//! - `LogError::Raised` displays exactly the caller's unformatted message.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while searching for the `.env` file.
#[derive(Error, Debug)]
pub enum LocateError {
    #[error(
        "The .env file was not found in {} or its parent directories.",
        .start.display()
    )]
    NotFound { start: PathBuf },

    #[error("Unable to determine the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the required-key check.
#[derive(Error, Debug)]
pub enum GuardError {
    #[error(".env file not found")]
    FileNotFound { path: PathBuf },

    #[error(".env file is empty")]
    EmptyFile { path: PathBuf },

    #[error(
        "Invalid argument for keyword check. Expected string, string[], or {{ strict: ... }} object.\n\n\
         Example: check(\"API_KEY\") or check([\"API_KEY\", \"API_SECRET\"]) or check({{ \"strict\": [\"API_KEY\", \"API_SECRET\"] }})"
    )]
    InvalidArgument,

    /// Raised only in strict mode, whose message always uses the singular "key",
    /// whatever the number of keys.
    #[error("Required key missing or empty in .env file: {}", .missing.join(", "))]
    RequiredKeyMissing { missing: Vec<String> },

    /// The file exists but could not be read (for example, permission denied).
    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },
}

/// Errors raised by the logger.
#[derive(Error, Debug)]
pub enum LogError {
    /// Deliberate raise of an error-level logger; carries the unformatted message.
    #[error("{0}")]
    Raised(String),

    #[error("Unknown time zone '{0}'. Expected an IANA name such as Europe/Berlin")]
    InvalidTimeZone(String),

    #[error("Unable to determine the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Invalid logger options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_key_message_is_singular_for_any_count() {
        let single = GuardError::RequiredKeyMissing {
            missing: vec!["API_KEY".to_string()],
        };
        assert_eq!(
            single.to_string(),
            "Required key missing or empty in .env file: API_KEY"
        );

        let many = GuardError::RequiredKeyMissing {
            missing: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            many.to_string(),
            "Required key missing or empty in .env file: A, B"
        );
    }

    #[test]
    fn test_raised_message_is_verbatim() {
        assert_eq!(LogError::Raised("boom".to_string()).to_string(), "boom");
    }

    #[test]
    fn test_invalid_argument_lists_accepted_shapes() {
        let message = GuardError::InvalidArgument.to_string();
        assert!(message.contains("string[]"));
        assert!(message.contains("\"strict\""));
    }
}
