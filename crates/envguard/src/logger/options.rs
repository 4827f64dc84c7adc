//! Logger configuration.
//!
//! Responsibilities:
//! - Define `LoggerOptions` and its documented defaults.
//! - Merge caller overrides onto the defaults (builder methods or partial JSON).
//!
//! Does NOT handle:
//! - Validating the time zone or date format (see `timestamp.rs`).
//! - Resolving the log file path (see `sink.rs`).
//!
//! Invariants:
//! - Defaults are: soft level, timestamps on, Europe/Berlin, en-US, level label
//!   shown, console on, file writing off, no file path.
//! - Keys missing from a JSON override keep their default value.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_ZONE};
use crate::error::LogError;

/// Severity of every message a logger emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Log only.
    #[default]
    Soft,
    /// Log, then raise the message as an error.
    Error,
}

impl LogLevel {
    /// Upper-case label printed in `[LEVEL]`.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Soft => "SOFT",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Formatting and output configuration of a `Logger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerOptions {
    pub log_level: LogLevel,
    pub enable_timestamp: bool,
    /// IANA time zone name, e.g. `Europe/Berlin`.
    pub time_zone: String,
    /// Locale identifier (`en-US`, `en-GB`, `de-DE`, ...) or a strftime pattern.
    pub date_format: String,
    pub show_log_level: bool,
    pub enable_console: bool,
    pub write_to_file: bool,
    /// Target file; `None` or `AUTO` derives a dated file under `./logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Soft,
            enable_timestamp: true,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_log_level: true,
            enable_console: true,
            write_to_file: false,
            file_path: None,
        }
    }
}

impl LoggerOptions {
    /// Defaults overridden by the keys present in `json`.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.enable_timestamp = enabled;
        self
    }

    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = zone.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_log_level_label(mut self, shown: bool) -> Self {
        self.show_log_level = shown;
        self
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.enable_console = enabled;
        self
    }

    /// Enable file output to `path` (`AUTO` for a derived file name).
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.write_to_file = true;
        self.file_path = Some(path.into());
        self
    }

    pub fn with_write_to_file(mut self, enabled: bool) -> Self {
        self.write_to_file = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let options = LoggerOptions::default();
        assert_eq!(options.log_level, LogLevel::Soft);
        assert!(options.enable_timestamp);
        assert_eq!(options.time_zone, "Europe/Berlin");
        assert_eq!(options.date_format, "en-US");
        assert!(options.show_log_level);
        assert!(options.enable_console);
        assert!(!options.write_to_file);
        assert!(options.file_path.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options =
            LoggerOptions::from_json(r#"{ "logLevel": "error", "writeToFile": true, "filePath": "AUTO" }"#)
                .unwrap();

        assert_eq!(options.log_level, LogLevel::Error);
        assert!(options.write_to_file);
        assert_eq!(options.file_path.as_deref(), Some("AUTO"));
        assert_eq!(options.time_zone, "Europe/Berlin");
        assert!(options.enable_console);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(LoggerOptions::from_json("{}").unwrap(), LoggerOptions::default());
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = LoggerOptions::from_json(r#"{ "logLevel": "loud" }"#);
        assert!(matches!(result, Err(LogError::InvalidOptions(_))));
    }

    #[test]
    fn test_builders_override_defaults() {
        let options = LoggerOptions::default()
            .with_log_level(LogLevel::Error)
            .with_timestamp(false)
            .with_log_level_label(false)
            .with_console(false)
            .with_file("app.log");

        assert_eq!(options.log_level, LogLevel::Error);
        assert!(!options.enable_timestamp);
        assert!(!options.show_log_level);
        assert!(!options.enable_console);
        assert!(options.write_to_file);
        assert_eq!(options.file_path.as_deref(), Some("app.log"));
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(LogLevel::Soft.label(), "SOFT");
        assert_eq!(LogLevel::Error.label(), "ERROR");
    }
}
