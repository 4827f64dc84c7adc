//! Leveled logger with console and file output.
//!
//! Responsibilities:
//! - Hold immutable `LoggerOptions` merged at construction.
//! - Format `[timestamp] [LEVEL] message` lines and dispatch them to the
//!   console and/or a log file.
//! - Raise the original message after dispatch when configured at error level.
//!
//! Does NOT handle:
//! - Rotation, buffering or structured sinks.
//! - Coordinating concurrent writers of the same file.
//!
//! Invariants:
//! - File write failures are reported to stderr and never propagated.
//! - An error-level `scan` always returns `Err(LogError::Raised(message))`,
//!   after console and file output have run.

mod options;
mod sink;
mod timestamp;

use std::path::Path;

use chrono::{DateTime, Utc};

pub use options::{LogLevel, LoggerOptions};

use crate::error::LogError;
use crate::style::{self, Styler, Tone};
use sink::LogTarget;
use timestamp::TimestampFormat;

/// Leveled logger configured once at construction.
pub struct Logger {
    options: LoggerOptions,
    timestamps: TimestampFormat,
    target: Option<LogTarget>,
    styler: Box<dyn Styler>,
}

impl Logger {
    /// Build a logger from `options`.
    ///
    /// # Errors
    ///
    /// - `LogError::InvalidTimeZone` if `time_zone` is not an IANA name.
    /// - `LogError::CurrentDir` if an automatic log path is needed and the
    ///   working directory cannot be read.
    pub fn new(options: LoggerOptions) -> Result<Self, LogError> {
        let timestamps = TimestampFormat::new(&options.time_zone, &options.date_format)?;
        let target = if options.write_to_file {
            Some(LogTarget::resolve(options.file_path.as_deref())?)
        } else {
            None
        };

        if let Some(target) = &target {
            tracing::debug!(path = %target.path().display(), "Logger writes to file");
        }

        Ok(Self {
            options,
            timestamps,
            target,
            styler: style::detect(),
        })
    }

    /// Override how console lines are decorated.
    pub fn with_styler(mut self, styler: Box<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    /// Options the logger was built with.
    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// File receiving log lines, when file output is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.target.as_ref().map(LogTarget::path)
    }

    /// Emit `message` to the configured outputs.
    ///
    /// # Errors
    ///
    /// Returns `LogError::Raised(message)` when the logger is configured at
    /// `LogLevel::Error`; this is the "log and raise" behaviour, not a failure
    /// of the logger itself.
    pub fn scan(&self, message: &str) -> Result<(), LogError> {
        let line = self.format_line(message, Utc::now());

        if self.options.enable_console {
            println!("{}", self.styler.paint(self.tone(), &line));
        }

        if let Some(target) = &self.target {
            self.write_file(target, &line);
        }

        match self.options.log_level {
            LogLevel::Soft => Ok(()),
            LogLevel::Error => Err(LogError::Raised(message.to_string())),
        }
    }

    fn format_line(&self, message: &str, now: DateTime<Utc>) -> String {
        let mut line = String::new();
        if self.options.enable_timestamp {
            line.push_str(&format!("[{}] ", self.timestamps.format(now)));
        }
        if self.options.show_log_level {
            line.push_str(&format!("[{}] ", self.options.log_level.label()));
        }
        line.push_str(message);
        line
    }

    fn tone(&self) -> Tone {
        match self.options.log_level {
            LogLevel::Soft => Tone::Soft,
            LogLevel::Error => Tone::Error,
        }
    }

    fn write_file(&self, target: &LogTarget, line: &str) {
        if let Err(e) = target.append(line) {
            tracing::error!(
                path = %target.path().display(),
                error = %e,
                "Failed to append log line"
            );
            eprintln!(
                "{}",
                self.styler
                    .paint(Tone::Error, &format!("Error writing LOG files: {e}"))
            );
        }
    }
}
