//! Developer helpers for projects configured through `.env` files.
//!
//! This crate provides three independent helpers:
//! - [`locate`] / [`EnvLocator`]: find the nearest `.env` walking up from the cwd.
//! - [`check`] / [`KeyGuard`]: verify required keys exist with non-empty values.
//! - [`Logger`]: leveled console/file logger that can raise on error level.

pub mod constants;
mod error;
pub mod guard;
mod host;
pub mod locator;
pub mod logger;
pub mod style;

pub use error::{GuardError, LocateError, LogError};
pub use guard::{CheckOutcome, KeySet, KeyGuard, KeywordSpec, check, parse_dotenv};
pub use locator::{EnvLocator, EnvironmentFileInformation, locate};
pub use logger::{LogLevel, Logger, LoggerOptions};
pub use style::{AnsiStyler, PlainStyler, Styler, Tone};
