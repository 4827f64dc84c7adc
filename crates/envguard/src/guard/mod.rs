//! Required-key check against the `.env` file.
//!
//! Responsibilities:
//! - Read `.env` from a fixed directory (default: the current working directory).
//! - Verify that every requested key exists with a non-empty value.
//! - Warn or fail depending on strict mode and the warnings-only flag.
//!
//! Does NOT handle:
//! - Searching parent directories (see `locator`; the guard location is fixed).
//! - Loading values into the process environment.
//! - Caching: every call re-reads and re-parses the file.
//!
//! Invariants:
//! - Preconditions fail in order: missing file, then empty file.
//! - Malformed lines are skipped; they never fail a check.
//! - A key is missing when absent or when its value is the empty string; `"0"` is present.
//! - Missing keys are an error only in strict mode without warnings-only.

mod keywords;
mod parse;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub use keywords::{KeySet, KeywordSpec, NormalizedKeys};
pub use parse::parse_dotenv;

use crate::constants::ENV_FILE_NAME;
use crate::error::GuardError;
use crate::style::{self, Styler, Tone};

const PASSED_NOTICE: &str = "Checks passed: All required keys exist and have non-empty values";

/// Outcome of a check that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every key exists with a non-empty value.
    Passed,
    /// Some keys are missing or empty; a warning was printed.
    Warned { missing: Vec<String> },
}

/// Checks required keys in `<dir>/.env`.
pub struct KeyGuard {
    dir: PathBuf,
    styler: Box<dyn Styler>,
}

impl Default for KeyGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGuard {
    /// Guard the `.env` file of the current working directory.
    ///
    /// The directory is resolved on every `check`, not at construction.
    pub fn new() -> Self {
        Self::in_dir(".")
    }

    /// Guard the `.env` file inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            styler: style::detect(),
        }
    }

    /// Override how notices are decorated.
    pub fn with_styler(mut self, styler: Box<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    pub fn env_path(&self) -> PathBuf {
        self.dir.join(ENV_FILE_NAME)
    }

    /// Check that `keywords` exist in `.env` with non-empty values.
    ///
    /// # Errors
    ///
    /// - `GuardError::FileNotFound` if `.env` does not exist in the guarded directory.
    /// - `GuardError::EmptyFile` if its trimmed content is empty.
    /// - `GuardError::Io` if it exists but cannot be read.
    /// - `GuardError::RequiredKeyMissing` if keys are missing in strict mode
    ///   and `only_warnings` is false.
    pub fn check(
        &self,
        keywords: impl Into<KeywordSpec>,
        only_warnings: bool,
    ) -> Result<CheckOutcome, GuardError> {
        let vars = self.read_env()?;
        let NormalizedKeys {
            keys,
            strict,
            listed,
        } = keywords.into().normalize();

        let missing = missing_keys(&keys, &vars);
        if missing.is_empty() {
            tracing::debug!(checked = keys.len(), "All required .env keys present");
            println!("{}", self.styler.paint(Tone::Success, PASSED_NOTICE));
            return Ok(CheckOutcome::Passed);
        }

        if strict && !only_warnings {
            return Err(GuardError::RequiredKeyMissing { missing });
        }

        tracing::warn!(missing = ?missing, strict, "Required .env keys missing or empty");
        println!(
            "{}",
            self.styler.paint(Tone::Soft, &warning_message(&missing, listed))
        );
        Ok(CheckOutcome::Warned { missing })
    }

    fn read_env(&self) -> Result<HashMap<String, String>, GuardError> {
        let path = self.env_path();
        if !path.is_file() {
            return Err(GuardError::FileNotFound { path });
        }

        let bytes = fs::read(&path).map_err(|e| GuardError::Io { kind: e.kind() })?;
        let content = String::from_utf8_lossy(&bytes);
        if content.trim().is_empty() {
            return Err(GuardError::EmptyFile { path });
        }

        Ok(parse_dotenv(&content))
    }
}

/// Keys of `keys` that are absent from `vars` or empty, in caller order.
pub(crate) fn missing_keys(keys: &[String], vars: &HashMap<String, String>) -> Vec<String> {
    keys.iter()
        .filter(|key| vars.get(key.as_str()).is_none_or(|value| value.is_empty()))
        .cloned()
        .collect()
}

pub(crate) fn warning_message(missing: &[String], listed: bool) -> String {
    if listed {
        format!(
            "Warning: The following keys are missing or empty in .env file: {}",
            missing.join(", ")
        )
    } else {
        format!(
            "Warning: The key is missing or empty in .env file: {}",
            missing.join(", ")
        )
    }
}

/// Check `keywords` against `.env` in the current working directory.
pub fn check(
    keywords: impl Into<KeywordSpec>,
    only_warnings: bool,
) -> Result<CheckOutcome, GuardError> {
    KeyGuard::new().check(keywords, only_warnings)
}
