//! Upward search for the `.env` file.
//!
//! Responsibilities:
//! - Walk from a start directory (default: cwd) towards the filesystem root
//!   until a `.env` file is found.
//! - In advanced mode, collect file timestamps and print a report.
//!
//! Does NOT handle:
//! - Parsing the file (see `guard`).
//! - Creating or modifying any file.
//!
//! Invariants:
//! - A missing file is an error (`LocateError::NotFound`), never `exists: false`.
//! - `path`, `created_at` and `updated_at` are set iff advanced mode was requested.
//! - The report is a side effect only; it never changes the returned value.

mod report;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::ENV_FILE_NAME;
use crate::error::LocateError;
use crate::host;
use crate::style::{self, Styler};

use report::ReportContext;

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFileInformation {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EnvironmentFileInformation {
    fn found() -> Self {
        Self {
            exists: true,
            path: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A found `.env` file and the number of directories probed to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Located {
    pub(crate) path: PathBuf,
    pub(crate) probes: usize,
}

/// Searches for `.env` from a start directory upwards.
pub struct EnvLocator {
    start: PathBuf,
    styler: Box<dyn Styler>,
}

impl EnvLocator {
    /// Start the search at the current working directory.
    pub fn from_current_dir() -> Result<Self, LocateError> {
        let cwd = std::env::current_dir().map_err(LocateError::CurrentDir)?;
        Ok(Self::starting_at(cwd))
    }

    /// Start the search at `dir`. Relative paths are resolved against the cwd at search time.
    pub fn starting_at(dir: impl Into<PathBuf>) -> Self {
        Self {
            start: dir.into(),
            styler: style::detect(),
        }
    }

    /// Override how the advanced report is decorated.
    pub fn with_styler(mut self, styler: Box<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    /// Directory the search starts from, as given.
    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Path of the nearest `.env` file.
    pub fn find(&self) -> Result<PathBuf, LocateError> {
        self.search().map(|located| located.path)
    }

    /// Look up the file, printing the advanced report to stdout.
    pub fn locate(&self, advanced: bool) -> Result<EnvironmentFileInformation, LocateError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.locate_with_report(advanced, &mut out)
    }

    /// Look up the file, writing the advanced report to `out`.
    ///
    /// Nothing is written when `advanced` is false.
    pub fn locate_with_report<W: Write>(
        &self,
        advanced: bool,
        out: &mut W,
    ) -> Result<EnvironmentFileInformation, LocateError> {
        let located = self.search()?;
        tracing::debug!(
            path = %located.path.display(),
            probes = located.probes,
            "Found .env file"
        );
        if !advanced {
            return Ok(EnvironmentFileInformation::found());
        }

        let metadata = fs::metadata(&located.path).map_err(|source| LocateError::Metadata {
            path: located.path.clone(),
            source,
        })?;
        let updated = metadata
            .modified()
            .map_err(|source| LocateError::Metadata {
                path: located.path.clone(),
                source,
            })?;
        let created = birth_time(&metadata, updated);

        let info = EnvironmentFileInformation {
            exists: true,
            path: Some(located.path.clone()),
            created_at: Some(DateTime::<Utc>::from(created)),
            updated_at: Some(DateTime::<Utc>::from(updated)),
        };

        let context = ReportContext {
            cwd: std::env::current_dir().ok(),
            env_dir: located.path.parent().map(Path::to_path_buf),
            owner: host::file_owner(&metadata),
            created_at: DateTime::<Utc>::from(created),
            updated_at: DateTime::<Utc>::from(updated),
            now: Utc::now(),
            host: host::hostname(),
        };
        if let Err(e) = report::write_report(out, self.styler.as_ref(), &context) {
            tracing::warn!(error = %e, "Could not write .env report");
        }

        Ok(info)
    }

    pub(crate) fn search(&self) -> Result<Located, LocateError> {
        let start = std::path::absolute(&self.start).map_err(LocateError::CurrentDir)?;
        let mut dir = start.as_path();
        let mut probes = 0;

        loop {
            let candidate = dir.join(ENV_FILE_NAME);
            probes += 1;
            if candidate.is_file() {
                return Ok(Located {
                    path: candidate,
                    probes,
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Err(LocateError::NotFound { start }),
            }
        }
    }
}

/// Birth time when the platform reports one, otherwise the modification time.
fn birth_time(metadata: &fs::Metadata, fallback: SystemTime) -> SystemTime {
    match metadata.created() {
        Ok(created) => created,
        Err(e) => {
            tracing::debug!(error = %e, "Birth time unavailable; using modification time");
            fallback
        }
    }
}

/// Look up `.env` starting at the current working directory.
pub fn locate(advanced: bool) -> Result<EnvironmentFileInformation, LocateError> {
    EnvLocator::from_current_dir()?.locate(advanced)
}
