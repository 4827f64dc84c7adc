//! Log file target resolution and appending.
//!
//! Responsibilities:
//! - Turn the `file_path` option into a concrete path, deriving a dated file
//!   name under `<cwd>/logs` for `None` or `AUTO`.
//! - Append one line per call, creating the `logs` directory and the file on demand.
//!
//! Does NOT handle:
//! - Reporting failures (the logger decides; they are never fatal).
//! - Rotation, buffering or locking.
//!
//! Invariants:
//! - The target is resolved once per logger, so repeated calls append to the same file.
//! - Existing content is never truncated.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::constants::{AUTO_LOG_PATH, AUTO_SUFFIX_BOUND, LOG_FILE_EXTENSION, LOGS_DIR_NAME};
use crate::error::LogError;

/// Where log lines are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
    /// Derived file inside a `logs` directory created on first write.
    Auto { dir: PathBuf, file: PathBuf },
    /// Caller-specified file.
    Path(PathBuf),
}

impl LogTarget {
    pub(crate) fn resolve(file_path: Option<&str>) -> Result<Self, LogError> {
        match file_path {
            Some(path) if path != AUTO_LOG_PATH => Ok(Self::Path(PathBuf::from(path))),
            _ => {
                let cwd = std::env::current_dir().map_err(LogError::CurrentDir)?;
                let suffix = rand::random_range(0..AUTO_SUFFIX_BOUND);
                Ok(Self::auto_in(&cwd, Local::now().date_naive(), suffix))
            }
        }
    }

    fn auto_in(base: &Path, today: NaiveDate, suffix: u32) -> Self {
        let dir = base.join(LOGS_DIR_NAME);
        let file = dir.join(auto_file_name(today, suffix));
        Self::Auto { dir, file }
    }

    pub(crate) fn path(&self) -> &Path {
        match self {
            Self::Auto { file, .. } => file,
            Self::Path(path) => path,
        }
    }

    /// Append `line` plus a trailing newline.
    pub(crate) fn append(&self, line: &str) -> io::Result<()> {
        if let Self::Auto { dir, .. } = self
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())?;
        file.write_all(format!("{line}\n").as_bytes())
    }
}

/// `dd-mm-yyyy-<suffix>.log`
fn auto_file_name(today: NaiveDate, suffix: u32) -> String {
    format!(
        "{}-{suffix}.{LOG_FILE_EXTENSION}",
        today.format("%d-%m-%Y")
    )
}
