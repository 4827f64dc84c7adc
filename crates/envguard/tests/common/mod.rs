//! Shared helpers for envguard integration tests.

use std::path::{Path, PathBuf};

/// RAII guard for temporarily changing the current working directory.
///
/// Tests using it must be `#[serial]`: the cwd is process-global.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
