//! Read-only process context used by the advanced `.env` report.
//!
//! Every lookup is best-effort: a value that cannot be determined is
//! rendered as `unknown` instead of failing the report.

use std::fs::Metadata;

const UNKNOWN: &str = "unknown";

/// Host name of the machine running the process.
#[cfg(unix)]
pub fn hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Could not read hostname");
            UNKNOWN.to_string()
        }
    }
}

#[cfg(not(unix))]
pub fn hostname() -> String {
    std::env::var("COMPUTERNAME").unwrap_or_else(|_| UNKNOWN.to_string())
}

/// User name owning the file described by `metadata`.
#[cfg(unix)]
pub fn file_owner(metadata: &Metadata) -> String {
    use nix::unistd::{Uid, User};
    use std::os::unix::fs::MetadataExt;

    let uid = metadata.uid();
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(e) => {
            tracing::debug!(uid, error = %e, "Could not resolve file owner");
            uid.to_string()
        }
    }
}

/// Falls back to the invoking user where ownership is not exposed.
#[cfg(not(unix))]
pub fn file_owner(_metadata: &Metadata) -> String {
    std::env::var("USERNAME").unwrap_or_else(|_| UNKNOWN.to_string())
}
