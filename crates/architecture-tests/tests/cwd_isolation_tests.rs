//! Purpose: Keep tests that touch process-global state safe to run in parallel.
//!
//! The envguard helpers read `.env` and write `logs/` relative to the current
//! working directory, so many tests switch the cwd. The cwd is shared by all
//! test threads; a test that changes it must be serialized.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns. Files are analyzed statically.
//!
//! Invariants:
//! - Every test function calling `CwdGuard::new` carries `#[serial]`.
//! - `set_current_dir` only appears inside a `CwdGuard` implementation.
//! - Temp directories are bound to a named variable so cleanup runs at scope end.

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// Rust sources under `crates/`, skipping this crate and build output.
fn crate_sources() -> Vec<(PathBuf, String)> {
    let crates_dir = find_workspace_root().join("crates");
    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            Some((e.path().to_path_buf(), content))
        })
        .collect()
}

/// Attribute lines directly above the function enclosing line `index`.
fn enclosing_fn_attributes<'a>(lines: &[&'a str], index: usize) -> Vec<&'a str> {
    let Some(fn_line) = (0..=index).rev().find(|&i| {
        let trimmed = lines[i].trim_start();
        trimmed.starts_with("fn ") || trimmed.starts_with("async fn ")
    }) else {
        return Vec::new();
    };

    lines[..fn_line]
        .iter()
        .rev()
        .map(|line| line.trim())
        .take_while(|line| line.starts_with("#[") || line.starts_with("//"))
        .collect()
}

fn cwd_violations(path: &Path, content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let defines_guard = content.contains("struct CwdGuard");
    let mut violations = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }

        if trimmed.contains("CwdGuard::new(") {
            let attributes = enclosing_fn_attributes(&lines, i);
            let is_test = attributes.iter().any(|a| a.starts_with("#[test]"));
            let is_serial = attributes.iter().any(|a| a.contains("serial"));
            if is_test && !is_serial {
                violations.push(format!(
                    "{}:{}: test changes the cwd without #[serial]",
                    path.display(),
                    i + 1
                ));
            }
        }

        if trimmed.contains("set_current_dir(") && !defines_guard {
            violations.push(format!(
                "{}:{}: direct set_current_dir - use CwdGuard so the cwd is restored",
                path.display(),
                i + 1
            ));
        }
    }

    violations
}

#[test]
fn test_cwd_changes_are_serialized() {
    let mut violations = Vec::new();
    let mut checked = 0;

    for (path, content) in crate_sources() {
        if !content.contains("#[test]") {
            continue;
        }
        checked += 1;
        violations.extend(cwd_violations(&path, &content));
    }

    assert!(checked > 0, "no test sources found under crates/");
    assert!(
        violations.is_empty(),
        "Found tests mutating the working directory unsafely:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdir_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in crate_sources() {
        if !content.contains("#[test]") {
            continue;
        }

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = NamedTempFile")
            {
                violations.push(format!(
                    "{}:{}: temp directory bound to `_` is deleted immediately",
                    path.display(),
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found temp directories not properly retained:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_unserialized_cwd_change_is_reported() {
    let source = "#[test]\nfn bad() {\n    let _cwd_guard = CwdGuard::new(dir.path());\n}\n";
    let violations = cwd_violations(Path::new("bad.rs"), source);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("bad.rs:3"));
}

#[test]
fn test_serialized_cwd_change_is_accepted() {
    let source =
        "#[test]\n#[serial]\nfn good() {\n    let _cwd_guard = CwdGuard::new(dir.path());\n}\n";
    assert!(cwd_violations(Path::new("good.rs"), source).is_empty());
}
