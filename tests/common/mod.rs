// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Creates an empty temporary test directory.
pub fn empty_test_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a `/bin/sh` script named `name` into `dir` and marks it executable.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    let mut perms = fs::metadata(&path).expect("Failed to stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod script");
    path
}

/// Writes a regular, non-executable file.
pub fn write_plain(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// The reference suite: one passing test, one failing test writing "boom" to
/// stderr, and a non-executable `readme.txt`.
#[cfg(unix)]
pub fn sample_suite() -> TempDir {
    let dir = empty_test_dir();
    write_script(dir.path(), "01_ok", "echo all good\nexit 0");
    write_script(dir.path(), "02_fail", "echo partial output\necho boom >&2\nexit 1");
    write_plain(dir.path(), "readme.txt", "not a test");
    dir
}
