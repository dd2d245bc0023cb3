//! Test discovery.
//!
//! A test is any regular file in the test directory that carries an execute
//! permission, optionally restricted to names starting with a digit. Nothing
//! is searched recursively. Results are sorted by file name so runs are
//! reproducible regardless of directory-listing order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, RunnerError};
use crate::core::models::TestCase;
use crate::infra::fs::{absolute_path, has_numeric_prefix, is_executable};

/// The outcome of scanning a test directory.
#[derive(Debug, Clone)]
pub struct DiscoveredTests {
    /// Canonical absolute path of the scanned directory.
    pub root: PathBuf,
    /// Eligible executables, sorted by file name.
    pub cases: Vec<TestCase>,
}

impl DiscoveredTests {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Scans `dir` for test executables.
///
/// A missing or unreadable directory is a `RunnerError::Discovery`. Individual
/// entries that cannot be inspected (dangling symlinks, races with deletion)
/// are skipped.
pub fn discover_tests(dir: &Path, numeric_prefix: bool) -> Result<DiscoveredTests> {
    let root = absolute_path(dir).map_err(|e| RunnerError::discovery(dir, e))?;
    let entries = fs::read_dir(&root).map_err(|e| RunnerError::discovery(&root, e))?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", root.display());
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        // Follows symlinks, like `stat`.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!("skipping {name}: {e}");
                continue;
            }
        };

        if !metadata.is_file() {
            tracing::debug!("skipping {name}: not a regular file");
            continue;
        }
        if !is_executable(&path) {
            tracing::debug!("skipping {name}: not executable");
            continue;
        }
        if numeric_prefix && !has_numeric_prefix(&name) {
            tracing::debug!("skipping {name}: no numeric prefix");
            continue;
        }

        cases.push(TestCase { path, name });
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!("discovered {} test(s) in {}", cases.len(), root.display());

    Ok(DiscoveredTests { root, cases })
}
