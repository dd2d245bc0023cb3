//! # File System Operations Module / 文件系统操作模块
//!
//! Read-only checks used by discovery. Nothing here creates, modifies or
//! deletes files.
//!
//! 发现阶段使用的只读检查。此处不会创建、修改或删除任何文件。

use std::io;
use std::path::{Path, PathBuf};

/// Returns `true` if the current user may execute `path`.
///
/// On Unix this asks the kernel (`access(2)` with `X_OK`), so owner, group and
/// other bits are weighed against the real user. Elsewhere the extension decides.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::X_OK).is_ok()
}

/// Returns `true` if the current user may execute `path`.
///
/// On Unix this asks the kernel (`access(2)` with `X_OK`). Elsewhere the
/// extension decides.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    const EXECUTABLE_EXTENSIONS: [&str; 4] = ["exe", "bat", "cmd", "com"];
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            EXECUTABLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Returns `true` if `name` begins with a numeric character (`01_init`, `7_map`).
pub fn has_numeric_prefix(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_numeric)
}

/// Gets the absolute path from a potentially relative path.
///
/// # Returns
/// Canonicalized absolute path, or the I/O error if the path doesn't exist
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    std::fs::canonicalize(path)
}
