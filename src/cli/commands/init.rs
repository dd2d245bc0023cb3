//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the Exec Runner CLI,
//! which writes a commented default configuration file.
//!
//! 此模块实现了 Exec Runner CLI 的 `init` 命令，
//! 用于写入带注释的默认配置文件。

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::{core::error::RunnerError, infra::t, reporting::theme::Style};

pub const DEFAULT_CONFIG: &str = r#"# Exec Runner Configuration / Exec Runner 配置

# Language for messages; omit to follow the system locale / 消息语言；省略则跟随系统区域设置
# language = "en"

# Directory holding the test executables, relative to this file / 存放测试可执行文件的目录，相对于本文件
test_dir = "build"

# Only run files whose name starts with a digit (01_init, 02_vector) / 仅运行名称以数字开头的文件
numeric_prefix = false

# "stream" prints stdout live, "capture" prints output only on failure / "stream" 实时打印 stdout，"capture" 仅在失败时打印输出
output = "stream"

# Kill a test after this many seconds; 0 disables the limit / 超过该秒数后终止测试；0 表示不限制
timeout_secs = 0

# "auto", "always" or "never" / "auto"、"always" 或 "never"
color = "auto"
"#;

/// Writes `DEFAULT_CONFIG` to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(RunnerError::ConfigExists {
            path: path.to_path_buf(),
        }
        .into());
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "{}",
        Style::Pass.paint(t!("init.created", path = path.display()))
    );
    Ok(())
}
