//! # Configuration Module / 配置模块
//!
//! Settings come from three layers: built-in defaults, an optional TOML file
//! (`exec-runner.toml`), and command-line flags. `RunSettings::resolve` merges
//! them into the single value the runner consumes.
//!
//! 设置来自三层：内置默认值、可选的 TOML 文件（`exec-runner.toml`）
//! 以及命令行参数。`RunSettings::resolve` 将它们合并为运行器使用的单一值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{Result, RunnerError};

/// Name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "exec-runner.toml";

/// Directory scanned for tests when nothing else is configured.
pub const DEFAULT_TEST_DIR: &str = "build";

/// How the output of a running test is handled.
/// 如何处理正在运行的测试的输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Print stdout line by line while the test runs; capture stderr.
    /// 测试运行时逐行打印 stdout；捕获 stderr。
    #[default]
    Stream,
    /// Capture both streams silently; print them only on failure.
    /// 静默捕获两个流；仅在失败时打印。
    Capture,
}

/// When to emit ANSI colour codes.
/// 何时输出 ANSI 颜色代码。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// The on-disk configuration file.
///
/// Every field is optional so an empty file is valid.
///
/// 磁盘上的配置文件。所有字段都是可选的，因此空文件也是有效的。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// UI language (e.g., "en", "zh-CN"). Falls back to the system locale.
    /// 界面语言（例如 "en", "zh-CN"）。未设置时使用系统区域设置。
    pub language: Option<String>,
    /// Directory containing the test executables, relative to the config file.
    /// `~` and environment variables are expanded.
    ///
    /// 包含测试可执行文件的目录，相对于配置文件所在位置。
    /// 会展开 `~` 和环境变量。
    pub test_dir: Option<String>,
    /// Only discover files whose name starts with a digit (`01_alloc`, `2_vec`).
    /// 仅发现名称以数字开头的文件（`01_alloc`、`2_vec`）。
    pub numeric_prefix: bool,
    pub output: OutputMode,
    /// Per-test timeout in seconds. Absent or zero means no timeout.
    /// 单个测试的超时时间（秒）。缺省或为零表示不超时。
    pub timeout_secs: Option<u64>,
    pub color: ColorChoice,
}

impl RunnerConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| RunnerError::config(path, e.to_string()))?;
        Self::from_toml_str(&content).map_err(|e| RunnerError::config(path, e.to_string()))
    }
}

/// Values given on the command line. `None`/`false` means "not given".
/// 命令行给出的值。`None`/`false` 表示“未给出”。
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub test_dir: Option<PathBuf>,
    pub numeric_prefix: bool,
    pub capture: bool,
    pub timeout_secs: Option<u64>,
    pub color: Option<ColorChoice>,
}

/// Fully resolved settings for one run.
/// 一次运行的完整解析后设置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub test_dir: PathBuf,
    pub numeric_prefix: bool,
    pub output: OutputMode,
    pub timeout: Option<Duration>,
    pub color: ColorChoice,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            numeric_prefix: false,
            output: OutputMode::Stream,
            timeout: None,
            color: ColorChoice::Auto,
        }
    }
}

impl RunSettings {
    /// Merges defaults, the parsed config file and command-line overrides.
    ///
    /// A `test_dir` from the command line is taken as given (relative to the
    /// current directory). A `test_dir` from the config file is expanded and
    /// then resolved against the directory holding that file.
    pub fn resolve(
        config: &RunnerConfig,
        config_path: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self> {
        let test_dir = match (overrides.test_dir, &config.test_dir) {
            (Some(dir), _) => dir,
            (None, Some(dir)) => {
                let origin = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
                let expanded = shellexpand::full(dir)
                    .map_err(|e| RunnerError::config(origin, e.to_string()))?;
                let dir = PathBuf::from(expanded.into_owned());
                match config_path.and_then(Path::parent) {
                    Some(base) if dir.is_relative() => base.join(dir),
                    _ => dir,
                }
            }
            (None, None) => PathBuf::from(DEFAULT_TEST_DIR),
        };

        let output = if overrides.capture {
            OutputMode::Capture
        } else {
            config.output
        };

        let timeout = overrides
            .timeout_secs
            .or(config.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            test_dir,
            numeric_prefix: overrides.numeric_prefix || config.numeric_prefix,
            output,
            timeout,
            color: overrides.color.unwrap_or(config.color),
        })
    }
}
