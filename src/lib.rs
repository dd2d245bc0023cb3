//! # Exec Runner Library / Exec Runner 库
//!
//! This library provides the core functionality for the Exec Runner tool,
//! a minimal harness that runs every executable found in a directory as a test
//! and decides pass or fail from the exit code alone.
//!
//! 此库为 Exec Runner 工具提供核心功能，
//! 这是一个极简的测试工具：将目录中的每个可执行文件作为一个测试运行，
//! 并仅根据退出码判定通过或失败。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, discovery and the execution loop
//! - `infra` - Subprocess plumbing, file system helpers and logging
//! - `reporting` - Console theme and report printing
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、配置、发现与执行循环
//! - `infra` - 子进程管道、文件系统辅助函数和日志
//! - `reporting` - 控制台主题与报告输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::discovery;
pub use core::error::RunnerError;
pub use core::execution;
pub use core::models;

/// Initializes the application's internationalization (i18n).
///
/// An explicitly requested language wins. Otherwise the system locale is used.
/// The full locale (e.g., "zh-CN") is tried first, then just the language code
/// (e.g., "en"), and finally the default language ("en").
pub fn init_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
