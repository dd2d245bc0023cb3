//! # Reporting Module / 报告模块
//!
//! This module handles what the user sees on the console: per-test status
//! lines, failure details and the final summary. Colours are chosen through
//! `theme::Style` and resolved to escape codes only when printed.
//!
//! 此模块处理用户在控制台看到的内容：每个测试的状态行、失败详情和最终汇总。
//! 颜色通过 `theme::Style` 选择，仅在打印时才转换为转义码。

pub mod console;
pub mod theme;

// Re-export common reporting functions
pub use console::{print_summary, render_failure, render_summary};
pub use theme::{Style, apply_color_choice};
