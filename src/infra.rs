//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Exec Runner,
//! including subprocess execution, file system checks and logging setup.
//!
//! 此模块为 Exec Runner 提供基础设施服务，
//! 包括子进程执行、文件系统检查和日志设置。

pub mod command;
pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
