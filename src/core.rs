//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Exec Runner,
//! including data models, configuration, test discovery and execution.
//!
//! 此模块包含 Exec Runner 的核心功能，
//! 包括数据模型、配置、测试发现和执行逻辑。

pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod models;

// Re-exports
pub use config::{RunSettings, RunnerConfig};
pub use discovery::discover_tests;
pub use execution::{run_all, run_test_case};
pub use models::{RunSummary, TestCase, TestResult};
