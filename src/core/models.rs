//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through a run: the
//! discovered test case, the result of executing it, and the aggregate
//! summary printed at the end.
//!
//! 此模块定义了一次运行中流转的数据结构：发现的测试用例、
//! 执行结果以及最后打印的汇总。

use std::path::{Path, PathBuf};
use std::time::Duration;

/// A single executable discovered in the test directory.
/// Enumerated fresh on every run and never persisted.
///
/// 在测试目录中发现的单个可执行文件。
/// 每次运行时重新枚举，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Absolute path to the executable / 可执行文件的绝对路径
    pub path: PathBuf,
    /// File name, used as the display name of the test / 文件名，用作测试的显示名称
    pub name: String,
}

impl TestCase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Enumerates the reasons a test case can fail.
/// 枚举测试用例失败的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The process exited with a non-zero code.
    /// 进程以非零退出码退出。
    NonZeroExit,
    /// The process was terminated by the given signal.
    /// 进程被指定信号终止。
    Signal(i32),
    /// The executable could not be spawned at all.
    /// 可执行文件根本无法启动。
    Launch(String),
    /// The process exceeded the configured per-test timeout and was killed.
    /// 进程超出了配置的单个测试超时时间并被终止。
    Timeout(Duration),
    /// The run was interrupted while this test was executing.
    /// 此测试执行期间运行被中断。
    Cancelled,
}

/// Output captured from a test process.
/// 从测试进程捕获的输出。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The outcome of executing one `TestCase`.
///
/// A test passes iff its exit code is exactly zero. Output content is never
/// consulted.
///
/// 执行一个 `TestCase` 的结果。
/// 当且仅当退出码恰好为零时测试通过，从不检查输出内容。
#[derive(Debug, Clone)]
pub struct TestResult {
    pub case: TestCase,
    /// Exit code of the process. Signals map to the negated signal number.
    /// `None` when the process never produced one (launch failure, killed by the runner).
    ///
    /// 进程的退出码。信号映射为信号编号的相反数。
    /// 当进程从未产生退出码时为 `None`（启动失败、被运行器终止）。
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    /// Why the test failed. Always `None` for a passed test.
    /// 测试失败的原因。对于通过的测试始终为 `None`。
    pub failure: Option<FailureReason>,
}

impl TestResult {
    /// Builds the result for a process that exited normally.
    pub fn exited(case: TestCase, code: i32, output: CapturedOutput, duration: Duration) -> Self {
        let failure = (code != 0).then_some(FailureReason::NonZeroExit);
        Self {
            case,
            exit_code: Some(code),
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
            failure,
        }
    }

    /// Builds the result for a process terminated by `signal`.
    pub fn signalled(
        case: TestCase,
        signal: i32,
        output: CapturedOutput,
        duration: Duration,
    ) -> Self {
        Self {
            case,
            exit_code: Some(-signal),
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
            failure: Some(FailureReason::Signal(signal)),
        }
    }

    /// Builds the result for an executable that could not be spawned.
    pub fn launch_failed(case: TestCase, message: impl Into<String>) -> Self {
        Self {
            case,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            failure: Some(FailureReason::Launch(message.into())),
        }
    }

    /// Builds the result for a process killed after exceeding `limit`.
    pub fn timed_out(
        case: TestCase,
        limit: Duration,
        output: CapturedOutput,
        duration: Duration,
    ) -> Self {
        Self {
            case,
            exit_code: None,
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
            failure: Some(FailureReason::Timeout(limit)),
        }
    }

    /// Builds the result for a process killed because the run was interrupted.
    pub fn cancelled(case: TestCase, output: CapturedOutput, duration: Duration) -> Self {
        Self {
            case,
            exit_code: None,
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
            failure: Some(FailureReason::Cancelled),
        }
    }

    pub fn passed(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn is_failure(&self) -> bool {
        !self.passed()
    }

    pub fn name(&self) -> &str {
        &self.case.name
    }
}

/// Aggregate over every result of a run.
///
/// Invariant: `passed + failed == total`.
///
/// 一次运行所有结果的汇总。
/// 不变式：`passed + failed == total`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Names of failed tests in execution order / 按执行顺序排列的失败测试名称
    pub failed_names: Vec<String>,
    /// Discovered tests that never started because the run was interrupted.
    /// 因运行被中断而未启动的已发现测试。
    pub not_run: usize,
    /// Sum of the individual test durations / 各测试耗时之和
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    /// Folds one result into the counters.
    pub fn record(&mut self, result: &TestResult) {
        self.total += 1;
        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failed_names.push(result.case.name.clone());
        }
        self.elapsed += result.duration;
    }

    /// Percentage of failed tests, or `None` when nothing ran.
    pub fn failure_percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.failed as f64 / self.total as f64 * 100.0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// `true` when every test passed and the run was not interrupted.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.not_run == 0
    }
}

/// Everything a finished run produced.
/// 一次完成的运行所产生的全部内容。
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<TestResult>,
    pub summary: RunSummary,
    pub interrupted: bool,
}
