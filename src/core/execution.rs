//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs discovered test cases one after another. Each case is a
//! child process launched without arguments; its exit code alone decides the
//! result. A case that cannot be launched becomes a failed result and the run
//! carries on.
//!
//! 此模块依次运行发现的测试用例。每个用例都是一个不带参数启动的子进程，
//! 仅由其退出码决定结果。无法启动的用例会成为失败结果，运行继续进行。

use std::process::ExitStatus;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{OutputMode, RunSettings},
        error::RunnerError,
        models::{CapturedOutput, RunReport, RunSummary, TestCase, TestResult},
    },
    infra::command::{self, ProcessOutcome, ProcessRun},
    reporting::console,
};

/// Runs a single test case to completion and prints its status.
///
/// # Arguments
/// * `case` - The executable to run
/// * `settings` - Output mode and optional timeout
/// * `cancel` - Fires when the whole run is being interrupted
///
/// # Returns
/// The `TestResult`; launch problems are folded into a failed result.
pub async fn run_test_case(
    case: TestCase,
    settings: &RunSettings,
    cancel: &CancellationToken,
) -> TestResult {
    console::print_test_start(&case);

    let streaming = settings.output == OutputMode::Stream;
    let cmd = Command::new(&case.path);
    let start_time = Instant::now();

    let run = command::spawn_and_stream(cmd, settings.timeout, cancel, |line| {
        if streaming {
            console::print_stream_line(line);
        }
    })
    .await;
    let duration = start_time.elapsed();

    let result = match run {
        Ok(ProcessRun { outcome, output }) => match outcome {
            ProcessOutcome::Exited(status) => classify_exit(case, status, output, duration),
            ProcessOutcome::TimedOut => {
                let limit = settings.timeout.unwrap_or(Duration::ZERO);
                TestResult::timed_out(case, limit, output, duration)
            }
            ProcessOutcome::Cancelled => TestResult::cancelled(case, output, duration),
        },
        Err(e) => {
            let message = e.to_string();
            let error = RunnerError::launch(&case.path, e);
            tracing::debug!("{error}: {message}");
            TestResult::launch_failed(case, message)
        }
    };

    console::print_test_result(&result);
    result
}

/// Maps an exit status to a result. A signal becomes the negated signal number.
fn classify_exit(
    case: TestCase,
    status: ExitStatus,
    output: CapturedOutput,
    duration: Duration,
) -> TestResult {
    if let Some(code) = status.code() {
        return TestResult::exited(case, code, output, duration);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return TestResult::signalled(case, signal, output, duration);
        }
    }

    // Neither an exit code nor a signal: treat as a generic failure.
    TestResult::exited(case, -1, output, duration)
}

/// Runs every case sequentially, stopping early only if `cancel` fires.
///
/// Each process is fully drained and reaped before the next one starts.
pub async fn run_all(
    cases: Vec<TestCase>,
    settings: &RunSettings,
    cancel: &CancellationToken,
) -> RunReport {
    let total = cases.len();
    let mut results = Vec::with_capacity(total);
    let mut summary = RunSummary::default();

    for case in cases {
        if cancel.is_cancelled() {
            break;
        }
        let result = run_test_case(case, settings, cancel).await;
        summary.record(&result);
        results.push(result);
    }

    summary.not_run = total - results.len();
    RunReport {
        results,
        summary,
        interrupted: cancel.is_cancelled(),
    }
}
