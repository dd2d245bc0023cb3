//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the per-test status lines and the final summary.
//! The failure block and the summary are rendered to a `String` first so they
//! can be checked without capturing stdout.
//!
//! 此模块打印每个测试的状态行和最终汇总。
//! 失败详情块和汇总会先渲染为 `String`，以便无需捕获 stdout 即可检查。

use std::time::Duration;

use crate::core::discovery::DiscoveredTests;
use crate::core::models::{FailureReason, RunSummary, TestCase, TestResult};
use crate::infra::t;
use crate::reporting::theme::Style;

/// Prints the directory being tested and how many tests were found.
pub fn print_run_header(tests: &DiscoveredTests) {
    println!(
        "{} {}",
        Style::Info.paint(t!("run.running_in")),
        Style::Highlight.paint(tests.root.display().to_string())
    );
    println!(
        "{}",
        Style::Info.paint(t!("run.discovered", count = tests.len()))
    );
}

/// Announces the test about to run.
pub fn print_test_start(case: &TestCase) {
    println!(
        "\n{} {}...",
        Style::Info.paint(t!("run.executing")),
        Style::Highlight.paint(&case.name)
    );
}

/// Echoes one line of a running test's stdout.
pub fn print_stream_line(line: &str) {
    println!("{} {}", Style::Muted.paint("  │"), line);
}

/// Prints the pass marker, or the full failure block.
pub fn print_test_result(result: &TestResult) {
    if result.passed() {
        println!(
            "{}",
            Style::Pass.paint(t!(
                "run.test_passed",
                name = result.name(),
                duration = format_duration(result.duration)
            ))
        );
    } else {
        print!("{}", render_failure(result));
    }
}

/// Renders the report for a failed test: status line, return code or reason,
/// then the captured stdout and stderr (each only if non-empty).
///
/// 渲染失败测试的报告：状态行、返回码或原因，
/// 然后是捕获的 stdout 和 stderr（仅在非空时输出）。
pub fn render_failure(result: &TestResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        Style::Fail.paint(t!(
            "run.test_failed",
            name = result.name(),
            duration = format_duration(result.duration)
        ))
    ));

    let reason_line = match &result.failure {
        Some(FailureReason::Signal(signal)) => format!(
            "{} {} {}",
            Style::Fail.paint(t!("run.return_code")),
            Style::Header.paint(return_code(result)),
            t!("run.terminated_by_signal", signal = signal)
        ),
        Some(FailureReason::Launch(message)) => format!(
            "{} {}",
            Style::Fail.paint(t!("run.launch_failed")),
            message
        ),
        Some(FailureReason::Timeout(limit)) => Style::Fail
            .paint(t!("run.timed_out", secs = limit.as_secs()))
            .to_string(),
        Some(FailureReason::Cancelled) => Style::Fail.paint(t!("run.cancelled")).to_string(),
        Some(FailureReason::NonZeroExit) | None => format!(
            "{} {}",
            Style::Fail.paint(t!("run.return_code")),
            Style::Header.paint(return_code(result))
        ),
    };
    out.push_str(&reason_line);
    out.push('\n');

    if !result.stdout.trim().is_empty() {
        out.push_str(&format!(
            "{}\n{}\n",
            Style::Header.paint(t!("run.output_header")),
            result.stdout.trim_end()
        ));
    }
    if !result.stderr.trim().is_empty() {
        out.push_str(&format!(
            "{}\n{}\n",
            Style::Header.paint(t!("run.error_header")),
            result.stderr.trim_end()
        ));
    }
    out
}

/// Renders the end-of-run summary block.
///
/// The failure percentage only appears when at least one test ran. The "no
/// tests found" notice is reserved for a directory with nothing to run.
///
/// 渲染运行结束时的汇总块。
/// 仅在至少运行了一个测试时才显示失败百分比；“未找到测试”提示仅用于没有可运行测试的目录。
///
/// # Output Format / 输出格式
/// ```text
/// Test Summary:
/// Total Tests: 2
/// Passed: 1
/// Failed: 1
/// Failure %: 50.00%
/// Failed tests:
///   - 02_fail
/// Time: 0.03s
/// ```
pub fn render_summary(summary: &RunSummary) -> String {
    let mut lines = vec![
        String::new(),
        Style::Info.paint(t!("summary.banner")).to_string(),
        format!(
            "{} {}",
            t!("summary.total"),
            Style::Header.paint(summary.total.to_string())
        ),
        format!(
            "{} {}",
            Style::Pass.paint(t!("summary.passed")),
            Style::Header.paint(summary.passed.to_string())
        ),
        format!(
            "{} {}",
            Style::Fail.paint(t!("summary.failed")),
            Style::Header.paint(summary.failed.to_string())
        ),
    ];

    match summary.failure_percent() {
        Some(percent) => lines.push(format!(
            "{} {}",
            Style::Info.paint(t!("summary.failure_percent")),
            Style::Header.paint(format!("{percent:.2}%"))
        )),
        // Interrupted before the first result: tests exist, none finished.
        None if summary.not_run > 0 => {}
        None => lines.push(Style::Highlight.paint(t!("summary.no_tests")).to_string()),
    }

    if !summary.failed_names.is_empty() {
        lines.push(Style::Fail.paint(t!("summary.failed_tests")).to_string());
        for name in &summary.failed_names {
            lines.push(format!("  - {}", Style::Fail.paint(name)));
        }
    }

    if summary.not_run > 0 {
        lines.push(
            Style::Highlight
                .paint(t!("summary.not_run", count = summary.not_run))
                .to_string(),
        );
    }

    if !summary.is_empty() {
        lines.push(format!(
            "{} {}",
            t!("summary.elapsed"),
            format_duration(summary.elapsed)
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Prints the end-of-run summary block.
pub fn print_summary(summary: &RunSummary) {
    print!("{}", render_summary(summary));
}

/// Prints the discovered tests without running them.
pub fn print_test_list(tests: &DiscoveredTests) {
    println!(
        "{} {}",
        Style::Info.paint(t!("list.header")),
        Style::Highlight.paint(tests.root.display().to_string())
    );
    if tests.is_empty() {
        println!("{}", Style::Highlight.paint(t!("summary.no_tests")));
        return;
    }
    for case in &tests.cases {
        println!("  {}", case.name);
    }
}

fn return_code(result: &TestResult) -> String {
    result
        .exit_code
        .map(|code| code.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}
