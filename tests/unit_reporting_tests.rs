//! # Reporting Module Unit Tests / Reporting 模块单元测试
//!
//! Tests for the rendered failure block and end-of-run summary.
//!
//! 测试渲染后的失败详情块和运行结束汇总。

use exec_runner::config::ColorChoice;
use exec_runner::models::{CapturedOutput, RunSummary, TestCase, TestResult};
use exec_runner::reporting::{apply_color_choice, render_failure, render_summary};
use std::time::Duration;

/// Every test in this binary renders plain English.
/// 此测试二进制中的所有测试都渲染无颜色的英文输出。
fn setup() {
    exec_runner::init_locale(Some("en"));
    apply_color_choice(ColorChoice::Never);
}

fn failed(name: &str, code: i32, stdout: &str, stderr: &str) -> TestResult {
    TestResult::exited(
        TestCase::new(format!("/suite/{name}")),
        code,
        CapturedOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        },
        Duration::from_millis(40),
    )
}

#[cfg(test)]
mod failure_block_tests {
    use super::*;

    #[test]
    fn test_failure_shows_code_and_both_streams() {
        setup();
        let text = render_failure(&failed("02_fail", 1, "partial output\n", "boom\n"));

        assert!(text.contains("✘ Test Failed: 02_fail (0.04s)"));
        assert!(text.contains("Return Code: 1"));
        assert!(text.contains("--- Output ---\npartial output\n"));
        assert!(text.contains("--- Error ---\nboom\n"));
    }

    #[test]
    fn test_empty_streams_are_omitted() {
        setup();
        let text = render_failure(&failed("03_quiet", 2, "", "  \n"));

        assert!(text.contains("Return Code: 2"));
        assert!(!text.contains("--- Output ---"));
        assert!(!text.contains("--- Error ---"));
    }

    #[test]
    fn test_signal_is_explained() {
        setup();
        let result = TestResult::signalled(
            TestCase::new("/suite/04_crash"),
            11,
            CapturedOutput::default(),
            Duration::ZERO,
        );
        let text = render_failure(&result);

        assert!(text.contains("Return Code: -11"));
        assert!(text.contains("terminated by signal 11"));
    }

    #[test]
    fn test_launch_failure_message() {
        setup();
        let result = TestResult::launch_failed(TestCase::new("/suite/05_gone"), "permission denied");
        let text = render_failure(&result);

        assert!(text.contains("Could not launch test: permission denied"));
        assert!(!text.contains("Return Code"));
    }

    #[test]
    fn test_timeout_message() {
        setup();
        let result = TestResult::timed_out(
            TestCase::new("/suite/06_slow"),
            Duration::from_secs(5),
            CapturedOutput::default(),
            Duration::from_secs(5),
        );
        let text = render_failure(&result);

        assert!(text.contains("Timed out after 5s"));
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_half_failed_summary() {
        setup();
        let summary = RunSummary::from_results(&[
            failed("01_ok", 0, "", ""),
            failed("02_fail", 1, "", "boom"),
        ]);
        let text = render_summary(&summary);

        assert!(text.contains("Test Summary:"));
        assert!(text.contains("Total Tests: 2"));
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("Failure %: 50.00%"));
        assert!(text.contains("  - 02_fail"));
        assert!(!text.contains("No tests found!"));
    }

    #[test]
    fn test_percentage_has_two_decimals() {
        setup();
        let summary = RunSummary::from_results(&[
            failed("a", 0, "", ""),
            failed("b", 0, "", ""),
            failed("c", 1, "", ""),
        ]);

        assert!(render_summary(&summary).contains("Failure %: 33.33%"));
    }

    #[test]
    fn test_all_passed_has_zero_percent_and_no_failed_list() {
        setup();
        let summary = RunSummary::from_results(&[failed("a", 0, "", "")]);
        let text = render_summary(&summary);

        assert!(text.contains("Failure %: 0.00%"));
        assert!(!text.contains("Failed tests:"));
    }

    #[test]
    fn test_empty_summary() {
        setup();
        let text = render_summary(&RunSummary::default());

        assert!(text.contains("Total Tests: 0"));
        assert!(text.contains("Passed: 0"));
        assert!(text.contains("Failed: 0"));
        assert!(text.contains("No tests found!"));
        assert!(!text.contains("Failure %"));
    }

    #[test]
    fn test_interrupted_before_first_result_is_not_an_empty_directory() {
        setup();
        let summary = RunSummary {
            not_run: 2,
            ..Default::default()
        };
        let text = render_summary(&summary);

        assert!(text.contains("Total Tests: 0"));
        assert!(text.contains("2 test(s) were not run"));
        assert!(!text.contains("No tests found!"));
        assert!(!text.contains("Failure %"));
    }

    #[test]
    fn test_interrupted_summary_mentions_skipped_tests() {
        setup();
        let mut summary = RunSummary::from_results(&[failed("a", 0, "", "")]);
        summary.not_run = 3;

        assert!(render_summary(&summary).contains("3 test(s) were not run"));
    }
}
