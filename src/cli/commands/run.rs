//! # Run Command Module / 运行命令模块
//!
//! This module implements the default command of the Exec Runner CLI: discover
//! the executables in the test directory, run them one by one, and print the
//! summary.
//!
//! 此模块实现 Exec Runner CLI 的默认命令：发现测试目录中的可执行文件，
//! 逐个运行它们，并打印汇总。

use anyhow::{Context, Result};
use std::process::ExitCode;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{config::RunSettings, discovery::discover_tests, execution::run_all},
    infra::t,
    reporting::{apply_color_choice, console, theme::Style},
};

/// Executes the run command with the resolved settings.
///
/// # Arguments
/// * `settings` - Resolved settings (directory, filters, output mode, timeout)
/// * `list_only` - Print the discovered tests and stop
///
/// # Returns
/// `ExitCode::SUCCESS` when every test passed (or none were found),
/// `ExitCode::FAILURE` when any test failed or the run was interrupted.
pub async fn execute(settings: RunSettings, list_only: bool) -> Result<ExitCode> {
    apply_color_choice(settings.color);

    let tests = discover_tests(&settings.test_dir, settings.numeric_prefix)
        .context("test discovery failed")?;

    if list_only {
        console::print_test_list(&tests);
        return Ok(ExitCode::SUCCESS);
    }

    console::print_run_header(&tests);

    let stop_token = setup_signal_handler();
    let report = run_all(tests.cases, &settings, &stop_token).await;

    console::print_summary(&report.summary);

    if report.summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Sets up a Ctrl-C handler that cancels the run.
fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                println!("\n{}", Style::Highlight.paint(t!("run.shutdown_signal")));
                token_clone.cancel();
            }
            Err(e) => tracing::warn!("failed to listen for Ctrl-C: {e}"),
        }
    });

    token
}
