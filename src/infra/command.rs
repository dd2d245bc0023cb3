//! # Command Execution Module / 命令执行模块
//!
//! Spawns a test process and drains its output. Stdout is read line by line in
//! the calling task so each line can be handed to a callback as soon as it
//! arrives. Stderr is drained by a separate task into a shared buffer so a
//! chatty stderr can never block the child.
//!
//! 启动测试进程并读取其输出。stdout 在调用任务中逐行读取，
//! 以便每一行到达后立即交给回调处理。stderr 由单独的任务读取到共享缓冲区，
//! 因此大量的 stderr 输出永远不会阻塞子进程。

use std::io;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::models::CapturedOutput;
use crate::infra::t;

/// How long a pipe may stay open once the child is gone. A background process
/// the test left behind can hold it open indefinitely.
const OUTPUT_GRACE: Duration = Duration::from_millis(250);

/// How a spawned process came to an end.
/// 已启动进程的结束方式。
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The process exited on its own (normally or through a signal).
    Exited(ExitStatus),
    /// The time limit elapsed and the process was killed.
    TimedOut,
    /// The cancellation token fired and the process was killed.
    Cancelled,
}

/// Everything observed about one finished process.
#[derive(Debug)]
pub struct ProcessRun {
    pub outcome: ProcessOutcome,
    pub output: CapturedOutput,
}

/// Spawns `cmd`, feeds each stdout line to `on_line`, and waits for the exit.
///
/// Stdout is read while waiting for the exit status. Once the child has exited,
/// the rest of both pipes is drained for at most `OUTPUT_GRACE`, so a leftover
/// background process cannot turn a finished test into a timeout. If `limit`
/// elapses or `cancel` fires before the child exits, the child is killed and
/// whatever was captured so far is returned.
///
/// # Returns
/// `Err` only when the process could not be spawned or waited on.
///
/// 启动 `cmd`，将每一行 stdout 交给 `on_line`，并等待进程退出。
/// 等待退出状态的同时读取 stdout。子进程退出后，两个管道的剩余内容最多再读取
/// `OUTPUT_GRACE`，因此遗留的后台进程不会让已结束的测试变成超时。
/// 如果在子进程退出前到达 `limit` 或 `cancel` 被触发，则终止子进程并返回已捕获的内容。
pub async fn spawn_and_stream<F>(
    mut cmd: Command,
    limit: Option<Duration>,
    cancel: &CancellationToken,
    mut on_line: F,
) -> io::Result<ProcessRun>
where
    F: FnMut(&str),
{
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other(t!("run.capture_stdout_failed").to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other(t!("run.capture_stderr_failed").to_string()))?;

    let stderr_buf = Arc::new(Mutex::new(Vec::new()));
    let mut stderr_handle = {
        let sink = Arc::clone(&stderr_buf);
        tokio::spawn(async move {
            let mut reader = BufReader::new(stderr);
            let mut chunk = Vec::new();
            while read_line(&mut reader, &mut chunk).await {
                sink.lock().await.extend_from_slice(&chunk);
                chunk.clear();
            }
        })
    };

    let mut reader = BufReader::new(stdout);
    let mut chunk = Vec::new();
    let mut stdout_text = String::new();
    let waited = tokio::select! {
        status = stream_until_exit(&mut child, &mut reader, &mut chunk, &mut stdout_text, &mut on_line) => Ok(status),
        _ = deadline(limit) => Err(ProcessOutcome::TimedOut),
        _ = cancel.cancelled() => Err(ProcessOutcome::Cancelled),
    };

    let outcome = match waited {
        Ok(status) => {
            let status = status?;
            let rest = async {
                while read_line(&mut reader, &mut chunk).await {
                    emit_line(&mut chunk, &mut stdout_text, &mut on_line);
                }
            };
            if tokio::time::timeout(OUTPUT_GRACE, rest).await.is_err() {
                tracing::debug!("stdout still open after the test exited");
            }
            ProcessOutcome::Exited(status)
        }
        Err(killed) => {
            if let Err(e) = child.kill().await {
                tracing::debug!("kill after {killed:?} failed: {e}");
            }
            killed
        }
    };
    settle_stderr(&mut stderr_handle).await;

    let stderr_text = String::from_utf8_lossy(&stderr_buf.lock().await).into_owned();
    Ok(ProcessRun {
        outcome,
        output: CapturedOutput {
            stdout: stdout_text,
            stderr: stderr_text,
        },
    })
}

/// Streams stdout lines until the process exits or stdout reaches end-of-stream,
/// whichever comes first, and returns the exit status.
async fn stream_until_exit<F>(
    child: &mut Child,
    reader: &mut BufReader<ChildStdout>,
    chunk: &mut Vec<u8>,
    captured: &mut String,
    on_line: &mut F,
) -> io::Result<ExitStatus>
where
    F: FnMut(&str),
{
    loop {
        tokio::select! {
            biased;
            more = read_line(reader, chunk) => {
                if !more {
                    return child.wait().await;
                }
                emit_line(chunk, captured, on_line);
            }
            status = child.wait() => return status,
        }
    }
}

/// Hands one complete (or final partial) line to `on_line` and empties `chunk`.
fn emit_line<F>(chunk: &mut Vec<u8>, captured: &mut String, on_line: &mut F)
where
    F: FnMut(&str),
{
    {
        let line = String::from_utf8_lossy(chunk);
        captured.push_str(&line);
        on_line(line.trim_end_matches(['\n', '\r']));
    }
    chunk.clear();
}

/// Waits up to `OUTPUT_GRACE` for the stderr reader, then gives up on it.
async fn settle_stderr(handle: &mut JoinHandle<()>) {
    match tokio::time::timeout(OUTPUT_GRACE, &mut *handle).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("stderr reader task failed: {e}"),
        Err(_) => {
            tracing::debug!("stderr still open after the test exited");
            handle.abort();
        }
    }
}

/// Appends one `\n`-terminated chunk to `buf`. Returns `false` at end-of-stream.
///
/// Bytes already read stay in `buf` if the future is dropped, so a cancelled
/// call can simply be repeated.
async fn read_line<R>(reader: &mut BufReader<R>, buf: &mut Vec<u8>) -> bool
where
    R: AsyncRead + Unpin,
{
    match reader.read_until(b'\n', buf).await {
        Ok(0) => false,
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("error reading test output: {e}");
            false
        }
    }
}

/// Resolves after `limit`, or never when there is no limit.
async fn deadline(limit: Option<Duration>) {
    match limit {
        Some(limit) => tokio::time::sleep(limit).await,
        None => std::future::pending().await,
    }
}
