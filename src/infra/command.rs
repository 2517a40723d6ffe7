//! # Command Execution Module / 命令执行模块
//!
//! Runs the interpreter on a test script and captures what it printed.
//! Stdout and stderr share one pipe and arrive as a single text stream,
//! which is then split into lines with terminal escape sequences removed.
//!
//! 在测试脚本上运行解释器并捕获其输出。
//! stdout 和 stderr 共享一个管道，作为单个文本流到达，
//! 然后按行拆分并移除终端转义序列。

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead, BufReader, PipeReader};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use crate::core::error::RunnerError;
use crate::core::models::CapturedRun;

static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("escape sequence regex is valid")
});

/// Removes ANSI/VT100 escape sequences from a string.
/// 从字符串中移除 ANSI/VT100 转义序列。
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Splits captured text into output lines.
///
/// The text is split on `\n` and escape sequences are stripped per line. A
/// single trailing empty line, left behind by a final newline, is dropped.
///
/// 将捕获的文本拆分为输出行。
/// 文本按 `\n` 拆分，并逐行去除转义序列。由末尾换行符留下的单个空行会被丢弃。
pub fn split_output(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(strip_ansi).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Converts an exit status into a plain code. Processes killed by a signal
/// report the negated signal number on Unix.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

/// Reads the shared pipe segment by segment until every write end is closed.
/// Each segment is decoded lossily and appended newline terminated.
///
/// 逐段读取共享管道，直到所有写端关闭。每段按有损方式解码并以换行符结尾追加。
fn read_merged(reader: PipeReader) -> String {
    let mut output = String::new();
    for segment in BufReader::new(reader).split(b'\n') {
        match segment {
            Ok(mut segment) => {
                if segment.last() == Some(&b'\r') {
                    segment.pop();
                }
                output.push_str(&String::from_utf8_lossy(&segment));
                output.push('\n');
            }
            Err(e) => {
                log::warn!("stopped reading interpreter output: {}", e);
                break;
            }
        }
    }
    output
}

/// Spawns a command and captures its stdout and stderr.
///
/// Both streams are attached to the write end of one OS pipe, so the text
/// comes back in the exact order the process wrote it.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令并捕获其 stdout 和 stderr。
/// 两个流都连接到同一个操作系统管道的写端，因此文本按进程写入的确切顺序返回。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, String) {
    let (reader, writer) = match io::pipe() {
        Ok(pipe) => pipe,
        Err(e) => return (Err(e), String::new()),
    };
    let stderr_writer = match writer.try_clone() {
        Ok(clone) => clone,
        Err(e) => return (Err(e), String::new()),
    };

    let spawned = cmd
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer)
        .spawn();
    // The command keeps the parent's write ends alive; the reader only sees
    // EOF once they are gone.
    drop(cmd);

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let reader_handle = tokio::task::spawn_blocking(move || read_merged(reader));

    let status = child.wait().await;

    // Drain the pipe so nothing printed right before exit is lost.
    let output = match reader_handle.await {
        Ok(output) => output,
        Err(e) => {
            log::error!("failed to join output reader task: {}", e);
            String::new()
        }
    };

    (status, output)
}

/// Runs `interpreter` with `test_path` as its only argument and records the run.
///
/// Exactly one process is spawned per call. There is no timeout: an
/// interpreter that never exits blocks the caller.
///
/// 以 `test_path` 作为唯一参数运行 `interpreter` 并记录本次运行。
pub async fn run_interpreter(interpreter: &Path, test_path: &Path) -> Result<CapturedRun, RunnerError> {
    log::debug!(
        "running {} {}",
        interpreter.display(),
        test_path.display()
    );

    let mut cmd = tokio::process::Command::new(interpreter);
    cmd.arg(test_path).kill_on_drop(true);

    let start_time = Instant::now();
    let (status_res, output) = spawn_and_capture(cmd).await;
    let duration = start_time.elapsed();

    let status = status_res.map_err(|source| RunnerError::Launch {
        interpreter: interpreter.to_path_buf(),
        source,
    })?;

    let run = CapturedRun {
        duration,
        exit_code: exit_code(&status),
        output_lines: split_output(&output),
    };
    log::debug!(
        "{} exited with code {} after {:.3}s ({} lines)",
        test_path.display(),
        run.exit_code,
        run.duration_seconds(),
        run.output_lines.len()
    );

    Ok(run)
}
