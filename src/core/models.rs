//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the tester.
//! It includes models for expectations parsed from test scripts, captured
//! interpreter runs, check results and the suite-wide tally.
//!
//! 此模块定义了整个测试器中使用的核心数据结构。
//! 它包括从测试脚本中解析出的期望、捕获的解释器运行、检查结果以及整个套件的计数的模型。

use std::fmt;
use std::time::Duration;

/// The kind of an expectation, which decides how it is matched against an output line.
/// 期望的类型，决定了它如何与输出行进行匹配。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExpectationKind {
    /// The output line must be exactly equal to the pattern.
    /// 输出行必须与模式完全相等。
    Output,
    /// The pattern is a regular expression that must match somewhere in the output line.
    /// 模式是一个正则表达式，必须在输出行中的某处匹配。
    Error,
}

impl ExpectationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectationKind::Output => "output",
            ExpectationKind::Error => "error",
        }
    }
}

impl fmt::Display for ExpectationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single assertion about one line of interpreter output, derived from an
/// annotation in a test script.
///
/// 从测试脚本中的注解派生出的、关于解释器输出中某一行的单个断言。
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Expectation {
    /// How the pattern is matched / 模式的匹配方式
    pub kind: ExpectationKind,
    /// The literal line (for `Output`) or regex source (for `Error`).
    /// 字面行（用于 `Output`）或正则表达式源（用于 `Error`）。
    pub pattern: String,
    /// 0-based line index in the test script where the annotation was found.
    /// 注解所在测试脚本中的行索引（从 0 开始）。
    pub source_line: usize,
}

impl Expectation {
    pub fn output(pattern: impl Into<String>, source_line: usize) -> Self {
        Self {
            kind: ExpectationKind::Output,
            pattern: pattern.into(),
            source_line,
        }
    }

    pub fn error(pattern: impl Into<String>, source_line: usize) -> Self {
        Self {
            kind: ExpectationKind::Error,
            pattern: pattern.into(),
            source_line,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" for {} at line {}",
            self.pattern,
            self.kind,
            self.source_line + 1
        )
    }
}

/// The recorded outcome of executing the interpreter once on a test script.
/// Constructed once per execution and never mutated afterwards.
///
/// 在测试脚本上执行一次解释器的记录结果。
/// 每次执行构造一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRun {
    /// Wall-clock time spent waiting for the interpreter / 等待解释器所花费的实际时间
    pub duration: Duration,
    /// The exit status of the interpreter process / 解释器进程的退出状态
    pub exit_code: i32,
    /// Combined stdout and stderr, one entry per line, escape sequences removed.
    /// 合并的 stdout 和 stderr，每行一个条目，已移除转义序列。
    pub output_lines: Vec<String>,
}

impl CapturedRun {
    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// The kind of a reportable check result.
/// 可报告的检查结果的类型。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResultKind {
    Info,
    Pass,
    Fail,
    Warn,
}

/// One reportable outcome of evaluating a test script's expectations.
/// Results are consumed immediately by the suite, which only keeps the tally.
///
/// 评估测试脚本期望的一个可报告结果。
/// 结果会被套件立即消费，套件只保留计数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Informational line about the interpreter run / 关于解释器运行的信息行
    Info(String),
    /// An expectation was satisfied / 期望被满足
    Pass(String),
    /// An expectation was not satisfied / 期望未被满足
    Fail(String),
    /// The test script is suspicious but did not fail / 测试脚本可疑但未失败
    Warn(String),
}

impl CheckResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            CheckResult::Info(_) => ResultKind::Info,
            CheckResult::Pass(_) => ResultKind::Pass,
            CheckResult::Fail(_) => ResultKind::Fail,
            CheckResult::Warn(_) => ResultKind::Warn,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CheckResult::Info(message)
            | CheckResult::Pass(message)
            | CheckResult::Fail(message)
            | CheckResult::Warn(message) => message,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass(_))
    }

    /// Checks if the result marks its test script as not fully passed.
    /// Both failures and warnings count, which triggers the output dump.
    ///
    /// 检查该结果是否将其测试脚本标记为未完全通过。
    /// 失败和警告都算在内，这会触发输出转储。
    pub fn is_problem(&self) -> bool {
        matches!(self, CheckResult::Fail(_) | CheckResult::Warn(_))
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Counts of passes, fails and warnings accumulated across a whole suite run.
/// 整个套件运行中累计的通过、失败和警告的计数。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunnerTally {
    pub passes: usize,
    pub fails: usize,
    pub warnings: usize,
}

impl RunnerTally {
    /// Adds a single result to the tally. `Info` results are not counted.
    /// 将单个结果计入。`Info` 结果不计数。
    pub fn record(&mut self, result: &CheckResult) {
        match result.kind() {
            ResultKind::Pass => self.passes += 1,
            ResultKind::Fail => self.fails += 1,
            ResultKind::Warn => self.warnings += 1,
            ResultKind::Info => {}
        }
    }

    /// The suite succeeds unless at least one expectation failed.
    /// Warnings never fail the suite.
    ///
    /// 除非至少有一个期望失败，否则套件成功。警告永远不会导致套件失败。
    pub fn is_success(&self) -> bool {
        self.fails == 0
    }
}

