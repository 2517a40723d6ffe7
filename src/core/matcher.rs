//! # Matcher Module / 匹配模块
//!
//! Aligns the expectations of a test script against the captured output of
//! the interpreter. Evaluation is a single linear pass without backtracking:
//! each expectation looks at the line under the cursor, and the cursor then
//! moves forward by a fixed amount depending on the expectation kind.
//!
//! 将测试脚本的期望与解释器捕获的输出对齐。
//! 评估是一次没有回溯的线性遍历：每个期望查看游标下的行，
//! 然后游标根据期望类型前进固定的行数。

use regex::Regex;

use crate::core::models::{CapturedRun, CheckResult, Expectation, ExpectationKind};

/// Number of output lines one interpreter error occupies: the message, its
/// location, the offending source line and the pointer beneath it.
///
/// This mirrors the error renderer of the interpreter. If that renderer
/// changes shape, this constant has to change with it.
///
/// 一个解释器错误所占的输出行数：消息、位置、出错的源代码行以及其下方的指针。
/// 它与解释器的错误渲染器保持一致；如果渲染器的格式改变，此常量也必须随之改变。
pub const ERROR_BLOCK_HEIGHT: usize = 4;

/// Number of output lines one printed value occupies.
pub const OUTPUT_LINE_HEIGHT: usize = 1;

pub const NO_EXPECTATIONS: &str = "The test contains no expectations";
pub const ABUNDANT_OUTPUT: &str = "Abundant output where none was expected";

impl ExpectationKind {
    /// How far the cursor moves after an expectation of this kind was checked,
    /// whether it matched or not.
    pub fn line_advance(&self) -> usize {
        match self {
            ExpectationKind::Output => OUTPUT_LINE_HEIGHT,
            ExpectationKind::Error => ERROR_BLOCK_HEIGHT,
        }
    }
}

impl Expectation {
    /// Matches the expectation against a single output line.
    ///
    /// `Output` expectations compare byte for byte without trimming. `Error`
    /// expectations search for their regex anywhere in the line; an invalid
    /// regex is returned as an error.
    ///
    /// 将期望与单个输出行进行匹配。
    pub fn matches(&self, line: &str) -> Result<bool, regex::Error> {
        match self.kind {
            ExpectationKind::Output => Ok(self.pattern == line),
            ExpectationKind::Error => Ok(Regex::new(&self.pattern)?.is_match(line)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Matching,
    Trailing,
    Done,
}

/// A pull-based evaluation of a test script's expectations against one run.
///
/// Iterating yields the results in report order:
/// 1. a single `Warn` if there are no expectations, and nothing else;
/// 2. otherwise an `Info` about the run (when the interpreter was run);
/// 3. one `Pass` or `Fail` per expectation;
/// 4. a single `Warn` if output lines remain past the cursor.
///
/// 针对一次运行对测试脚本期望进行的拉取式评估。
#[derive(Debug)]
pub struct Evaluation<'a> {
    expectations: &'a [Expectation],
    run: Option<&'a CapturedRun>,
    lines: &'a [String],
    next: usize,
    cursor: usize,
    state: State,
}

impl<'a> Evaluation<'a> {
    /// Creates an evaluation. `run` is `None` when the interpreter was not
    /// invoked, in which case there are no output lines to match.
    pub fn new(expectations: &'a [Expectation], run: Option<&'a CapturedRun>) -> Self {
        let lines = run.map(|run| run.output_lines.as_slice()).unwrap_or(&[]);
        Self {
            expectations,
            run,
            lines,
            next: 0,
            cursor: 0,
            state: State::Start,
        }
    }

    /// The index of the next output line to be examined.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn check(&mut self, expectation: &Expectation) -> CheckResult {
        let Some(line) = self.lines.get(self.cursor) else {
            // Past the end: report the miss without consuming a line.
            return CheckResult::Fail(format!("Missing expected {expectation}"));
        };

        let result = match expectation.matches(line) {
            Ok(true) => CheckResult::Pass(format!("Got expected output {expectation}")),
            Ok(false) => CheckResult::Fail(format!("Expected {expectation} but got \"{line}\"")),
            Err(e) => {
                log::warn!(
                    "invalid error pattern at line {}: {}",
                    expectation.source_line + 1,
                    e
                );
                CheckResult::Fail(format!("Invalid error pattern {expectation}: {e}"))
            }
        };

        self.cursor += expectation.kind.line_advance();
        result
    }
}

impl Iterator for Evaluation<'_> {
    type Item = CheckResult;

    fn next(&mut self) -> Option<CheckResult> {
        loop {
            match self.state {
                State::Start => {
                    if self.expectations.is_empty() {
                        self.state = State::Done;
                        return Some(CheckResult::Warn(NO_EXPECTATIONS.to_string()));
                    }
                    self.state = State::Matching;
                    if let Some(run) = self.run {
                        return Some(CheckResult::Info(format!(
                            "Tests were run in {:.0} ms resulting in exit code {}",
                            run.duration_seconds() * 1000.0,
                            run.exit_code
                        )));
                    }
                }
                State::Matching => {
                    let expectations = self.expectations;
                    match expectations.get(self.next) {
                        Some(expectation) => {
                            self.next += 1;
                            return Some(self.check(expectation));
                        }
                        None => self.state = State::Trailing,
                    }
                }
                State::Trailing => {
                    self.state = State::Done;
                    if self.cursor < self.lines.len() {
                        return Some(CheckResult::Warn(ABUNDANT_OUTPUT.to_string()));
                    }
                }
                State::Done => return None,
            }
        }
    }
}

/// Evaluates `expectations` against `run` and collects every result.
/// 针对 `run` 评估 `expectations` 并收集所有结果。
pub fn evaluate(expectations: &[Expectation], run: Option<&CapturedRun>) -> Vec<CheckResult> {
    Evaluation::new(expectations, run).collect()
}
