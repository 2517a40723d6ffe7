//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of test reports in the console: the header
//! of each test script, one line per check result, the numbered output dump of
//! scripts that did not fully pass, and the final summary.
//!
//! 此模块处理控制台中测试报告的显示：每个测试脚本的标题、每个检查结果一行、
//! 未完全通过的脚本的带编号输出转储，以及最终摘要。

use colored::*;
use std::path::Path;

use crate::core::expectation::TestFile;
use crate::core::models::{CheckResult, RunnerTally};

const DIVIDER_WIDTH: usize = 80;

/// Returns a plural "s" unless the count is exactly one.
pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

pub fn divider() {
    println!("{}", "─".repeat(DIVIDER_WIDTH));
}

pub fn print_test_header(test: &TestFile) {
    println!("{}", format!("Running {test}:").bold());
    println!();
}

/// Renders a single check result the way it appears in the report.
///
/// 按报告中的显示方式渲染单个检查结果。
///
/// # Output Format / 输出格式
/// ```text
/// [✓] Tests were run in 12 ms resulting in exit code 0
/// [✓] Got expected output "4" for output at line 2
/// [ ] Expected "5" for output at line 3 but got "6"
/// [ ] Abundant output where none was expected
/// ```
pub fn format_result(result: &CheckResult) -> String {
    let message = result.message();
    match result {
        CheckResult::Info(_) => format!("{}{}", "[✓] ".dimmed(), message),
        CheckResult::Pass(_) => format!("{}{}", "[✓] ".dimmed(), message.green()),
        CheckResult::Warn(_) => format!("{}{}", "[ ] ".dimmed(), message.yellow()),
        CheckResult::Fail(_) => format!("{}{}", "[ ] ".dimmed(), message.red()),
    }
}

pub fn print_result(result: &CheckResult) {
    println!("{}", format_result(result));
}

/// Formats one line of captured output with its 1-based line number.
pub fn format_output_line(index: usize, line: &str) -> String {
    format!("{:>3} │ {}", index + 1, line.dimmed())
}

/// Prints the captured output of a test script that did not fully pass.
/// 打印未完全通过的测试脚本的捕获输出。
pub fn print_console_output(path: &Path, lines: &[String]) {
    println!();
    println!("Console output for {}:", path.display());
    for (index, line) in lines.iter().enumerate() {
        println!("{}", format_output_line(index, line));
    }
}

/// Formats the one-line count summary, e.g. `3 tests passed, 1 test failed, 0 warnings`.
pub fn format_counts(tally: &RunnerTally) -> String {
    format!(
        "{} test{} passed, {} test{} failed, {} warning{}",
        tally.passes.to_string().green().bold(),
        plural(tally.passes),
        tally.fails.to_string().red().bold(),
        plural(tally.fails),
        tally.warnings.to_string().yellow().bold(),
        plural(tally.warnings),
    )
}

/// Prints the final summary of a suite run.
/// 打印套件运行的最终摘要。
pub fn print_summary(suite_path: &Path, tally: &RunnerTally) {
    println!("Test results for {}:", suite_path.display());
    println!("{}", format_counts(tally));
}
