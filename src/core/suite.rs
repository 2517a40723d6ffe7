//! # Suite Runner Module / 套件运行模块
//!
//! Walks a suite path, runs every test script through the interpreter one at
//! a time, prints each check result as it is produced and accumulates the
//! tally. Only a launch failure or an unreadable directory stops the suite;
//! every other problem stays inside the test script it belongs to.
//!
//! 遍历套件路径，逐个通过解释器运行每个测试脚本，在产生检查结果时立即打印，
//! 并累计计数。只有启动失败或无法读取的目录才会停止套件；
//! 其他所有问题都仅限于其所属的测试脚本。

use std::path::{Path, PathBuf};

use crate::core::error::RunnerError;
use crate::core::expectation::TestFile;
use crate::core::matcher::Evaluation;
use crate::core::models::{CapturedRun, CheckResult, RunnerTally};
use crate::infra::{command, fs};
use crate::reporting::console;

/// Options controlling how a suite is run and reported.
/// 控制套件如何运行和报告的选项。
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The interpreter executable / 解释器可执行文件
    pub interpreter: PathBuf,
    /// Test script extension without the dot / 不含点的测试脚本扩展名
    pub extension: String,
    /// Count passing results without printing them / 计数但不打印通过的结果
    pub hide_passes: bool,
}

/// The outcome of one test script, kept until it has been reported.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub results: Vec<CheckResult>,
    /// `None` when the interpreter was not invoked.
    pub run: Option<CapturedRun>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        !self.results.iter().any(CheckResult::is_problem)
    }
}

/// Runs test scripts and owns the suite-wide tally.
/// 运行测试脚本并持有整个套件的计数。
#[derive(Debug)]
pub struct TestRunner {
    options: RunOptions,
    tally: RunnerTally,
}

impl TestRunner {
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            tally: RunnerTally::default(),
        }
    }

    pub fn tally(&self) -> RunnerTally {
        self.tally
    }

    /// Tests the file or directory at `path` and returns the accumulated tally.
    pub async fn test(mut self, path: &Path) -> Result<RunnerTally, RunnerError> {
        let files = fs::discover_test_files(path, &self.options.extension)?;
        log::info!(
            "found {} test file{} under {}",
            files.len(),
            console::plural(files.len()),
            path.display()
        );

        for file in files {
            self.test_file(&file).await?;
        }
        Ok(self.tally)
    }

    /// Runs a single test script, reports it and adds it to the tally.
    pub async fn test_file(&mut self, path: &Path) -> Result<FileReport, RunnerError> {
        let path = fs::absolute_path(path);
        let report = match TestFile::load(&path) {
            Ok(test) => {
                console::print_test_header(&test);
                self.evaluate(&test).await?
            }
            Err(e) if !e.is_fatal() => {
                log::warn!("{}", e);
                let report = FileReport {
                    path: path.clone(),
                    results: vec![CheckResult::Fail(format!(
                        "Could not read test file {}",
                        path.display()
                    ))],
                    run: None,
                };
                self.report(&report.results);
                report
            }
            Err(e) => return Err(e),
        };

        if !report.passed() {
            if let Some(run) = &report.run {
                console::print_console_output(&report.path, &run.output_lines);
            }
        }
        console::divider();

        Ok(report)
    }

    async fn evaluate(&mut self, test: &TestFile) -> Result<FileReport, RunnerError> {
        // Without expectations there is nothing to check, so the interpreter is not run.
        let run = if test.is_empty() {
            None
        } else {
            Some(command::run_interpreter(&self.options.interpreter, &test.path).await?)
        };

        let mut results = Vec::new();
        for result in Evaluation::new(&test.expectations, run.as_ref()) {
            self.report(std::slice::from_ref(&result));
            results.push(result);
        }

        Ok(FileReport {
            path: test.path.clone(),
            results,
            run,
        })
    }

    fn report(&mut self, results: &[CheckResult]) {
        for result in results {
            if !(self.options.hide_passes && result.is_pass()) {
                console::print_result(result);
            }
            self.tally.record(result);
        }
    }
}
