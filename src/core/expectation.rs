//! # Expectation Parser Module / 期望解析模块
//!
//! Scans the text of a test script for annotation markers and turns them into
//! an ordered list of expectations.
//!
//! - `--> <message>` expects an output line exactly equal to `<message>`.
//! - `-- expect error: <message>` expects an output line matching the regex `<message>`.
//!
//! 扫描测试脚本文本中的注解标记，并将它们转换为有序的期望列表。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunnerError;
use crate::core::models::Expectation;

static EXPECT_OUTPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-->\s*(.+)$").expect("output marker regex is valid"));

static EXPECT_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-- expect error:\s*(.+)$").expect("error marker regex is valid")
});

/// Parses every expectation annotated in `source`, in file order.
///
/// A line holding both markers produces two expectations: the output one
/// first, then the error one. Error patterns are not compiled here; an
/// invalid regex only surfaces when it is matched.
///
/// 按文件顺序解析 `source` 中注解的所有期望。
/// 同时包含两种标记的行会产生两个期望：先输出期望，后错误期望。
pub fn parse_expectations(source: &str) -> Vec<Expectation> {
    let mut expectations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if let Some(captures) = EXPECT_OUTPUT.captures(line) {
            expectations.push(Expectation::output(&captures[1], index));
        }
        if let Some(captures) = EXPECT_ERROR.captures(line) {
            expectations.push(Expectation::error(&captures[1], index));
        }
    }

    expectations
}

/// A single test script together with the expectations annotated in it.
/// 单个测试脚本及其中注解的期望。
#[derive(Debug, Clone)]
pub struct TestFile {
    pub path: PathBuf,
    pub expectations: Vec<Expectation>,
}

impl TestFile {
    /// Reads the test script at `path` and parses its expectations.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let bytes = fs::read(path).map_err(|source| RunnerError::ReadTest {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(Self::from_source(path, &source))
    }

    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Self {
        Self {
            path: path.into(),
            expectations: parse_expectations(source),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

impl fmt::Display for TestFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.expectations.len();
        write!(
            f,
            "{} test{} in file {}",
            count,
            if count == 1 { "" } else { "s" },
            self.path.display()
        )
    }
}
