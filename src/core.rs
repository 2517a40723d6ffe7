//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the tester: parsing
//! expectations out of test scripts, matching them against interpreter output
//! and running whole suites.
//!
//! 此模块包含测试器的核心功能：从测试脚本中解析期望、
//! 将其与解释器输出进行匹配以及运行整个套件。

pub mod config;
pub mod error;
pub mod expectation;
pub mod matcher;
pub mod models;
pub mod suite;

// Re-exports
pub use error::RunnerError;
pub use expectation::{TestFile, parse_expectations};
pub use matcher::{Evaluation, evaluate};
pub use models::{CapturedRun, CheckResult, Expectation, ExpectationKind, RunnerTally};
pub use suite::{RunOptions, TestRunner};
