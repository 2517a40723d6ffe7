//! # Dauw Tester Library / Dauw 测试器库
//!
//! This library provides the core functionality for the Dauw tester,
//! a conformance test runner that checks the output of the Dauw interpreter
//! against expectations embedded as comments in test scripts.
//!
//! 此库为 Dauw 测试器提供核心功能，
//! 这是一个一致性测试运行器，用于根据测试脚本中以注释形式嵌入的期望检查 Dauw 解释器的输出。
//!
//! ## Modules / 模块
//!
//! - `core` - Expectation parsing, matching and suite execution
//! - `infra` - Infrastructure services like process execution and file discovery
//! - `reporting` - Console reporting
//! - `cli` - Command-line interface
//!
//! - `core` - 期望解析、匹配和套件执行
//! - `infra` - 基础设施服务，如进程执行和文件发现
//! - `reporting` - 控制台报告
//! - `cli` - 命令行接口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::matcher;
pub use crate::core::models;

/// Initializes diagnostic logging.
///
/// Logs go to stderr so they never mix with the report on stdout. `RUST_LOG`
/// takes precedence over `default_level`.
pub fn init_log(default_level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);
    // A logger may already be installed, e.g. when embedded in tests.
    let _ = builder.try_init();
}
