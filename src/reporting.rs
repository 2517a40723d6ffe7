//! # Reporting Module / 报告模块
//!
//! This module handles the display of test reports. Reports are printed to
//! the console as they are produced; there is no file output.
//!
//! 此模块处理测试报告的显示。报告在产生时即打印到控制台；没有文件输出。

pub mod console;

// Re-export common reporting functions
pub use console::{print_result, print_summary};
