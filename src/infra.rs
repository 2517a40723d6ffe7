//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the tester,
//! including interpreter execution and file system operations.
//!
//! 此模块为测试器提供基础设施服务，
//! 包括解释器执行和文件系统操作。

pub mod command;
pub mod fs;
