//! # Commands Module / 命令模块
//!
//! Implementations of the tester's commands.
//!
//! 测试器命令的实现。

pub mod run;
