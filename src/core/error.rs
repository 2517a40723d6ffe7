//! # Error Types Module / 错误类型模块
//!
//! Typed errors raised by the tester library. The CLI wraps them in `anyhow`
//! errors; the suite decides which of them are fatal.
//!
//! 测试器库抛出的类型化错误。CLI 将它们包装为 `anyhow` 错误；
//! 由套件决定其中哪些是致命的。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// The interpreter could not be spawned or awaited. Fatal for the whole suite.
    /// 无法派生或等待解释器。对整个套件是致命的。
    #[error("failed to launch the interpreter '{}': {source}", interpreter.display())]
    Launch {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A test script could not be read. Contained to that one script.
    /// 无法读取测试脚本。仅影响该脚本。
    #[error("could not read test file '{}': {source}", path.display())]
    ReadTest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl RunnerError {
    /// Checks if the error must stop the whole suite rather than a single test script.
    /// 检查该错误是否必须停止整个套件，而不仅仅是单个测试脚本。
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RunnerError::ReadTest { .. })
    }
}
