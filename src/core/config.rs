//! # Configuration Module / 配置模块
//!
//! The optional TOML configuration of a test suite. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.
//!
//! 测试套件的可选 TOML 配置。每个字段都有默认值，
//! 因此空文件（或根本没有文件）都是有效配置。

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunnerError;

/// The configuration file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "DauwTest.toml";
pub const DEFAULT_INTERPRETER: &str = "./dauw";
pub const DEFAULT_EXTENSION: &str = "dauw";

/// Represents the suite configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的套件配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Path to the interpreter executable.
    /// 解释器可执行文件的路径。
    #[serde(default = "default_interpreter")]
    pub interpreter: PathBuf,

    /// File extension of test scripts, without the leading dot.
    /// 测试脚本的文件扩展名，不含前导点。
    #[serde(default = "default_extension")]
    pub extension: String,

    /// If `true`, passing results are counted but not printed.
    /// 如果为 `true`，通过的结果会被计数但不会打印。
    #[serde(default)]
    pub hide_passes: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            extension: default_extension(),
            hide_passes: false,
        }
    }
}

fn default_interpreter() -> PathBuf {
    PathBuf::from(DEFAULT_INTERPRETER)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Loads and parses the suite configuration at `path`.
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig, RunnerError> {
    let content = fs::read_to_string(path).map_err(|source| RunnerError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: SuiteConfig =
        toml::from_str(&content).map_err(|source| RunnerError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;

    // Accept ".dauw" as well as "dauw".
    if let Some(stripped) = config.extension.strip_prefix('.') {
        config.extension = stripped.to_string();
    }

    Ok(config)
}
