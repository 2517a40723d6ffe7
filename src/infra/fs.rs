//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as discovering test scripts under a suite path.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如在套件路径下发现测试脚本。

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunnerError;

/// Checks if `path` carries the test script extension (given without the dot).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Collects every test script reachable from `root`.
///
/// A file root is returned as is if it has the right extension. Directories
/// are walked recursively in the order the file system enumerates them, which
/// is not sorted.
///
/// # Arguments
/// * `root` - A test script or a directory of test scripts
/// * `extension` - The test script extension, without the leading dot
///
/// 收集从 `root` 可达的所有测试脚本。
/// 目录按文件系统枚举的顺序递归遍历（未排序）。
pub fn discover_test_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, RunnerError> {
    let mut files = Vec::new();
    collect(root, extension, &mut files)?;
    Ok(files)
}

fn collect(path: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<(), RunnerError> {
    if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|source| RunnerError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| RunnerError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            collect(&entry.path(), extension, files)?;
        }
    } else if path.is_file() && has_extension(path, extension) {
        files.push(path.to_path_buf());
    }
    Ok(())
}

/// Checks if a path exists and is a regular file.
pub fn is_regular_file(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Gets the absolute path from a potentially relative path without requiring
/// it to be canonical. Falls back to the path as given.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
