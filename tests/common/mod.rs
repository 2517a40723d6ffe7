// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// The bytes the interpreter writes for an undefined variable at line 1,
/// column 7 of `print(x)`. The message line is bold crimson and the location
/// line is bold; each reset lands after the newline, at the start of the next
/// line.
pub const UNDEFINED_VARIABLE_ERROR: &str = concat!(
    "\x1b[1m\x1b[38;2;220;020;060mError: undefined variable 'x'\n",
    "\x1b[0m\x1b[1mat line 1, col 7:\n",
    "\x1b[0m     1 | print(x)\n",
    "       |       ^",
);

/// `UNDEFINED_VARIABLE_ERROR` as output lines, escape sequences removed.
pub const UNDEFINED_VARIABLE_ERROR_LINES: [&str; 4] = [
    "Error: undefined variable 'x'",
    "at line 1, col 7:",
    "     1 | print(x)",
    "       |       ^",
];

pub fn setup_suite_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a test script into `dir` and returns its path.
pub fn write_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create test directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Creates an executable shell script that stands in for the interpreter.
/// `body` is run by `/bin/sh` with the test script path in `$1`.
#[cfg(unix)]
pub fn fake_interpreter(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write interpreter");
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("Failed to make interpreter executable");
    path
}

/// An interpreter that prints the payload of every `print <value>` line of
/// the script, one per line. Good enough to drive output expectations.
#[cfg(unix)]
pub fn echo_interpreter(dir: &Path) -> PathBuf {
    fake_interpreter(dir, "dauw", r#"sed -n 's/^print \([^ ]*\).*/\1/p' "$1""#)
}

/// An interpreter that prints a fixed text verbatim and exits with `code`.
#[cfg(unix)]
pub fn fixed_output_interpreter(dir: &Path, output: &str, code: i32) -> PathBuf {
    fake_interpreter(
        dir,
        "dauw",
        &format!("cat <<'DAUW_OUTPUT'\n{output}\nDAUW_OUTPUT\nexit {code}"),
    )
}
