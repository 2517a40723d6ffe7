//! # Run Command Module / 运行命令模块
//!
//! This module implements the run command of the tester CLI: it resolves the
//! configuration, checks the preconditions and runs the suite.
//!
//! 此模块实现了测试器 CLI 的运行命令：解析配置、检查前置条件并运行套件。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::{
    cli::CliArgs,
    core::{
        config::{self, SuiteConfig, DEFAULT_CONFIG_FILE},
        models::RunnerTally,
        suite::{RunOptions, TestRunner},
    },
    infra::fs,
    reporting::console,
};

/// Executes the run command with the provided arguments.
///
/// # Returns
/// The tally of the whole suite. Precondition and launch failures are
/// returned as errors and no (further) test script is run.
pub async fn execute(args: CliArgs) -> Result<RunnerTally> {
    let config = setup_and_parse_config(args.config.as_deref())?;
    let options = resolve_options(&args, config);

    check_preconditions(&args.suite, &options.interpreter)?;

    console::divider();

    let suite_path = fs::absolute_path(&args.suite);
    let tally = TestRunner::new(options)
        .test(&suite_path)
        .await
        .context("Cannot run the test suite")?;

    console::print_summary(&suite_path, &tally);
    Ok(tally)
}

/// Loads the configuration file. The default file is optional; an explicitly
/// requested one must exist.
fn setup_and_parse_config(explicit: Option<&Path>) -> Result<SuiteConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(SuiteConfig::default());
            }
            default
        }
    };

    log::info!("loading suite configuration from {}", path.display());
    let config = config::load_suite_config(&path)
        .with_context(|| format!("Cannot run the test suite: invalid configuration '{}'", path.display()))?;
    Ok(config)
}

/// Merges command-line options over the configuration file.
pub fn resolve_options(args: &CliArgs, config: SuiteConfig) -> RunOptions {
    let interpreter = args.interpreter.clone().unwrap_or(config.interpreter);
    RunOptions {
        interpreter: expand_path(&interpreter),
        extension: config.extension,
        hide_passes: args.hide_passes.unwrap_or(config.hide_passes),
    }
}

/// Expands `~` and environment variables in a path, keeping it as given if
/// the expansion fails.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::warn!("could not expand '{}': {}", raw, e);
            path.to_path_buf()
        }
    }
}

fn check_preconditions(suite: &Path, interpreter: &Path) -> Result<()> {
    if !suite.exists() {
        anyhow::bail!(
            "Cannot run the test suite: the test suite path '{}' does not exist",
            suite.display()
        );
    }
    if !fs::is_regular_file(interpreter) {
        anyhow::bail!(
            "Cannot run the test suite: the interpreter path '{}' does not exist or is not a file",
            interpreter.display()
        );
    }
    Ok(())
}
