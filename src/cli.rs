// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::config::DEFAULT_CONFIG_FILE;

pub mod commands;

/// Arguments of a single tester invocation, after parsing.
/// Options left unset fall back to the config file, then to the defaults.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub suite: PathBuf,
    pub interpreter: Option<PathBuf>,
    /// `Some(true)` for `--hide-passes`, `Some(false)` for `--show-passes`.
    pub hide_passes: Option<bool>,
    /// `None` means the default config file, which may be absent.
    pub config: Option<PathBuf>,
    pub no_color: bool,
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("dauw-tester")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the test suite for the Dauw compiler and interpreter.")
        .arg(
            Arg::new("suite")
                .help("Path to a test script or a directory of test scripts")
                .value_name("SUITE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the interpreter executable (defaults to './dauw')")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("hide-passes")
                .long("hide-passes")
                .help("Do not print passing results (they are still counted)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-passes")
                .long("show-passes")
                .help("Print passing results even if the configuration hides them")
                .conflicts_with("hide-passes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(format!(
                    "Path to the suite configuration file (defaults to '{DEFAULT_CONFIG_FILE}' if present)"
                ))
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug logging to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        suite: matches
            .get_one::<PathBuf>("suite")
            .cloned()
            .unwrap_or_default(),
        interpreter: matches.get_one::<PathBuf>("path").cloned(),
        hide_passes: if matches.get_flag("hide-passes") {
            Some(true)
        } else if matches.get_flag("show-passes") {
            Some(false)
        } else {
            None
        },
        config: matches.get_one::<PathBuf>("config").cloned(),
        no_color: matches.get_flag("no-color"),
        verbose: matches.get_flag("verbose"),
    }
}

/// Parses the process arguments. Exits with a usage message on invalid input.
pub fn parse_args() -> CliArgs {
    from_matches(&build_cli().get_matches())
}

/// Parses an explicit argument list, the first element being the program name.
pub fn try_parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(from_matches(&build_cli().try_get_matches_from(args)?))
}

pub async fn process_command(args: CliArgs) -> Result<ExitCode> {
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    crate::init_log(level);

    if args.no_color {
        colored::control::set_override(false);
    }

    let tally = commands::run::execute(args).await?;
    Ok(if tally.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
