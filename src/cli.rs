// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use crate::{
    core::config::{ColorChoice, DEFAULT_CONFIG_FILE, Overrides, RunSettings, RunnerConfig},
    infra::{logging, t},
};

pub mod commands {
    pub mod init;
    pub mod run;
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
pub fn pre_parse_language(args: &[String]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--lang" {
            return iter.next().cloned();
        }
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
    }
    None
}

pub fn build_cli() -> Command {
    Command::new("exec-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .arg(
            Arg::new("dir")
                .help(t!("cli.arg_dir").to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("numeric-prefix")
                .long("numeric-prefix")
                .help(t!("cli.arg_numeric_prefix").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("capture")
                .long("capture")
                .help(t!("cli.arg_capture").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help(t!("cli.arg_timeout").to_string())
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help(t!("cli.arg_color").to_string())
                .value_name("WHEN")
                .value_parser(clap::value_parser!(ColorChoice))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help(t!("cli.arg_list").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.arg_verbose").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config").to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about").to_string())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses the command line and runs the selected command.
///
/// # Returns
/// The process exit code: success when every test passed, failure when a test
/// failed or the run was interrupted. Fatal problems are returned as `Err`.
pub async fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    // Pre-parse language and initialize i18n first.
    let requested_lang = pre_parse_language(&args);
    crate::init_locale(requested_lang.as_deref());

    let matches = build_cli().get_matches_from(args);
    logging::init(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let path = init_matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::init::execute(&path, init_matches.get_flag("force"))?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            let explicit_config = matches.get_one::<PathBuf>("config");
            let (config, config_path) = load_config(explicit_config.map(PathBuf::as_path))?;

            if requested_lang.is_none() {
                if let Some(lang) = &config.language {
                    crate::init_locale(Some(lang.as_str()));
                }
            }

            let settings =
                RunSettings::resolve(&config, config_path.as_deref(), overrides_from(&matches))?;
            commands::run::execute(settings, matches.get_flag("list")).await
        }
    }
}

/// Loads the configuration file.
///
/// An explicitly named file must exist. The default file is optional; when it
/// is absent the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<(RunnerConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.is_file() {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok((RunnerConfig::default(), None));
            }
            default_path
        }
    };

    let config = RunnerConfig::load(&path)?;
    tracing::debug!("loaded configuration from {}", path.display());
    Ok((config, Some(path)))
}

fn overrides_from(matches: &ArgMatches) -> Overrides {
    Overrides {
        test_dir: matches.get_one::<PathBuf>("dir").cloned(),
        numeric_prefix: matches.get_flag("numeric-prefix"),
        capture: matches.get_flag("capture"),
        timeout_secs: matches.get_one::<u64>("timeout").copied(),
        color: matches.get_one::<ColorChoice>("color").copied(),
    }
}
