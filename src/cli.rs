// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("karate-consolidator")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("consolidate")
                .about(t!("cmd_consolidate_about", locale = locale).to_string())
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(
                    Arg::new("results")
                        .long("results")
                        .help(t!("arg_results", locale = locale).to_string())
                        .value_name("RESULTS")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .help(t!("arg_results_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("search")
                .about(t!("cmd_search_about", locale = locale).to_string())
                .arg(
                    Arg::new("term")
                        .help(t!("arg_term", locale = locale).to_string())
                        .value_name("TERM")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .help(t!("arg_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);
    let lang_overridden = env::args().any(|arg| arg == "--lang");

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("consolidate", sub_matches)) => {
            let dir = sub_matches
                .get_one::<PathBuf>("dir")
                .unwrap() // Has default
                .clone();
            let config = sub_matches.get_one::<PathBuf>("config").cloned();
            let jobs = sub_matches.get_one::<usize>("jobs").copied();

            commands::consolidate::execute(dir, config, jobs, &language, lang_overridden).await?;
        }
        Some(("render", sub_matches)) => {
            let results = sub_matches
                .get_one::<PathBuf>("results")
                .unwrap() // Required
                .clone();
            let dir = sub_matches
                .get_one::<PathBuf>("dir")
                .unwrap() // Has default
                .clone();

            commands::render::execute(results, dir, &language, lang_overridden).await?;
        }
        Some(("search", sub_matches)) => {
            let term = sub_matches
                .get_one::<String>("term")
                .unwrap() // Required
                .clone();
            let dir = sub_matches
                .get_one::<PathBuf>("dir")
                .unwrap() // Has default
                .clone();
            let config = sub_matches.get_one::<PathBuf>("config").cloned();
            let jobs = sub_matches.get_one::<usize>("jobs").copied();
            let output = sub_matches.get_one::<PathBuf>("output").cloned();

            commands::search::execute(dir, term, config, jobs, output, &language, lang_overridden)
                .await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "🌍 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
