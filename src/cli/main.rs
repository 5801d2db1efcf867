//! Command-line interface entry point for `CollegeCompass`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use college_compass::config::Config;
use college_compass::info;
use college_compass::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Colleges { filters, top } => {
            commands::colleges::run(&config, &filters.to_input(), top);
        }
        Command::Courses {
            search,
            stream,
            level,
            report,
        } => {
            commands::courses::run(&config, search, stream, level, report.as_deref());
        }
        Command::Compare {
            ids,
            report,
            output,
        } => {
            commands::compare::run(&config, &ids, report.as_deref(), output.as_deref());
        }
        Command::Exams {
            search,
            stream,
            level,
        } => {
            commands::listings::run_exams(&config, search, stream, level);
        }
        Command::Blogs { search, category } => {
            commands::listings::run_blogs(&config, search, category);
        }
        Command::Facets => commands::listings::run_facets(&config),
    }
}
