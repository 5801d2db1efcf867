//! CLI argument definitions for `CollegeCompass`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use college_compass::config::ConfigOverrides;
use college_compass::core::catalog::{FilterInput, ALL};
use college_compass::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `snapshot`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// College listing filters as typed on the command line
#[derive(Debug, Clone, Args)]
pub struct CollegeFilterArgs {
    /// College name contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub college: String,

    /// Location contains TEXT (ignores case and spaces)
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub city: String,

    /// Offers a course whose name contains TEXT
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub course: String,

    /// Stream, or "All"
    #[arg(long, value_name = "STREAM", default_value = ALL)]
    pub stream: String,

    /// College type (exact, e.g. "Private"), or "All"
    #[arg(long = "type", value_name = "TYPE", default_value = ALL)]
    pub college_type: String,

    /// Minimum rating; 0 disables the floor
    #[arg(long, value_name = "RATING", default_value_t = 0.0)]
    pub min_rating: f64,
}

impl CollegeFilterArgs {
    /// Raw form state for the filter engine
    pub fn to_input(&self) -> FilterInput {
        FilterInput {
            college: self.college.clone(),
            city: self.city.clone(),
            course: self.course.clone(),
            stream: self.stream.clone(),
            college_type: self.college_type.clone(),
            min_rating: self.min_rating,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List colleges matching the given filters.
    Colleges {
        #[command(flatten)]
        filters: CollegeFilterArgs,

        /// Only show the N highest-rated matches
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    /// List courses grouped across colleges.
    Courses {
        /// Name, full name or key contains TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Stream (case-insensitive)
        #[arg(long, value_name = "STREAM")]
        stream: Option<String>,

        /// Level (case-insensitive, e.g. "Undergraduate")
        #[arg(long, value_name = "LEVEL")]
        level: Option<String>,

        /// Also write a report in the given format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,
    },
    /// Compare two or three colleges side by side.
    ///
    /// IDs are toggled into the compare list in order; repeating an ID removes it.
    Compare {
        /// College ids
        #[arg(value_name = "IDS", num_args = 1..)]
        ids: Vec<u64>,

        /// Also write a report in the given format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List entrance exams.
    Exams {
        /// Name or full name contains TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Stream (case-insensitive)
        #[arg(long, value_name = "STREAM")]
        stream: Option<String>,

        /// Level (case-insensitive, e.g. "National")
        #[arg(long, value_name = "LEVEL")]
        level: Option<String>,
    },
    /// List blog posts.
    Blogs {
        /// Title, excerpt or tag contains TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Category (case-insensitive)
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Show the streams, college types and cities present in the catalog.
    Facets,
}

#[derive(Parser, Debug)]
#[command(
    name = "collegecompass",
    about = "CollegeCompass command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Catalog snapshot to read (overrides config `snapshot`)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            snapshot: self.data.as_ref().map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
