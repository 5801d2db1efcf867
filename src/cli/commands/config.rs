//! Config command handler

use crate::args::ConfigSubcommand;
use college_compass::config::Config;
use college_compass::error;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            let result = config.set(&key, &value);
            persist(config, result, &format!("✓ Set {key} = {value}"));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            let result = config.unset(&key, defaults);
            persist(config, result, &format!("✓ Reset {key} to default"));
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print one value, or the whole configuration
fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

/// Save after a successful edit; exit non-zero on any failure
fn persist(config: &Config, edit: Result<(), String>, success: &str) {
    if let Err(e) = edit {
        eprintln!("{e}");
        std::process::exit(1);
    }
    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
    println!("{success}");
}

/// Delete the config file after confirmation
fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
