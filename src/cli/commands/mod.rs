//! CLI command handlers for `CollegeCompass`.
//!
//! Each command is implemented in its own submodule. Handlers report
//! failures on stderr and through the logger rather than aborting.

pub mod colleges;
pub mod compare;
pub mod config;
pub mod courses;
pub mod listings;

use college_compass::config::Config;
use college_compass::core::loader::load_snapshot;
use college_compass::core::models::Snapshot;
use college_compass::core::report::{ReportContext, ReportFormat};
use college_compass::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Load the snapshot named by the effective config
pub fn load_catalog(config: &Config) -> Result<Snapshot, String> {
    let path = Path::new(&config.data.snapshot);
    if config.data.snapshot.is_empty() {
        return Err("✗ No snapshot configured. Use --data or `config set snapshot PATH`.".into());
    }

    let snapshot = load_snapshot(path).map_err(|e| {
        error!("Failed to load snapshot {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    info!(
        "Snapshot loaded from {} ({} colleges)",
        path.display(),
        snapshot.colleges.len()
    );
    Ok(snapshot)
}

/// Render `ctx` in `format_str` to `output`, or to `<reports_dir>/<stem>.<ext>`
pub fn write_report(
    ctx: &ReportContext,
    format_str: &str,
    output: Option<&Path>,
    stem: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let path = output.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(format!("{stem}.{}", format.extension()))
        },
        Path::to_path_buf,
    );

    format
        .generator()
        .generate(ctx, &path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;
    Ok(path)
}
