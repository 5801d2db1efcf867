//! Courses command handler

use super::{load_catalog, write_report};
use college_compass::config::Config;
use college_compass::core::catalog::{catalog, filter_grouped, CourseFilters};
use college_compass::core::report::{CatalogEntry, ReportContext};
use college_compass::{error, info, verbose};

/// Print grouped courses matching the filters and optionally write a report
pub fn run(
    config: &Config,
    search: Option<String>,
    stream: Option<String>,
    level: Option<String>,
    report: Option<&str>,
) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let groups = catalog(&snapshot.colleges);
    let filters = CourseFilters::from_choices(search, stream, level);
    let entries: Vec<CatalogEntry> = filter_grouped(&groups, &filters)
        .into_iter()
        .map(|group| CatalogEntry::from_group(group, &snapshot.colleges))
        .collect();

    info!("{} of {} grouped courses match", entries.len(), groups.len());

    if entries.is_empty() {
        println!("No courses match the current filters.");
    }
    for entry in &entries {
        println!(
            "{:<10} {} [{} · {}] — {} offering(s) across {} college(s)",
            entry.course_key,
            entry.name,
            entry.stream,
            entry.level,
            entry.offering_count,
            entry.college_count
        );
    }

    if let Some(format) = report {
        match write_report(
            &ReportContext::Catalog(&entries),
            format,
            None,
            "courses",
            config,
        ) {
            Ok(path) => {
                println!("✓ Report generated: {}", path.display());
                verbose!("  {} course(s) written", entries.len());
            }
            Err(e) => {
                error!("Catalog report failed: {e}");
                eprintln!("{e}");
            }
        }
    }
}
