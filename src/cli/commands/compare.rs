//! Compare command handler

use super::{load_catalog, write_report};
use college_compass::config::Config;
use college_compass::core::compare::{CompareSelection, ComparisonTable, MIN_COMPARISON};
use college_compass::core::report::ReportContext;
use college_compass::{error, info, warn};
use std::path::Path;

/// Toggle `ids` into a fresh compare list in order
fn select(ids: &[u64]) -> CompareSelection {
    ids.iter()
        .fold(CompareSelection::new(), |selection, &id| {
            match selection.toggle(id) {
                Ok(next) => next,
                Err(full) => {
                    warn!("Skipping college {}: {full}", full.rejected);
                    eprintln!("⚠️  {full} (skipped {})", full.rejected);
                    selection
                }
            }
        })
}

/// Print the comparison table for `ids` and optionally write a report
pub fn run(config: &Config, ids: &[u64], report: Option<&str>, output: Option<&Path>) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let selection = select(ids);
    let selected = selection.resolve(&snapshot.colleges);
    if selected.len() < selection.len() {
        let missing: Vec<String> = selection
            .ids()
            .iter()
            .filter(|id| snapshot.college(**id).is_none())
            .map(ToString::to_string)
            .collect();
        eprintln!("⚠️  Unknown college id(s): {}", missing.join(", "));
    }

    if selected.len() < MIN_COMPARISON {
        println!("Select at least {MIN_COMPARISON} colleges to compare.");
        return;
    }

    let table = ComparisonTable::new(&selected);
    info!("Comparing {} colleges", table.headers.len());
    print_table(&table);

    if let Some(format) = report {
        match write_report(
            &ReportContext::Comparison(&table),
            format,
            output,
            "comparison",
            config,
        ) {
            Ok(path) => println!("✓ Report generated: {}", path.display()),
            Err(e) => {
                error!("Comparison report failed: {e}");
                eprintln!("{e}");
            }
        }
    }
}

fn print_table(table: &ComparisonTable) {
    let label_width = table
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let col_width = table
        .headers
        .iter()
        .chain(table.rows.iter().flat_map(|row| row.cells.iter()))
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);

    print!("{:label_width$}", "");
    for header in &table.headers {
        print!("  {header:<col_width$}");
    }
    println!();
    for row in &table.rows {
        print!("{:<label_width$}", row.label);
        for cell in &row.cells {
            print!("  {cell:<col_width$}");
        }
        println!();
    }
}
