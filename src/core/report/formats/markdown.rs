//! Markdown report generator
//!
//! Renders comparison and catalog reports as Markdown tables.

use crate::core::compare::ComparisonTable;
use crate::core::report::{CatalogEntry, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape characters that would break a table cell
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn comparison_table(table: &ComparisonTable) -> String {
        let mut md = String::new();
        if table.is_empty() {
            let _ = writeln!(md, "_Select two or three colleges to compare._");
            return md;
        }

        let headers: Vec<String> = table.headers.iter().map(|h| Self::cell(h)).collect();
        let _ = writeln!(md, "| Field | {} |", headers.join(" | "));
        let _ = writeln!(md, "|-------|{}", "---|".repeat(headers.len()));
        for row in &table.rows {
            let cells: Vec<String> = row.cells.iter().map(|c| Self::cell(c)).collect();
            let _ = writeln!(md, "| {} | {} |", Self::cell(&row.label), cells.join(" | "));
        }
        md
    }

    fn catalog_table(entries: &[CatalogEntry]) -> String {
        let mut md = String::new();
        if entries.is_empty() {
            let _ = writeln!(md, "_No courses match the current filters._");
            return md;
        }

        let _ = writeln!(md, "| Course | Name | Stream | Level | Offerings | Colleges |");
        let _ = writeln!(md, "|--------|------|--------|-------|-----------|----------|");
        for entry in entries {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} | {} | {} |",
                Self::cell(&entry.course_key),
                Self::cell(&entry.name),
                Self::cell(&entry.stream),
                Self::cell(&entry.level),
                entry.offering_count,
                entry.college_count
            );
        }
        md
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let body = match *ctx {
            ReportContext::Comparison(table) => Self::comparison_table(table),
            ReportContext::Catalog(entries) => Self::catalog_table(entries),
        };
        Ok(format!("# {}\n\n{body}", ctx.title()))
    }
}
