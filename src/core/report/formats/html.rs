//! HTML report generator
//!
//! Renders reports through askama templates (see `templates/`). The output is
//! a self-contained page with embedded CSS.

use crate::core::compare::ComparisonTable;
use crate::core::report::{CatalogEntry, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "compare.html")]
struct ComparisonPage<'a> {
    title: &'a str,
    table: &'a ComparisonTable,
}

#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogPage<'a> {
    title: &'a str,
    entries: &'a [CatalogEntry],
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let title = ctx.title();
        let html = match *ctx {
            ReportContext::Comparison(table) => ComparisonPage { title, table }.render()?,
            ReportContext::Catalog(entries) => CatalogPage { title, entries }.render()?,
        };
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare::Row;

    #[test]
    fn test_comparison_html_escapes_values() {
        let table = ComparisonTable {
            headers: vec!["A & B College".to_string(), "C".to_string()],
            rows: vec![Row {
                label: "Placement %".to_string(),
                cells: vec!["92%".to_string(), "0".to_string()],
            }],
        };
        let html = HtmlReporter::new()
            .render(&ReportContext::Comparison(&table))
            .unwrap();

        assert!(html.contains("<title>College Comparison</title>"));
        assert!(html.contains("A &amp; B College"));
        assert!(html.contains("<td>92%</td>"));
    }

    #[test]
    fn test_catalog_html_lists_counts() {
        let entries = vec![CatalogEntry {
            course_key: "BTech".to_string(),
            name: "B.Tech in Computer Science".to_string(),
            stream: "Engineering".to_string(),
            level: "Undergraduate".to_string(),
            offering_count: 3,
            college_count: 2,
        }];
        let html = HtmlReporter::new()
            .render(&ReportContext::Catalog(&entries))
            .unwrap();

        assert!(html.contains("BTech"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("<td>2</td>"));
    }
}
