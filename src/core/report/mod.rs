//! Report generation for comparisons and the course catalog
//!
//! Reports can be written as Markdown (renders well in GitHub, GitLab and
//! VS Code) or as a self-contained HTML page.

pub mod formats;

use crate::core::catalog::{offering_colleges, GroupedCourse};
use crate::core::compare::ComparisonTable;
use crate::core::models::College;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One line of the course catalog report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Grouping key
    pub course_key: String,
    /// Representative course name
    pub name: String,
    /// Representative stream
    pub stream: String,
    /// Representative level
    pub level: String,
    /// Number of underlying course records
    pub offering_count: usize,
    /// Number of distinct colleges offering the course
    pub college_count: usize,
}

impl CatalogEntry {
    /// Summarize a grouped course against the full college list
    #[must_use]
    pub fn from_group(group: &GroupedCourse, colleges: &[College]) -> Self {
        let rep = &group.representative;
        Self {
            course_key: rep.course_key.clone(),
            name: rep.name.clone(),
            stream: rep.stream.clone(),
            level: rep.level.clone(),
            offering_count: group.offering_count(),
            college_count: offering_colleges(colleges, &rep.course_key).len(),
        }
    }
}

/// Data a report is rendered from
#[derive(Debug, Clone, Copy)]
pub enum ReportContext<'a> {
    /// Side-by-side college comparison
    Comparison(&'a ComparisonTable),
    /// Grouped course listing
    Catalog(&'a [CatalogEntry]),
}

impl ReportContext<'_> {
    /// Report title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Comparison(_) => "College Comparison",
            Self::Catalog(_) => "Course Catalog",
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        crate::info!("Report written to {}", output_path.display());
        Ok(())
    }
}
