//! Exams, blogs and facets command handlers

use super::load_catalog;
use college_compass::config::Config;
use college_compass::core::catalog::{facets, filter_blogs, filter_exams, BlogFilters, ExamFilters};
use college_compass::info;

/// Print exams matching the filters
pub fn run_exams(
    config: &Config,
    search: Option<String>,
    stream: Option<String>,
    level: Option<String>,
) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let filters = ExamFilters::from_choices(search, stream, level);
    let exams = filter_exams(&snapshot.exams, &filters);
    info!("{} of {} exams match", exams.len(), snapshot.exams.len());

    if exams.is_empty() {
        println!("No exams match the current filters.");
    }
    for exam in exams {
        let streams = exam
            .stream
            .as_ref()
            .map(|s| s.labels().join(", "))
            .unwrap_or_default();
        println!(
            "[{}] {} — {} ({}) {}",
            exam.id,
            exam.name,
            exam.full_name.as_deref().unwrap_or(&exam.name),
            streams,
            exam.exam_date.as_deref().unwrap_or("date TBA")
        );
    }
}

/// Print blog posts matching the filters
pub fn run_blogs(config: &Config, search: Option<String>, category: Option<String>) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let filters = BlogFilters::from_choices(search, category);
    let blogs = filter_blogs(&snapshot.blogs, &filters);
    info!("{} of {} posts match", blogs.len(), snapshot.blogs.len());

    if blogs.is_empty() {
        println!("No posts match the current filters.");
    }
    for blog in blogs {
        println!(
            "[{}] {} — {} {}",
            blog.id,
            blog.title,
            blog.category.as_deref().unwrap_or("General"),
            blog.date.as_deref().unwrap_or_default()
        );
    }
}

/// Print the distinct streams, types and cities in the catalog
pub fn run_facets(config: &Config) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let facets = facets(&snapshot.colleges);
    println!("Streams: {}", facets.streams.join(", "));
    println!("Types:   {}", facets.types.join(", "));
    println!("Cities:  {}", facets.cities.join(", "));
}
