//! Colleges command handler

use super::load_catalog;
use college_compass::core::catalog::{filter, top_rated, FilterInput, Filters};
use college_compass::core::models::College;
use college_compass::{info, verbose};

/// Print the colleges matching `input`, optionally only the top `top` by rating
pub fn run(config: &college_compass::config::Config, input: &FilterInput, top: Option<usize>) {
    let snapshot = match load_catalog(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let filters = Filters::from_input(input);
    verbose!("Active filters: {filters:?}");

    let mut matches = filter(&snapshot.colleges, &filters);
    if let Some(n) = top {
        matches = top_rated(matches, n);
    }

    info!(
        "{} of {} colleges match",
        matches.len(),
        snapshot.colleges.len()
    );

    if matches.is_empty() {
        println!("No colleges match the current filters.");
        return;
    }

    for college in &matches {
        print_college(college);
    }
    println!("\n{} college(s)", matches.len());
}

fn print_college(college: &College) {
    let rating = college
        .rating_value()
        .map_or_else(|| "unrated".to_string(), |r| format!("★ {r:.1}"));
    println!(
        "[{}] {} — {} ({}, {})",
        college.id,
        college.name,
        college.location.as_deref().unwrap_or("location unknown"),
        college.college_type.as_deref().unwrap_or("type unknown"),
        rating
    );
    if let Some(range) = college.fees_range {
        verbose!("      fees: {} – {}", range.min, range.max);
    }
    if !college.highlights.is_empty() {
        verbose!("      {}", college.highlights.join(" · "));
    }
}
