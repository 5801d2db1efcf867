//! Compare selection, table building and report output

use college_compass::core::catalog::catalog;
use college_compass::core::compare::{CompareSelection, ComparisonTable, MAX_SELECTION, PLACEHOLDER};
use college_compass::core::loader::load_snapshot;
use college_compass::core::models::Snapshot;
use college_compass::core::report::{
    CatalogEntry, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample() -> Snapshot {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/colleges.json");
    load_snapshot(&path).expect("sample snapshot should parse")
}

fn select(ids: &[u64]) -> CompareSelection {
    ids.iter().fold(CompareSelection::new(), |selection, &id| {
        selection.toggle(id).unwrap_or(selection)
    })
}

fn cells<'a>(table: &'a ComparisonTable, label: &str) -> Vec<&'a str> {
    table
        .rows
        .iter()
        .find(|row| row.label == label)
        .map(|row| row.cells.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn selection_toggles_and_caps() {
    let selection = CompareSelection::new();
    let selection = selection.toggle(1).unwrap();
    let selection = selection.toggle(2).unwrap();
    let selection = selection.toggle(3).unwrap();
    assert_eq!(selection.ids(), &[1, 2, 3]);
    assert!(selection.is_full());

    let err = selection.toggle(4).unwrap_err();
    assert_eq!(err.rejected, 4);
    assert_eq!(selection.ids(), &[1, 2, 3]);
    assert_eq!(
        err.to_string(),
        format!("You can compare up to {MAX_SELECTION} colleges at a time")
    );

    let selection = selection.toggle(2).unwrap();
    assert_eq!(selection.ids(), &[1, 3]);
    let selection = selection.toggle(4).unwrap();
    assert_eq!(selection.ids(), &[1, 3, 4]);
}

#[test]
fn selection_needs_two_to_compare() {
    let snapshot = sample();
    let single = select(&[1]);
    assert!(!single.is_comparable());

    let table = ComparisonTable::new(&single.resolve(&snapshot.colleges));
    assert!(table.is_empty());
    assert!(table.headers.is_empty());
}

#[test]
fn table_renders_sample_values() {
    let snapshot = sample();
    let selection = select(&[1, 2]);
    let table = ComparisonTable::new(&selection.resolve(&snapshot.colleges));

    assert_eq!(
        table.headers,
        vec![
            "Indian Institute of Technology Delhi",
            "Shri Ram College of Commerce"
        ]
    );
    assert_eq!(table.rows.len(), 8);
    assert_eq!(cells(&table, "Rating"), vec!["4.8", "4.6"]);
    assert_eq!(cells(&table, "Reviews"), vec!["1250", "830"]);
    assert_eq!(cells(&table, "Established"), vec!["1961", "1926"]);
    assert_eq!(cells(&table, "Type"), vec!["Government", "Government"]);
    assert_eq!(
        cells(&table, "Accreditation"),
        vec!["NAAC A++, NIRF", "NAAC A++"]
    );
    assert_eq!(cells(&table, "Average Package"), vec!["25 LPA", "10 LPA"]);
    // Zero is not decorated with the suffix
    assert_eq!(cells(&table, "Placement %"), vec!["92%", "0"]);
}

#[test]
fn table_uses_placeholder_for_missing() {
    let snapshot = sample();
    let table = ComparisonTable::new(&select(&[1, 4]).resolve(&snapshot.colleges));

    assert_eq!(cells(&table, "Rating"), vec!["4.8", "not rated"]);
    assert_eq!(cells(&table, "Reviews"), vec!["1250", PLACEHOLDER]);
    assert_eq!(cells(&table, "Accreditation")[1], PLACEHOLDER);
    assert_eq!(cells(&table, "Highest Package"), vec!["2.5 CPA", PLACEHOLDER]);
    assert_eq!(cells(&table, "Placement %"), vec!["92%", PLACEHOLDER]);
}

#[test]
fn unknown_ids_are_skipped_on_resolve() {
    let snapshot = sample();
    let selection = select(&[1, 99, 3]);
    assert_eq!(selection.len(), 3);

    let resolved = selection.resolve(&snapshot.colleges);
    let ids: Vec<u64> = resolved.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn comparison_reports_are_written() {
    let snapshot = sample();
    let table = ComparisonTable::new(&select(&[1, 2, 3]).resolve(&snapshot.colleges));
    let ctx = ReportContext::Comparison(&table);
    let dir = TempDir::new().expect("Failed to create temp dir");

    let md_path = dir.path().join("nested/compare.md");
    MarkdownReporter::new()
        .generate(&ctx, &md_path)
        .expect("markdown report");
    let md = fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.starts_with("# College Comparison"));
    assert!(md.contains("| Rating | 4.8 | 4.6 | 4.2 |"));

    let html_path = dir.path().join("compare.html");
    HtmlReporter::new()
        .generate(&ctx, &html_path)
        .expect("html report");
    let html = fs::read_to_string(&html_path).expect("read html");
    assert!(html.contains("<title>College Comparison</title>"));
    assert!(html.contains("Manipal Institute of Technology"));
    assert!(html.contains("<td>92%</td>"));
}

#[test]
fn catalog_report_counts_colleges() {
    let snapshot = sample();
    let entries: Vec<CatalogEntry> = catalog(&snapshot.colleges)
        .iter()
        .map(|group| CatalogEntry::from_group(group, &snapshot.colleges))
        .collect();

    let btech = &entries[0];
    assert_eq!(btech.course_key, "BTech");
    assert_eq!(btech.offering_count, 3);
    assert_eq!(btech.college_count, 2);

    let format: ReportFormat = "markdown".parse().expect("format");
    let md = format
        .generator()
        .render(&ReportContext::Catalog(&entries))
        .expect("render catalog");
    assert!(md.contains("| BTech | B.Tech in Computer Science | Engineering | Undergraduate | 3 | 2 |"));
}
