//! Filtering and grouping behavior over the bundled sample catalog

use college_compass::core::catalog::{
    catalog, facets, filter, filter_grouped, normalize, offering_colleges, top_rated,
    CourseFilters, FilterInput, Filters,
};
use college_compass::core::loader::load_snapshot;
use college_compass::core::models::{College, Snapshot};
use std::path::Path;

fn sample() -> Snapshot {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/colleges.json");
    load_snapshot(&path).expect("sample snapshot should parse")
}

fn ids(colleges: &[&College]) -> Vec<u64> {
    colleges.iter().map(|c| c.id).collect()
}

fn filtered(colleges: &[College], input: &FilterInput) -> Vec<u64> {
    ids(&filter(colleges, &Filters::from_input(input)))
}

#[test]
fn default_input_keeps_everything_in_order() {
    let snapshot = sample();
    let input = FilterInput::default();

    assert!(Filters::from_input(&input).is_empty());
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 2, 3, 4, 5]);
}

#[test]
fn filtering_is_idempotent() {
    let snapshot = sample();
    let filters = Filters::from_input(&FilterInput {
        college_type: "Government".to_string(),
        min_rating: 4.0,
        ..FilterInput::default()
    });

    let once = filter(&snapshot.colleges, &filters);
    let twice = filter(once.iter().copied(), &filters);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn city_ignores_case_and_whitespace() {
    let snapshot = sample();
    let input = FilterInput {
        city: "  newdelhi  ".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 2]);
}

#[test]
fn course_filter_fails_open_without_course_list() {
    let snapshot = sample();
    let input = FilterInput {
        course: "computer".to_string(),
        ..FilterInput::default()
    };
    // College 4 publishes no course list and is kept
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 3, 4]);
}

#[test]
fn stream_filter_passes_colleges_without_stream() {
    let snapshot = sample();
    let input = FilterInput {
        stream: "engineering".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 3, 5]);
}

#[test]
fn stream_filter_matches_any_label() {
    let snapshot = sample();
    let input = FilterInput {
        stream: "Arts & Science".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![2, 5]);
}

#[test]
fn type_filter_passes_blank_type() {
    let snapshot = sample();
    let input = FilterInput {
        college_type: "Government".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 2, 4, 5]);
}

#[test]
fn min_rating_excludes_unrated() {
    let snapshot = sample();
    let input = FilterInput {
        min_rating: 4.5,
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 2, 5]);
}

#[test]
fn combined_filters_intersect() {
    let snapshot = sample();
    let input = FilterInput {
        college: "institute".to_string(),
        stream: "Engineering".to_string(),
        college_type: "Government".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&snapshot.colleges, &input), vec![1, 5]);
}

#[test]
fn courses_group_by_name_prefix() {
    let snapshot = sample();
    let groups = catalog(&snapshot.colleges);

    let summary: Vec<(&str, Vec<u64>)> = groups
        .iter()
        .map(|g| (g.course_key(), g.course_ids.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("BTech", vec![101, 102, 301]),
            ("MTech", vec![103]),
            ("BCom", vec![201]),
            ("BA", vec![202]),
            ("MBA", vec![302, 501]),
        ]
    );

    let btech = &groups[0].representative;
    assert_eq!(btech.name, "B.Tech in Computer Science");
    assert_eq!(btech.college_id, 1);
}

#[test]
fn grouping_covers_every_course_once() {
    let snapshot = sample();
    let derived = normalize(&snapshot.colleges);
    let groups = catalog(&snapshot.colleges);

    let mut grouped: Vec<u64> = groups.iter().flat_map(|g| g.course_ids.clone()).collect();
    let mut all: Vec<u64> = derived.iter().map(|c| c.id).collect();
    grouped.sort_unstable();
    all.sort_unstable();
    assert_eq!(grouped, all);
}

#[test]
fn normalization_fills_defaults() {
    let snapshot = sample();
    let derived = normalize(&snapshot.colleges);

    let ba = derived.iter().find(|c| c.id == 202).expect("course 202");
    assert_eq!(ba.level, "General");
    assert_eq!(ba.full_name, "BA Economics");
    assert_eq!(ba.description, "Course description coming soon");
    assert_eq!(ba.stream, "Commerce");

    let mba = derived.iter().find(|c| c.id == 501).expect("course 501");
    assert_eq!(mba.stream, "");
    assert_eq!(mba.full_name, "Post Graduate Programme in Management");
}

#[test]
fn offering_colleges_by_key() {
    let snapshot = sample();

    assert_eq!(ids(&offering_colleges(&snapshot.colleges, "BTech")), vec![1, 3]);
    assert_eq!(ids(&offering_colleges(&snapshot.colleges, "MBA")), vec![3, 5]);
    assert!(offering_colleges(&snapshot.colleges, "LLB").is_empty());
}

#[test]
fn grouped_course_filters() {
    let snapshot = sample();
    let groups = catalog(&snapshot.colleges);

    let postgrad = CourseFilters {
        level: Some("postgraduate".to_string()),
        ..CourseFilters::default()
    };
    let keys: Vec<&str> = filter_grouped(&groups, &postgrad)
        .iter()
        .map(|g| g.course_key())
        .collect();
    assert_eq!(keys, vec!["MTech", "MBA"]);

    let search = CourseFilters {
        search: Some("computer".to_string()),
        ..CourseFilters::default()
    };
    let hits = filter_grouped(&groups, &search);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].course_key(), "BTech");
    assert_eq!(hits[0].offering_count(), 3);
}

#[test]
fn top_rated_and_facets() {
    let snapshot = sample();

    let top = top_rated(&snapshot.colleges, 3);
    assert_eq!(ids(&top), vec![5, 1, 2]);

    let facets = facets(&snapshot.colleges);
    assert_eq!(
        facets.streams,
        vec!["Engineering", "Commerce", "Arts & Science", "Law"]
    );
    assert_eq!(facets.types, vec!["Government", "Private"]);
    assert_eq!(
        facets.cities,
        vec!["New Delhi", "Manipal", "Bengaluru", "Ahmedabad"]
    );
}

#[test]
fn malformed_course_keeps_siblings_and_course_filter() {
    let college: College = serde_json::from_str(
        r#"{"id": 7, "name": "Mixed", "courses": [
            {"id": 10, "name": "B.Tech CSE"},
            {"id": 11, "name": "MBA"},
            {"name": "Broken, no id"}
        ]}"#,
    )
    .expect("college with one bad course should parse");
    let colleges = vec![college];

    let derived: Vec<u64> = normalize(&colleges).iter().map(|c| c.id).collect();
    assert_eq!(derived, vec![10, 11]);

    let law = FilterInput {
        course: "law".to_string(),
        ..FilterInput::default()
    };
    assert!(filtered(&colleges, &law).is_empty());

    let mba = FilterInput {
        course: "mba".to_string(),
        ..FilterInput::default()
    };
    assert_eq!(filtered(&colleges, &mba), vec![7]);
}
