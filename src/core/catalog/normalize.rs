//! Entity normalizer
//!
//! Flattens each college's course list into per-course records that carry the
//! keys the listing filters and the grouping step rely on. Inputs are never
//! modified; a fresh record is produced per course.

use crate::core::models::{course_key, College, Course, Numeric, StreamAttr};
use serde::Serialize;

/// Level used when a course does not state one
pub const DEFAULT_LEVEL: &str = "General";

/// Description used when a course has no `about` text
pub const DESCRIPTION_PLACEHOLDER: &str = "Course description coming soon";

/// A course enriched with the fields derived from its owning college
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedCourse {
    /// Source course id
    pub id: u64,
    /// Owning college id
    pub college_id: u64,
    /// Course name as listed
    pub name: String,
    /// Long-form name, falling back to `name`
    pub full_name: String,
    /// Grouping key, see [`course_key`]
    pub course_key: String,
    /// Owning college's stream, trimmed; empty when the college has none
    pub stream: String,
    /// Course level, or [`DEFAULT_LEVEL`]
    pub level: String,
    /// Course description, or [`DESCRIPTION_PLACEHOLDER`]
    pub description: String,
    /// Duration as displayed
    pub duration: Option<String>,
    /// Fees
    pub fees: Option<Numeric>,
    /// Eligibility criteria
    pub eligibility: Option<String>,
}

/// Treat blank text as absent
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl DerivedCourse {
    /// Derive the record for one course offered by `college`
    #[must_use]
    pub fn from_course(college: &College, course: &Course) -> Self {
        let stream = college
            .stream
            .as_ref()
            .and_then(StreamAttr::primary)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Self {
            id: course.id,
            college_id: college.id,
            name: course.name.clone(),
            full_name: present(course.full_name.as_ref())
                .unwrap_or(&course.name)
                .to_string(),
            course_key: course_key(&course.name),
            stream,
            level: present(course.level.as_ref())
                .unwrap_or(DEFAULT_LEVEL)
                .to_string(),
            description: present(course.about.as_ref())
                .unwrap_or(DESCRIPTION_PLACEHOLDER)
                .to_string(),
            duration: course.duration.clone(),
            fees: course.fees.clone(),
            eligibility: course.eligibility.clone(),
        }
    }
}

/// Derive records for every course of a single college.
///
/// A college without a course list contributes nothing.
#[must_use]
pub fn derive_courses(college: &College) -> Vec<DerivedCourse> {
    college
        .course_list()
        .iter()
        .map(|course| DerivedCourse::from_course(college, course))
        .collect()
}

/// Derive records for every course of every college, in college order then
/// course order.
#[must_use]
pub fn normalize(colleges: &[College]) -> Vec<DerivedCourse> {
    let derived: Vec<DerivedCourse> = colleges.iter().flat_map(derive_courses).collect();
    crate::debug!(
        "Normalized {} courses from {} colleges",
        derived.len(),
        colleges.len()
    );
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college_with(courses: Option<Vec<Course>>) -> College {
        let mut college = College::new(10, "Test College".to_string());
        college.stream = Some(StreamAttr::One("  Engineering ".to_string()));
        college.courses = courses;
        college
    }

    #[test]
    fn test_defaults_applied() {
        let college = college_with(Some(vec![Course::new(1, "B.Tech in AI".to_string())]));
        let derived = derive_courses(&college);

        assert_eq!(derived.len(), 1);
        let course = &derived[0];
        assert_eq!(course.course_key, "BTech");
        assert_eq!(course.stream, "Engineering");
        assert_eq!(course.level, DEFAULT_LEVEL);
        assert_eq!(course.full_name, "B.Tech in AI");
        assert_eq!(course.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(course.college_id, 10);
    }

    #[test]
    fn test_own_fields_win() {
        let mut course = Course::new(2, "M.Tech in AI".to_string());
        course.level = Some("Postgraduate".to_string());
        course.full_name = Some("Master of Technology in AI".to_string());
        course.about = Some("Two-year programme".to_string());

        let derived = derive_courses(&college_with(Some(vec![course])));
        assert_eq!(derived[0].level, "Postgraduate");
        assert_eq!(derived[0].full_name, "Master of Technology in AI");
        assert_eq!(derived[0].description, "Two-year programme");
    }

    #[test]
    fn test_missing_courses_contribute_nothing() {
        assert!(derive_courses(&college_with(None)).is_empty());
    }

    #[test]
    fn test_college_without_stream() {
        let mut college = college_with(Some(vec![Course::new(3, "MBA".to_string())]));
        college.stream = None;
        assert_eq!(derive_courses(&college)[0].stream, "");
    }

    #[test]
    fn test_normalize_preserves_order() {
        let first = college_with(Some(vec![
            Course::new(1, "B.Tech X".to_string()),
            Course::new(2, "MBA".to_string()),
        ]));
        let mut second = college_with(Some(vec![Course::new(3, "B.Com".to_string())]));
        second.id = 11;

        let ids: Vec<u64> = normalize(&[first, second]).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
