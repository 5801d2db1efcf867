//! Course grouping
//!
//! Collapses per-college course records into one logical course per
//! course key. Grouping is by name prefix only: "B.Tech in Computer Science"
//! and "B.Tech in Mechanical Engineering" both land under `BTech`, and the
//! first one seen provides the display metadata.

use super::filter::{category_choice, contains_ci, text_choice};
use super::normalize::{normalize, DerivedCourse};
use crate::core::models::College;
use serde::Serialize;
use std::collections::HashMap;

/// One logical course aggregated across colleges
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCourse {
    /// First-seen course for this key; supplies every display field
    pub representative: DerivedCourse,
    /// Ids of every underlying course sharing the key, in input order
    pub course_ids: Vec<u64>,
}

impl GroupedCourse {
    /// Grouping key
    #[must_use]
    pub fn course_key(&self) -> &str {
        &self.representative.course_key
    }

    /// Number of underlying course records. This counts records, not
    /// colleges: a college listing two programmes with the same key counts
    /// twice. See [`offering_colleges`] for the per-college view.
    #[must_use]
    pub fn offering_count(&self) -> usize {
        self.course_ids.len()
    }
}

/// Group derived courses by course key.
///
/// Groups come out in first-seen key order; later records only append their id.
#[must_use]
pub fn group(courses: &[DerivedCourse]) -> Vec<GroupedCourse> {
    let mut groups: Vec<GroupedCourse> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();

    for course in courses {
        if let Some(&idx) = index_by_key.get(course.course_key.as_str()) {
            groups[idx].course_ids.push(course.id);
        } else {
            index_by_key.insert(&course.course_key, groups.len());
            groups.push(GroupedCourse {
                representative: course.clone(),
                course_ids: vec![course.id],
            });
        }
    }

    crate::debug!(
        "Grouped {} course records into {} courses",
        courses.len(),
        groups.len()
    );
    groups
}

/// Normalize every college and group the resulting courses
#[must_use]
pub fn catalog(colleges: &[College]) -> Vec<GroupedCourse> {
    group(&normalize(colleges))
}

/// Colleges whose own course list contains a course with `course_key`,
/// in input order. Each college appears at most once.
#[must_use]
pub fn offering_colleges<'a>(colleges: &'a [College], course_key: &str) -> Vec<&'a College> {
    colleges
        .iter()
        .filter(|college| college.course_list().iter().any(|c| c.key() == course_key))
        .collect()
}

/// Predicates for the course catalog; `None` means inactive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilters {
    /// Case-insensitive substring of name, full name or course key
    pub search: Option<String>,
    /// Case-insensitive stream
    pub stream: Option<String>,
    /// Case-insensitive level
    pub level: Option<String>,
}

impl CourseFilters {
    /// Build from raw caller input; empty values and the `"All"` sentinel
    /// leave a predicate inactive
    #[must_use]
    pub fn from_choices(
        search: Option<String>,
        stream: Option<String>,
        level: Option<String>,
    ) -> Self {
        Self {
            search: text_choice(search),
            stream: category_choice(stream),
            level: category_choice(level),
        }
    }

    /// Evaluate every active predicate against one grouped course
    #[must_use]
    pub fn matches(&self, course: &GroupedCourse) -> bool {
        let rep = &course.representative;
        self.search.as_deref().is_none_or(|q| {
            contains_ci(&rep.name, q)
                || contains_ci(&rep.full_name, q)
                || contains_ci(&rep.course_key, q)
        }) && self
            .stream
            .as_deref()
            .is_none_or(|s| rep.stream.eq_ignore_ascii_case(s))
            && self
                .level
                .as_deref()
                .is_none_or(|l| rep.level.eq_ignore_ascii_case(l))
    }
}

/// Keep the grouped courses satisfying every active predicate, in order
#[must_use]
pub fn filter_grouped<'a>(
    groups: &'a [GroupedCourse],
    filters: &CourseFilters,
) -> Vec<&'a GroupedCourse> {
    groups.iter().filter(|g| filters.matches(g)).collect()
}
