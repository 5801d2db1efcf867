//! Predicate filter engine for college listings
//!
//! Every active predicate must hold for a college to be kept. Predicates are
//! total: missing or malformed data resolves to pass or fail per predicate,
//! never to an error. Output preserves input order.

use crate::core::models::College;
use serde::{Deserialize, Serialize};

/// UI sentinel meaning "do not constrain this category"
pub const ALL: &str = "All";

/// Raw filter state as entered in a listing form or on the command line.
///
/// Uses the form's conventions: empty strings, the [`ALL`] sentinel and a
/// zero rating all mean "no constraint". Convert with [`Filters::from_input`]
/// before filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterInput {
    /// College name query
    pub college: String,
    /// City query
    pub city: String,
    /// Course name query
    pub course: String,
    /// Selected stream or `"All"`
    pub stream: String,
    /// Selected college type or `"All"`
    pub college_type: String,
    /// Minimum rating, `0` for none
    pub min_rating: f64,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self {
            college: String::new(),
            city: String::new(),
            course: String::new(),
            stream: ALL.to_string(),
            college_type: ALL.to_string(),
            min_rating: 0.0,
        }
    }
}

/// Active listing predicates; `None` means the predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring of the college name
    pub college: Option<String>,
    /// Case- and whitespace-insensitive substring of the location
    pub city: Option<String>,
    /// Case-insensitive substring of any offered course name
    pub course: Option<String>,
    /// Case-insensitive exact stream
    pub stream: Option<String>,
    /// Case-sensitive exact college type
    pub college_type: Option<String>,
    /// Inclusive rating floor
    pub min_rating: Option<f64>,
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn category(value: &str) -> Option<String> {
    (!value.is_empty() && value != ALL).then(|| value.to_string())
}

/// Optional text query from a caller; empty means inactive
pub(crate) fn text_choice(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(text)
}

/// Optional choice from a caller; empty or [`ALL`] means inactive
pub(crate) fn category_choice(value: Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).and_then(category)
}

impl Filters {
    /// Translate raw form state, mapping empty strings, `"All"` and a
    /// non-positive rating to inactive predicates
    #[must_use]
    pub fn from_input(input: &FilterInput) -> Self {
        Self {
            college: text(&input.college),
            city: text(&input.city),
            course: text(&input.course),
            stream: category(&input.stream),
            college_type: category(&input.college_type),
            min_rating: (input.min_rating > 0.0).then_some(input.min_rating),
        }
    }

    /// Whether no predicate is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.college.is_none()
            && self.city.is_none()
            && self.course.is_none()
            && self.stream.is_none()
            && self.college_type.is_none()
            && self.min_rating.is_none()
    }

    /// Evaluate every active predicate against one college
    #[must_use]
    pub fn matches(&self, college: &College) -> bool {
        self.college
            .as_deref()
            .is_none_or(|q| matches_name(college, q))
            && self.city.as_deref().is_none_or(|q| matches_city(college, q))
            && self
                .course
                .as_deref()
                .is_none_or(|q| matches_course(college, q))
            && self
                .stream
                .as_deref()
                .is_none_or(|q| matches_stream(college, q))
            && self
                .college_type
                .as_deref()
                .is_none_or(|q| matches_type(college, q))
            && self.min_rating.is_none_or(|t| meets_rating(college, t))
    }
}

/// Case-insensitive substring test; an empty needle always matches
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn squash(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// College name contains `query`, ignoring case
#[must_use]
pub fn matches_name(college: &College, query: &str) -> bool {
    contains_ci(&college.name, query)
}

/// Location contains `query` once both have all whitespace removed, ignoring
/// case. A college without a location only matches a blank query.
#[must_use]
pub fn matches_city(college: &College, query: &str) -> bool {
    let needle = squash(query);
    if needle.is_empty() {
        return true;
    }
    college
        .location
        .as_deref()
        .is_some_and(|loc| squash(loc).contains(&needle))
}

/// Some offered course name contains `query`, ignoring case.
/// Passes when the college has no course list at all.
#[must_use]
pub fn matches_course(college: &College, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    college
        .courses
        .as_ref()
        .is_none_or(|courses| courses.iter().any(|c| contains_ci(&c.name, query)))
}

/// One of the college's streams equals `stream`, ignoring case and
/// surrounding whitespace. Passes when the college has no stream, or only
/// blank ones.
#[must_use]
pub fn matches_stream(college: &College, stream: &str) -> bool {
    let wanted = stream.trim().to_lowercase();
    let labels: Vec<&str> = college
        .stream
        .as_ref()
        .map(|attr| {
            attr.labels()
                .into_iter()
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .collect()
        })
        .unwrap_or_default();

    labels.is_empty() || labels.iter().any(|label| label.to_lowercase() == wanted)
}

/// College type equals `college_type` exactly. Passes when the type is
/// missing or blank.
#[must_use]
pub fn matches_type(college: &College, college_type: &str) -> bool {
    college
        .college_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .is_none_or(|t| t == college_type)
}

/// Rating is a valid positive number at or above `threshold`. A
/// non-positive threshold does not constrain.
#[must_use]
pub fn meets_rating(college: &College, threshold: f64) -> bool {
    if threshold <= 0.0 || threshold.is_nan() {
        return true;
    }
    college
        .rating_value()
        .is_some_and(|rating| rating > 0.0 && rating >= threshold)
}

/// Keep the colleges satisfying every active predicate, in input order
pub fn filter<'a, I>(colleges: I, filters: &Filters) -> Vec<&'a College>
where
    I: IntoIterator<Item = &'a College>,
{
    let kept: Vec<&College> = colleges
        .into_iter()
        .filter(|college| filters.matches(college))
        .collect();
    crate::debug!("College filter kept {} entries", kept.len());
    kept
}
