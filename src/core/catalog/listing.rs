//! Secondary listings: filter choices, top-rated colleges, exams and blogs

use super::filter::{category_choice, contains_ci, text_choice};
use crate::core::models::{Blog, College, Exam};
use serde::Serialize;

/// Distinct values available for the listing's choice filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Streams, first-seen order
    pub streams: Vec<String>,
    /// College types, first-seen order
    pub types: Vec<String>,
    /// Cities, first-seen order
    pub cities: Vec<String>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Collect the distinct streams, types and cities present in `colleges`
#[must_use]
pub fn facets(colleges: &[College]) -> Facets {
    let mut facets = Facets::default();
    for college in colleges {
        if let Some(stream) = &college.stream {
            for label in stream.labels() {
                push_unique(&mut facets.streams, label);
            }
        }
        if let Some(kind) = &college.college_type {
            push_unique(&mut facets.types, kind);
        }
        if let Some(city) = college.city() {
            push_unique(&mut facets.cities, city);
        }
    }
    facets
}

/// The `n` highest-rated colleges. Ties keep input order; colleges without a
/// valid rating sort last.
pub fn top_rated<'a, I>(colleges: I, n: usize) -> Vec<&'a College>
where
    I: IntoIterator<Item = &'a College>,
{
    let mut ranked: Vec<&College> = colleges.into_iter().collect();
    ranked.sort_by(|a, b| {
        let ra = a.rating_value().unwrap_or(f64::NEG_INFINITY);
        let rb = b.rating_value().unwrap_or(f64::NEG_INFINITY);
        rb.total_cmp(&ra)
    });
    ranked.truncate(n);
    ranked
}

/// Predicates for the exam listing; `None` means inactive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamFilters {
    /// Case-insensitive substring of name or full name
    pub search: Option<String>,
    /// Case-insensitive stream; exams without a stream pass
    pub stream: Option<String>,
    /// Case-insensitive level
    pub level: Option<String>,
}

impl ExamFilters {
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

    /// Evaluate every active predicate against one exam
    #[must_use]
    pub fn matches(&self, exam: &Exam) -> bool {
        self.search.as_deref().is_none_or(|q| {
            contains_ci(&exam.name, q)
                || exam.full_name.as_deref().is_some_and(|f| contains_ci(f, q))
        }) && self.stream.as_deref().is_none_or(|s| {
            exam.stream
                .as_ref()
                .is_none_or(|attr| attr.labels().iter().any(|l| l.eq_ignore_ascii_case(s)))
        }) && self.level.as_deref().is_none_or(|l| {
            exam.level
                .as_deref()
                .is_some_and(|level| level.eq_ignore_ascii_case(l))
        })
    }
}

/// Keep the exams satisfying every active predicate, in order
#[must_use]
pub fn filter_exams<'a>(exams: &'a [Exam], filters: &ExamFilters) -> Vec<&'a Exam> {
    exams.iter().filter(|e| filters.matches(e)).collect()
}

/// Predicates for the blog listing; `None` means inactive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilters {
    /// Case-insensitive substring of title, excerpt or any tag
    pub search: Option<String>,
    /// Case-insensitive category
    pub category: Option<String>,
}

impl BlogFilters {
    /// Build from raw caller input; empty values and the `"All"` sentinel
    /// leave a predicate inactive
    #[must_use]
    pub fn from_choices(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: text_choice(search),
            category: category_choice(category),
        }
    }

    /// Evaluate every active predicate against one post
    #[must_use]
    pub fn matches(&self, blog: &Blog) -> bool {
        self.search.as_deref().is_none_or(|q| {
            contains_ci(&blog.title, q)
                || blog.excerpt.as_deref().is_some_and(|e| contains_ci(e, q))
                || blog.tags.iter().any(|t| contains_ci(t, q))
        }) && self.category.as_deref().is_none_or(|c| {
            blog.category
                .as_deref()
                .is_some_and(|cat| cat.eq_ignore_ascii_case(c))
        })
    }
}

/// Keep the posts satisfying every active predicate, in order
#[must_use]
pub fn filter_blogs<'a>(blogs: &'a [Blog], filters: &BlogFilters) -> Vec<&'a Blog> {
    blogs.iter().filter(|b| filters.matches(b)).collect()
}
