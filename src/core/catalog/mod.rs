//! Catalog views: normalization, filtering and grouping of the loaded snapshot
//!
//! Everything here is a pure function of its inputs and is recomputed
//! wholesale whenever the inputs change.

pub mod filter;
pub mod group;
pub mod listing;
pub mod normalize;

pub use filter::{filter, FilterInput, Filters, ALL};
pub use group::{catalog, filter_grouped, group, offering_colleges, CourseFilters, GroupedCourse};
pub use listing::{
    facets, filter_blogs, filter_exams, top_rated, BlogFilters, ExamFilters, Facets,
};
pub use normalize::{derive_courses, normalize, DerivedCourse};
