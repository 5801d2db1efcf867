//! Data models for `CollegeCompass`

pub mod blog;
pub mod college;
pub mod course;
pub mod exam;
pub mod placements;
pub mod snapshot;
pub mod value;

pub use blog::Blog;
pub use college::{College, FeesRange};
pub use course::{course_key, Course};
pub use exam::Exam;
pub use placements::Placements;
pub use snapshot::Snapshot;
pub use value::{FieldValue, Numeric, StreamAttr};
