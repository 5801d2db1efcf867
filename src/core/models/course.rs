//! Course model

use super::value::Numeric;
use serde::{Deserialize, Serialize};

/// A course as offered by one specific college.
///
/// The same programme (by name) recurs across many colleges, each with its
/// own `id`; there is no cross-college identity other than the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Identifier, unique across the whole dataset
    pub id: u64,

    /// Course name (e.g., "B.Tech in Computer Science")
    #[serde(default)]
    pub name: String,

    /// Long-form name (e.g., "Bachelor of Technology in Computer Science")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Duration as displayed (e.g., "4 Years")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Programme level (e.g., "Undergraduate")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Fees, numeric or a display string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Numeric>,

    /// Eligibility criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,

    /// Description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl Course {
    /// Create a course with only an id and a name
    #[must_use]
    pub const fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            full_name: None,
            duration: None,
            level: None,
            fees: None,
            eligibility: None,
            about: None,
        }
    }

    /// Grouping key for this course: the first whitespace-delimited token of
    /// the name with every `.` removed ("B.Tech in AI" -> "BTech").
    #[must_use]
    pub fn key(&self) -> String {
        course_key(&self.name)
    }
}

/// Compute the grouping key for a course name.
///
/// A blank name yields an empty key.
#[must_use]
pub fn course_key(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .replace('.', "")
}
