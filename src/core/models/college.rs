//! College model

use super::value::{lenient_list, FieldValue, Numeric, StreamAttr};
use super::{Course, Placements};
use serde::{Deserialize, Serialize};

/// Tuition range in the catalog's currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeesRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound, never below `min`
    pub max: f64,
}

/// Represents a college as delivered by the catalog snapshot.
///
/// Colleges are immutable once loaded; every view over them (filtered lists,
/// grouped courses, comparison tables) is rebuilt rather than patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    /// Unique positive identifier
    pub id: u64,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Location as displayed, usually "City, State"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Campus image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Rating on a 0-5 scale (may arrive as text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Numeric>,

    /// Number of reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<Numeric>,

    /// Year established
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<Numeric>,

    /// Ownership type (e.g., "Government", "Private")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub college_type: Option<String>,

    /// Broad academic stream(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamAttr>,

    /// Accreditations, in display order
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub accreditation: Option<Vec<String>>,

    /// Tuition range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_range: Option<FeesRange>,

    /// Short highlight blurbs
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Courses offered; `None` when the source omitted the list or sent
    /// something that is not a list
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub courses: Option<Vec<Course>>,

    /// Placement statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placements: Option<Placements>,
}

impl College {
    /// Create a college with only an id and a name; every other field is absent
    #[must_use]
    pub const fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            location: None,
            image_url: None,
            logo_url: None,
            rating: None,
            review_count: None,
            established: None,
            college_type: None,
            stream: None,
            accreditation: None,
            fees_range: None,
            highlights: Vec::new(),
            courses: None,
            placements: None,
        }
    }

    /// Rating coerced to a number, if it is a valid one
    #[must_use]
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_ref().and_then(Numeric::as_f64)
    }

    /// City portion of the location ("New Delhi, Delhi" -> "New Delhi")
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.location
            .as_deref()
            .and_then(|loc| loc.split(',').next())
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// Courses offered, empty when the list is absent
    #[must_use]
    pub fn course_list(&self) -> &[Course] {
        self.courses.as_deref().unwrap_or_default()
    }

    /// Resolve a top-level attribute by its source key
    /// (`name`, `location`, `rating`, `reviewCount`, `established`, `type`,
    /// `stream`, `accreditation`, `highlights`).
    #[must_use]
    pub fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::Text(self.name.clone()),
            "location" => self.location.as_ref().into(),
            "rating" => self.rating.as_ref().into(),
            "reviewCount" => self.review_count.as_ref().into(),
            "established" => self.established.as_ref().into(),
            "type" => self.college_type.as_ref().into(),
            "stream" => match &self.stream {
                None => FieldValue::Missing,
                Some(StreamAttr::One(label)) => FieldValue::Text(label.clone()),
                Some(StreamAttr::Many(labels)) => FieldValue::List(labels.clone()),
            },
            "accreditation" => self
                .accreditation
                .clone()
                .map_or(FieldValue::Missing, FieldValue::List),
            "highlights" => FieldValue::List(self.highlights.clone()),
            _ => FieldValue::Missing,
        }
    }

    /// Resolve a placement attribute; `Missing` when the college has no placements
    #[must_use]
    pub fn placement_field(&self, key: &str) -> FieldValue {
        self.placements
            .as_ref()
            .map_or(FieldValue::Missing, |p| p.field(key))
    }
}
