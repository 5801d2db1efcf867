//! Blog post model

use serde::{Deserialize, Serialize};

/// An editorial article from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Unique identifier
    pub id: u64,

    /// Headline
    #[serde(default)]
    pub title: String,

    /// Category (e.g., "Admissions", "Exams")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date as displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Teaser text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Blog {
    /// Create a post with only an id and a title
    #[must_use]
    pub const fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            category: None,
            author: None,
            date: None,
            excerpt: None,
            tags: Vec::new(),
        }
    }
}
