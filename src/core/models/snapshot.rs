//! Catalog snapshot: everything fetched from the backend at startup

use super::{Blog, College, Exam};
use serde::{Deserialize, Serialize};

/// Fully materialized catalog the engine works on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Colleges, in backend order
    #[serde(default)]
    pub colleges: Vec<College>,

    /// Entrance exams
    #[serde(default)]
    pub exams: Vec<Exam>,

    /// Blog posts
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

impl Snapshot {
    /// Snapshot holding only colleges
    #[must_use]
    pub const fn from_colleges(colleges: Vec<College>) -> Self {
        Self {
            colleges,
            exams: Vec::new(),
            blogs: Vec::new(),
        }
    }

    /// Look up a college by id
    #[must_use]
    pub fn college(&self, id: u64) -> Option<&College> {
        self.colleges.iter().find(|c| c.id == id)
    }
}
