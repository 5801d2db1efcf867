//! Entrance exam model

use super::value::StreamAttr;
use serde::{Deserialize, Serialize};

/// An entrance examination listed alongside colleges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Unique identifier
    pub id: u64,

    /// Short name (e.g., "JEE Main")
    #[serde(default)]
    pub name: String,

    /// Long-form name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Stream(s) the exam feeds into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamAttr>,

    /// Level (e.g., "National", "State", "University")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Exam date as displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,

    /// Mode (e.g., "Online", "Offline")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Conducting body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conducted_by: Option<String>,
}

impl Exam {
    /// Create an exam with only an id and a name
    #[must_use]
    pub const fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            full_name: None,
            stream: None,
            level: None,
            exam_date: None,
            mode: None,
            conducted_by: None,
        }
    }
}
