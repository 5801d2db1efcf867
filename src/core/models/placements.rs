//! Placement statistics model

use super::value::{FieldValue, Numeric};
use serde::{Deserialize, Serialize};

/// Placement record attached to a college.
///
/// Packages are display strings ("24 LPA") and are not guaranteed to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placements {
    /// Highest package offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_package: Option<String>,

    /// Average package offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_package: Option<String>,

    /// Share of students placed, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_percentage: Option<Numeric>,

    /// Recruiting companies
    #[serde(default)]
    pub top_recruiters: Vec<String>,
}

impl Placements {
    /// Resolve a placement attribute by its source key
    /// (`highestPackage`, `averagePackage`, `placementPercentage`, `topRecruiters`).
    #[must_use]
    pub fn field(&self, key: &str) -> FieldValue {
        match key {
            "highestPackage" => self.highest_package.as_ref().into(),
            "averagePackage" => self.average_package.as_ref().into(),
            "placementPercentage" => self.placement_percentage.as_ref().into(),
            "topRecruiters" => FieldValue::List(self.top_recruiters.clone()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let placements = Placements {
            highest_package: Some("45 LPA".to_string()),
            average_package: None,
            placement_percentage: Some(Numeric::Number(92.0)),
            top_recruiters: vec!["Google".to_string()],
        };

        assert_eq!(
            placements.field("highestPackage"),
            FieldValue::Text("45 LPA".to_string())
        );
        assert_eq!(placements.field("averagePackage"), FieldValue::Missing);
        assert_eq!(
            placements.field("placementPercentage"),
            FieldValue::Number(92.0)
        );
        assert_eq!(
            placements.field("topRecruiters"),
            FieldValue::List(vec!["Google".to_string()])
        );
        assert_eq!(placements.field("unknown"), FieldValue::Missing);
    }
}
