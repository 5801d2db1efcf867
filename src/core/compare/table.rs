//! Comparison table builder
//!
//! Projects a fixed field list over the selected colleges into rows, one row
//! per field and one cell per college.

use super::selection::{MAX_SELECTION, MIN_COMPARISON};
use crate::core::models::{College, FieldValue};
use serde::Serialize;

/// Rendered in place of a missing value
pub const PLACEHOLDER: &str = "—";

/// One attribute to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Row label
    pub label: &'static str,
    /// Source attribute key
    pub key: &'static str,
    /// Read from the college's placements instead of the college itself
    pub placement: bool,
    /// Appended to the rendered value when the value is set
    pub suffix: Option<&'static str>,
}

impl FieldSpec {
    const fn college(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            placement: false,
            suffix: None,
        }
    }

    const fn placement(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            placement: true,
            suffix: None,
        }
    }

    /// Resolve this field for one college
    #[must_use]
    pub fn resolve(&self, college: &College) -> FieldValue {
        if self.placement {
            college.placement_field(self.key)
        } else {
            college.field(self.key)
        }
    }
}

/// Fields shown when comparing colleges, in display order
pub const COMPARISON_FIELDS: [FieldSpec; 8] = [
    FieldSpec::college("Rating", "rating"),
    FieldSpec::college("Reviews", "reviewCount"),
    FieldSpec::college("Established", "established"),
    FieldSpec::college("Type", "type"),
    FieldSpec::college("Accreditation", "accreditation"),
    FieldSpec::placement("Highest Package", "highestPackage"),
    FieldSpec::placement("Average Package", "averagePackage"),
    FieldSpec {
        suffix: Some("%"),
        ..FieldSpec::placement("Placement %", "placementPercentage")
    },
];

/// One compared attribute across the selected colleges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Field label
    pub label: String,
    /// One rendered cell per college, in selection order
    pub cells: Vec<String>,
}

/// Render one cell.
///
/// Lists are joined with `", "`, missing values become [`PLACEHOLDER`], and
/// anything else is shown as-is with `suffix` appended only when the value is
/// set (so `0` with a `%` suffix renders as `"0"`).
#[must_use]
pub fn render_cell(value: &FieldValue, suffix: Option<&str>) -> String {
    let rendered = match value {
        FieldValue::List(items) => return items.join(", "),
        FieldValue::Missing => return PLACEHOLDER.to_string(),
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(n) => n.to_string(),
    };
    match suffix {
        Some(suffix) if value.is_truthy() => format!("{rendered}{suffix}"),
        _ => rendered,
    }
}

/// Build comparison rows for `selected`.
///
/// Expects two or three colleges; any other count yields no rows.
#[must_use]
pub fn build_table(selected: &[&College], fields: &[FieldSpec]) -> Vec<Row> {
    if !(MIN_COMPARISON..=MAX_SELECTION).contains(&selected.len()) {
        crate::debug!(
            "Comparison skipped: {} colleges selected",
            selected.len()
        );
        return Vec::new();
    }

    fields
        .iter()
        .map(|field| Row {
            label: field.label.to_string(),
            cells: selected
                .iter()
                .map(|college| render_cell(&field.resolve(college), field.suffix))
                .collect(),
        })
        .collect()
}

/// A comparison ready for display: college names as column headers plus rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Column headers, one per college
    pub headers: Vec<String>,
    /// Compared attributes
    pub rows: Vec<Row>,
}

impl ComparisonTable {
    /// Build a table over [`COMPARISON_FIELDS`]
    #[must_use]
    pub fn new(selected: &[&College]) -> Self {
        Self::with_fields(selected, &COMPARISON_FIELDS)
    }

    /// Build a table over custom fields
    #[must_use]
    pub fn with_fields(selected: &[&College], fields: &[FieldSpec]) -> Self {
        let rows = build_table(selected, fields);
        let headers = if rows.is_empty() {
            Vec::new()
        } else {
            selected.iter().map(|c| c.name.clone()).collect()
        };
        Self { headers, rows }
    }

    /// Whether there is nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Numeric, Placements};

    fn sample(id: u64, percentage: f64) -> College {
        let mut college = College::new(id, format!("College {id}"));
        college.rating = Some(Numeric::Number(4.5));
        college.college_type = Some("Private".to_string());
        college.accreditation = Some(vec!["NAAC A++".to_string(), "NIRF".to_string()]);
        college.placements = Some(Placements {
            highest_package: Some("45 LPA".to_string()),
            average_package: None,
            placement_percentage: Some(Numeric::Number(percentage)),
            top_recruiters: Vec::new(),
        });
        college
    }

    #[test]
    fn test_render_cell_cases() {
        let list = FieldValue::List(vec!["NAAC A++".to_string(), "NIRF".to_string()]);
        assert_eq!(render_cell(&list, None), "NAAC A++, NIRF");
        assert_eq!(render_cell(&FieldValue::Missing, None), "—");
        assert_eq!(render_cell(&FieldValue::Number(92.0), Some("%")), "92%");
        assert_eq!(render_cell(&FieldValue::Number(0.0), Some("%")), "0");
        assert_eq!(render_cell(&FieldValue::Number(4.5), None), "4.5");
        assert_eq!(render_cell(&FieldValue::Text(String::new()), Some("%")), "");
        assert_eq!(render_cell(&FieldValue::Missing, Some("%")), "—");
    }

    #[test]
    fn test_field_order_is_fixed() {
        let labels: Vec<&str> = COMPARISON_FIELDS.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "Rating",
                "Reviews",
                "Established",
                "Type",
                "Accreditation",
                "Highest Package",
                "Average Package",
                "Placement %",
            ]
        );
        assert_eq!(COMPARISON_FIELDS[7].suffix, Some("%"));
        assert!(COMPARISON_FIELDS[7].placement);
    }

    #[test]
    fn test_build_table_rows() {
        let a = sample(1, 92.0);
        let b = sample(2, 0.0);
        let rows = build_table(&[&a, &b], &COMPARISON_FIELDS);

        assert_eq!(rows.len(), COMPARISON_FIELDS.len());
        assert_eq!(rows[0].cells, vec!["4.5", "4.5"]);
        assert_eq!(rows[1].cells, vec!["—", "—"]);
        assert_eq!(rows[4].cells[0], "NAAC A++, NIRF");
        assert_eq!(rows[5].cells, vec!["45 LPA", "45 LPA"]);
        assert_eq!(rows[6].cells, vec!["—", "—"]);
        assert_eq!(rows[7].cells, vec!["92%", "0"]);
    }

    #[test]
    fn test_out_of_range_selection_is_empty() {
        let a = sample(1, 90.0);
        assert!(build_table(&[&a], &COMPARISON_FIELDS).is_empty());
        assert!(build_table(&[], &COMPARISON_FIELDS).is_empty());

        let many = [sample(1, 1.0), sample(2, 2.0), sample(3, 3.0), sample(4, 4.0)];
        let refs: Vec<&College> = many.iter().collect();
        assert!(build_table(&refs, &COMPARISON_FIELDS).is_empty());
        assert!(ComparisonTable::new(&refs).is_empty());
    }

    #[test]
    fn test_comparison_table_headers() {
        let a = sample(1, 90.0);
        let b = sample(2, 80.0);
        let table = ComparisonTable::new(&[&a, &b]);
        assert_eq!(table.headers, vec!["College 1", "College 2"]);
        assert!(!table.is_empty());
    }
}
