//! College comparison: the compare-list selection and the table built from it

pub mod selection;
pub mod table;

pub use selection::{CapacityExceeded, CompareSelection, MAX_SELECTION, MIN_COMPARISON};
pub use table::{build_table, render_cell, ComparisonTable, FieldSpec, Row, COMPARISON_FIELDS, PLACEHOLDER};
