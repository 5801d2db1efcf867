//! Compare-list selection

use crate::core::models::College;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Maximum number of colleges that can be compared at once
pub const MAX_SELECTION: usize = 3;

/// Minimum number of colleges needed before a comparison is shown
pub const MIN_COMPARISON: usize = 2;

/// Returned when adding to a full selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// Id that was not added
    pub rejected: u64,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You can compare up to {MAX_SELECTION} colleges at a time")
    }
}

impl Error for CapacityExceeded {}

/// Ordered set of college ids chosen for comparison.
///
/// Insertion order is display order. Toggling returns a new selection and
/// never changes the receiver. Serialized as a plain id list; deserializing
/// rejects duplicates and lists longer than [`MAX_SELECTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct CompareSelection {
    ids: Vec<u64>,
}

impl CompareSelection {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Selected ids in insertion order
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Number of selected ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is selected
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Whether no more ids can be added
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    /// Whether enough ids are selected to build a comparison
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        self.ids.len() >= MIN_COMPARISON
    }

    /// Remove `id` if present, otherwise append it.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] when `id` is absent and the selection is
    /// already full; `self` is left as it was.
    pub fn toggle(&self, id: u64) -> Result<Self, CapacityExceeded> {
        if self.contains(id) {
            return Ok(Self {
                ids: self.ids.iter().copied().filter(|&x| x != id).collect(),
            });
        }
        if self.is_full() {
            return Err(CapacityExceeded { rejected: id });
        }
        let mut ids = self.ids.clone();
        ids.push(id);
        Ok(Self { ids })
    }

    /// Look up the selected colleges in selection order. Ids with no
    /// matching college are skipped.
    #[must_use]
    pub fn resolve<'a>(&self, colleges: &'a [College]) -> Vec<&'a College> {
        self.ids
            .iter()
            .filter_map(|id| colleges.iter().find(|c| c.id == *id))
            .collect()
    }
}

impl TryFrom<Vec<u64>> for CompareSelection {
    type Error = String;

    fn try_from(ids: Vec<u64>) -> Result<Self, Self::Error> {
        ids.into_iter().try_fold(Self::new(), |selection, id| {
            if selection.contains(id) {
                return Err(format!("College {id} is selected twice"));
            }
            selection.toggle(id).map_err(|e| e.to_string())
        })
    }
}

impl From<CompareSelection> for Vec<u64> {
    fn from(selection: CompareSelection) -> Self {
        selection.ids
    }
}
