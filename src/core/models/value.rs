//! Lenient value types shared by the catalog models
//!
//! The backend is loosely typed: ratings and fees arrive as numbers or as
//! display strings, streams as a single label or a list, and nested lists may
//! be missing entirely. These types accept all of those shapes so that
//! deciding what "missing" means is left to the engine rather than the parser.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A value that is numeric in spirit but may be delivered as text
/// (e.g. `4.5`, `"4.5"`, `"₹ 1.2L"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// A JSON number
    Number(f64),
    /// A JSON string, kept verbatim for display
    Text(String),
}

impl Numeric {
    /// Coerce to a number. Text is trimmed and parsed; anything unparseable
    /// (or non-finite) yields `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// College-level stream attribute: either one label or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamAttr {
    /// A single stream label, e.g. `"Engineering"`
    One(String),
    /// Several stream labels
    Many(Vec<String>),
}

impl StreamAttr {
    /// All labels carried by this attribute, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::One(label) => vec![label.as_str()],
            Self::Many(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    /// The first label, used where a single stream is needed.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.labels().into_iter().next()
    }
}

/// A resolved attribute value ready for display in a comparison cell.
///
/// Truthiness follows what a reader of the listing would expect from the
/// source data: missing values, empty text and zero are "falsy", lists are
/// always "truthy" (even when empty).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Attribute absent
    Missing,
    /// Textual value, rendered verbatim
    Text(String),
    /// Numeric value
    Number(f64),
    /// Ordered list of labels
    List(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as "set" for suffix decoration.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::List(_) => true,
        }
    }
}

impl From<Option<&Numeric>> for FieldValue {
    fn from(value: Option<&Numeric>) -> Self {
        match value {
            None => Self::Missing,
            Some(Numeric::Number(n)) => Self::Number(*n),
            Some(Numeric::Text(s)) => Self::Text(s.clone()),
        }
    }
}

impl From<Option<&String>> for FieldValue {
    fn from(value: Option<&String>) -> Self {
        value.map_or(Self::Missing, |s| Self::Text(s.clone()))
    }
}

/// Deserialize an optional list leniently.
///
/// Any non-list value (including `null`) becomes `None`. Inside a list,
/// elements that fail to deserialize are dropped and the rest are kept.
///
/// # Errors
/// Only propagates errors from the underlying deserializer itself.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Element<T> {
        Valid(T),
        Invalid(serde::de::IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeList<T> {
        List(Vec<Element<T>>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match MaybeList::<T>::deserialize(deserializer)? {
        MaybeList::List(elements) => {
            let total = elements.len();
            let items: Vec<T> = elements
                .into_iter()
                .filter_map(|element| match element {
                    Element::Valid(item) => Some(item),
                    Element::Invalid(_) => None,
                })
                .collect();
            if items.len() < total {
                crate::debug!("Dropped {} malformed list entries", total - items.len());
            }
            Some(items)
        }
        MaybeList::Other(_) => None,
    })
}
