//! Shared library for `CollegeCompass`
//!
//! Filtering, grouping and comparison over a fetched college catalog, plus the
//! configuration, logging and report plumbing used by the CLI.

pub mod core;
pub mod logger;
pub mod shared;

pub use crate::core::config;
pub use shared::*;
