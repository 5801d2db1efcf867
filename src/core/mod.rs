//! Core module: catalog models and the views computed over them

pub mod catalog;
pub mod compare;
pub mod config;
pub mod loader;
pub mod models;
pub mod report;

/// Returns the current version of the `CollegeCompass` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
