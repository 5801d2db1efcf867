//! Shared helpers re-exported at the crate root

pub mod logger;

/// Returns the current version of the `CollegeCompass` crate
#[must_use]
pub const fn get_version() -> &'static str {
    crate::core::get_version()
}
