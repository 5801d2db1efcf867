//! Re-export of the logger API under `college_compass::shared::logger`.

pub use crate::logger::{
    enable_debug, enable_verbose, init_file_logging, is_debug_enabled, is_verbose_enabled, level,
    set_level, set_level_from_str, Level,
};
