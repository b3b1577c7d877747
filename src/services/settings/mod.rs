// Settings service
// Loads timetable.toml and turns it into a catalog and slot space

mod service;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::slot::{Dimension, SlotSpaceError};

pub use service::{build_catalog, build_controller, build_slot_space, SettingsService};

pub const SETTINGS_FILE_NAME: &str = "timetable.toml";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid slot space: {0}")]
    SlotSpace(#[from] SlotSpaceError),

    #[error("invalid {dimension} template: {message}")]
    Template { dimension: Dimension, message: String },
}

/// Where the settings file lives when no path is given explicitly.
pub fn default_settings_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(SETTINGS_FILE_NAME)
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "Ken24T", "RustTimetable") {
            proj_dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }
}
