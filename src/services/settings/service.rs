use std::fs;
use std::path::{Path, PathBuf};

use super::{default_settings_path, SettingsError};
use crate::models::catalog::Catalog;
use crate::models::settings::Settings;
use crate::models::slot::{Dimension, SlotSpace};
use crate::models::template::ItemTemplate;
use crate::services::drag::DragController;

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load and validate, falling back to defaults on any failure.
    pub fn load_or_default(&self) -> Settings {
        let settings = match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                return Settings::default();
            }
        };

        if let Err(e) = build_slot_space(&settings).and_then(|_| build_catalog(&settings)) {
            log::warn!("Invalid settings in {}: {}, using defaults", self.path.display(), e);
            return Settings::default();
        }

        settings
    }
}

pub fn build_slot_space(settings: &Settings) -> Result<SlotSpace, SettingsError> {
    Ok(SlotSpace::new(settings.days.clone(), settings.times())?)
}

pub fn build_catalog(settings: &Settings) -> Result<Catalog, SettingsError> {
    validate_templates(Dimension::Classes, &settings.classes)?;
    validate_templates(Dimension::Teachers, &settings.teachers)?;
    Ok(Catalog::new(
        settings.classes.clone(),
        settings.teachers.clone(),
    ))
}

pub fn build_controller(settings: &Settings) -> Result<DragController, SettingsError> {
    Ok(DragController::new(
        build_catalog(settings)?,
        build_slot_space(settings)?,
    ))
}

fn validate_templates(dimension: Dimension, templates: &[ItemTemplate]) -> Result<(), SettingsError> {
    for template in templates {
        template
            .validate()
            .map_err(|message| SettingsError::Template { dimension, message })?;
    }
    Ok(())
}
