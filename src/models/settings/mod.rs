//! Timetable configuration model.
//!
//! Maps directly to `timetable.toml`. Every field has a default so an
//! empty or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::models::catalog::{default_classes, default_teachers};
use crate::models::template::ItemTemplate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Grid columns, in display order
    #[serde(default = "default_days")]
    pub days: Vec<String>,

    /// Grid rows grouped for display; all times of all sections form the
    /// time axis of the slot space
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionSettings>,

    #[serde(default = "default_classes")]
    pub classes: Vec<ItemTemplate>,

    #[serde(default = "default_teachers")]
    pub teachers: Vec<ItemTemplate>,

    #[serde(default)]
    pub window: WindowSettings,
}

/// A run of time rows, optionally followed by a full-width banner row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSettings {
    pub times: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Settings {
    /// Time labels across all sections, in display order.
    pub fn times(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| section.times.iter().cloned())
            .collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            days: default_days(),
            sections: default_sections(),
            classes: default_classes(),
            teachers: default_teachers(),
            window: WindowSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_days() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn default_sections() -> Vec<SectionSettings> {
    vec![
        SectionSettings {
            times: vec!["9AM".into(), "10AM".into(), "11AM".into()],
            banner: Some("Noon Break".into()),
        },
        SectionSettings {
            times: vec!["1PM".into(), "2PM".into()],
            banner: Some("Extra Curricular".into()),
        },
    ]
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_times_flatten_sections() {
        let settings = Settings::default();
        assert_eq!(settings.times(), ["9AM", "10AM", "11AM", "1PM", "2PM"]);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let settings: Settings = toml::from_str(
            r#"
            days = ["Mon", "Tue"]

            [[sections]]
            times = ["8AM"]

            [[classes]]
            id = "c1"
            label = "Chemistry"
            style = "bg-emerald-500 text-emerald-500"

            [window]
            width = 900.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.days, ["Mon", "Tue"]);
        assert_eq!(settings.times(), ["8AM"]);
        assert_eq!(settings.sections[0].banner, None);
        assert_eq!(settings.classes.len(), 1);
        assert_eq!(settings.classes[0].label, "Chemistry");
        assert_eq!(settings.classes[0].style_tag.accent(), "text-emerald-500");
        assert_eq!(settings.teachers, default_teachers());
        assert_eq!(settings.window.width, 900.0);
        assert_eq!(settings.window.height, 800.0);
    }
}
