//! User settings: a JSON file in the cache dir, written with defaults on first run. Every
//! field has a default, so a partial file is fine.

mod store;

use crate::ui::core::runtime::DEFAULT_DRAG_THRESHOLD;
use serde::{Deserialize, Serialize};

pub use store::{
    ensure_log_dir, ensure_settings_file_in, load_settings, load_settings_from, load_settings_in,
    SettingsError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Cells the pointer must travel (Manhattan) before a press becomes a drag.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: u16,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            theme: ThemeSettings::default(),
        }
    }
}

fn default_drag_threshold() -> u16 {
    DEFAULT_DRAG_THRESHOLD
}

/// Color overrides, each a name (`"cyan"`, `"salmon"`) or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            border: Some("dark_gray".to_string()),
            hover_border: Some("ansi_cyan".to_string()),
            drag_border: Some("yellow".to_string()),
            shadow: None,
            title_fg: Some("white".to_string()),
            label_fg: None,
            status_fg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/mod.rs"]
mod tests;
