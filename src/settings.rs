//! User-tunable input settings.
//!
//! Stored as JSON under the platform config directory. Every field has a
//! default, so a partial file (or `{}`) is valid and unknown keys are
//! ignored.

use crate::constants::{
    DEFAULT_DEBOUNCE_MS, RAW_BUTTON_PRIMARY, RAW_BUTTON_SECONDARY, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use crate::input::LogicalButton;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Mapping from raw platform button codes to logical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonMap {
    pub primary: u16,
    pub secondary: u16,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            primary: RAW_BUTTON_PRIMARY,
            secondary: RAW_BUTTON_SECONDARY,
        }
    }
}

impl ButtonMap {
    /// Swapped mapping for left-handed setups.
    pub fn left_handed() -> Self {
        Self {
            primary: RAW_BUTTON_SECONDARY,
            secondary: RAW_BUTTON_PRIMARY,
        }
    }

    /// Reject maps where one raw code is both primary and secondary.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.primary == self.secondary {
            return Err(SettingsError::AmbiguousButtons(self.primary));
        }
        Ok(())
    }

    /// Logical button for a raw code, `None` for buttons we don't unify.
    pub fn classify(&self, raw: u16) -> Option<LogicalButton> {
        if raw == self.primary {
            Some(LogicalButton::Primary)
        } else if raw == self.secondary {
            Some(LogicalButton::Secondary)
        } else {
            None
        }
    }
}

/// Input behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Delay for debounce schedulers built from these settings.
    /// Negative values are clamped to zero by the scheduler.
    pub debounce_delay_ms: i64,
    /// Scrollbar thickness override; probed from the platform when absent
    pub scrollbar_width: Option<f32>,
    pub buttons: ButtonMap,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            debounce_delay_ms: DEFAULT_DEBOUNCE_MS as i64,
            scrollbar_width: None,
            buttons: ButtonMap::default(),
        }
    }
}

impl InputSettings {
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.buttons.validate()?;
        Ok(settings)
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), "loaded input settings");
        Ok(settings)
    }

    /// Read settings from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }
}

/// `<config dir>/pointerkit/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
