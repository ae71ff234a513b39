//! Validated UI preferences on top of a key/value store.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SkillPathError;

/// Name of the store file managed by the store plugin.
pub const STORE_FILE: &str = "preferences.json";

const MAX_SECTION_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Theme,
    Locale,
    LastSection,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 3] = [
        PreferenceKey::Theme,
        PreferenceKey::Locale,
        PreferenceKey::LastSection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKey::Theme => "theme",
            PreferenceKey::Locale => "locale",
            PreferenceKey::LastSection => "last_section",
        }
    }

    pub fn parse(key: &str) -> Result<Self, SkillPathError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| SkillPathError::UnknownPreference(key.to_string()))
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            PreferenceKey::Theme => matches!(value, "system" | "light" | "dark"),
            PreferenceKey::Locale => matches!(value, "en" | "vi"),
            PreferenceKey::LastSection => {
                !value.is_empty()
                    && value.len() <= MAX_SECTION_LEN
                    && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            }
        }
    }

    pub fn validate(self, value: &str) -> Result<(), SkillPathError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(SkillPathError::InvalidPreference {
                key: self.as_str().to_string(),
                value: value.to_string(),
            })
        }
    }
}

/// Snapshot of every known preference, sent to the frontend at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    pub theme: Option<String>,
    pub locale: Option<String>,
    pub last_section: Option<String>,
}

/// String key/value persistence.
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SkillPathError>;
}

/// Reads a preference. Stored values that no longer validate read as unset.
pub fn read_preference(
    backend: &impl PreferenceBackend,
    key: &str,
) -> Result<Option<String>, SkillPathError> {
    let key = PreferenceKey::parse(key)?;
    Ok(read_known(backend, key))
}

fn read_known(backend: &impl PreferenceBackend, key: PreferenceKey) -> Option<String> {
    let value = backend.get(key.as_str())?;
    match key.validate(&value) {
        Ok(()) => Some(value),
        Err(e) => {
            warn!("Ignoring stored preference: {}", e);
            None
        }
    }
}

pub fn write_preference(
    backend: &impl PreferenceBackend,
    key: &str,
    value: &str,
) -> Result<(), SkillPathError> {
    let key = PreferenceKey::parse(key)?;
    key.validate(value)?;
    info!("Setting preference: {} = {}", key.as_str(), value);
    backend.set(key.as_str(), value)
}

pub fn read_ui_preferences(backend: &impl PreferenceBackend) -> UiPreferences {
    UiPreferences {
        theme: read_known(backend, PreferenceKey::Theme),
        locale: read_known(backend, PreferenceKey::Locale),
        last_section: read_known(backend, PreferenceKey::LastSection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(PreferenceKey::parse("theme"), Ok(PreferenceKey::Theme));
        assert_eq!(PreferenceKey::parse("last_section"), Ok(PreferenceKey::LastSection));
        assert_eq!(
            PreferenceKey::parse("api_key"),
            Err(SkillPathError::UnknownPreference("api_key".to_string()))
        );
    }

    #[test]
    fn test_theme_values() {
        assert!(PreferenceKey::Theme.validate("dark").is_ok());
        assert!(PreferenceKey::Theme.validate("sepia").is_err());
    }

    #[test]
    fn test_last_section_values() {
        assert!(PreferenceKey::LastSection.validate("mockTests").is_ok());
        assert!(PreferenceKey::LastSection.validate("").is_err());
        assert!(PreferenceKey::LastSection.validate("../etc").is_err());
        assert!(PreferenceKey::LastSection.validate(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_invalid_message_names_key() {
        let err = PreferenceKey::Locale.validate("fr").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for locale: \"fr\"");
    }
}
