//! Join settings read from TOML.
//!
//! Settings are plain values: parse them once with `parse_settings_toml` or
//! `load_settings` and hand the result to `join_with_settings`.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::join::{JoinMode, DEFAULT_SEPARATOR};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub join: JoinSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JoinSettings {
    pub separator: String,
    pub mode: JoinMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            join: JoinSettings {
                separator: DEFAULT_SEPARATOR.to_string(),
                mode: JoinMode::Toned,
            },
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Read and validate a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    parse_settings_toml(&fs::read_to_string(path)?)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.join.separator.chars().any(|c| c.is_control()) {
        return Err(SettingsError::InvalidValue {
            field: "join.separator".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_toml_matches_default() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.join.separator, " ");
        assert_eq!(s.join.mode, JoinMode::Toned);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[join]
separator = "-"
mode = "toneless"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.join.separator, "-");
        assert_eq!(s.join.mode, JoinMode::Toneless);
    }

    #[test]
    fn empty_separator_allowed() {
        let toml = "[join]\nseparator = \"\"\nmode = \"toned\"\n";
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.join.separator.is_empty());
    }

    #[test]
    fn error_control_separator() {
        let toml = "[join]\nseparator = \"\\n\"\nmode = \"toned\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = "[join]\nseparator = \" \"\nmode = \"numbered\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[join]\nseparator = \"'\"\nmode = \"toneless\"\n").unwrap();
        let s = load_settings(&path).unwrap();
        assert_eq!(s.join.separator, "'");
        assert_eq!(s.join.mode, JoinMode::Toneless);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
