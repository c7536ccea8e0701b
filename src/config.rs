use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::DEFAULT_LOG_CAPACITY;

// Default configuration
pub const DEFAULT_SESSION: &str = "offline";
pub const DEFAULT_EMOTE_COLUMNS: usize = 8;

/// Session backends the login preferences can pick from: (id, display name)
pub const SESSIONS: &[(&str, &str)] = &[(DEFAULT_SESSION, "Offline roster")];

/// Proxy settings edited in the login preferences dialog
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProxySettings {
    pub use_proxy: bool,
    pub host: String,
    pub port: String,
    pub use_auth: bool,
    pub user: String,
    pub password: String,
}

/// RGB color for outgoing messages
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `rrggbb`, lowercase, without a leading '#'
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Font family choices offered by the font dialog
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamilyChoice {
    #[default]
    Proportional,
    Monospace,
}

/// Font, decorations and color applied to outgoing messages
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MessageStyle {
    pub family: FontFamilyChoice,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub color: Color,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            family: FontFamilyChoice::Proportional,
            size: 14.0,
            bold: false,
            italic: false,
            underline: false,
            strike: false,
            color: Color::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub account: String,
    pub session: String,
    pub use_http: bool,
    pub proxy: ProxySettings,
    pub message_style: MessageStyle,
    pub emote_columns: usize,
    pub log_capacity: usize,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            account: String::new(),
            session: DEFAULT_SESSION.to_string(),
            use_http: false,
            proxy: ProxySettings::default(),
            message_style: MessageStyle::default(),
            emote_columns: DEFAULT_EMOTE_COLUMNS,
            log_capacity: DEFAULT_LOG_CAPACITY,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Reject values that would make components fail at construction.
    pub fn validate(&self) -> Result<()> {
        if self.log_capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "log_capacity must be greater than 0".to_string(),
            ));
        }
        if self.emote_columns == 0 {
            return Err(Error::InvalidConfiguration(
                "emote_columns must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("org", "mesinyer", "mesinyer") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

/// Load settings from the default location. Missing, unreadable or invalid
/// files yield `None` so the caller falls back to defaults.
pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return None;
    }
    match load_settings_from(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring settings file: {}", e);
            None
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::new(255, 16, 0);
        assert_eq!(color.to_hex(), "ff1000");
        assert_eq!(Color::from_hex("#ff1000"), Some(color));
        assert_eq!(Color::from_hex("FF1000"), Some(color));
        assert_eq!(Color::from_hex("ff10"), None);
        assert_eq!(Color::from_hex("zz1000"), None);
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.emote_columns, DEFAULT_EMOTE_COLUMNS);
        assert_eq!(settings.log_capacity, DEFAULT_LOG_CAPACITY);
    }

    #[test]
    fn test_zero_log_capacity_is_invalid() {
        let settings = Settings {
            log_capacity: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.account = "me@example.com".to_string();
        settings.proxy.use_proxy = true;
        settings.proxy.host = "proxy.local".to_string();
        settings.message_style.bold = true;

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "account": "me@example.com" }"#).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.account, "me@example.com");
        assert_eq!(loaded.session, DEFAULT_SESSION);
        assert_eq!(loaded.emote_columns, DEFAULT_EMOTE_COLUMNS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load_settings_from(&path), Err(Error::Json(_))));
    }
}
