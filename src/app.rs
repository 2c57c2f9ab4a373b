use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use adw::Application;
use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{TimestampStyle, DEFAULT_TIMESTAMP_FORMAT};

pub const URL_ENV: &str = "GUESTBOOK_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub timestamp_format: String,
    pub utc_offset_minutes: Option<i32>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            utc_offset_minutes: None,
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    fn toml_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "example", "guestbook-gtk")?;
        Some(proj.config_dir().join("guestbook.toml"))
    }

    /// Settings from the user config file, falling back to defaults when it
    /// is missing or unreadable. `GUESTBOOK_URL` overrides the stored URL.
    pub fn load() -> Self {
        let mut settings = match Self::toml_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        };
        if let Ok(url) = std::env::var(URL_ENV) {
            if !url.trim().is_empty() {
                settings.base_url = url;
            }
        }
        settings
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::toml_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn timestamp_style(&self) -> TimestampStyle {
        TimestampStyle::new(
            &self.timestamp_format,
            self.utc_offset_minutes.and_then(|m| FixedOffset::east_opt(m * 60)),
        )
    }
}

pub fn build_ui(app: &Application) {
    let settings = Settings::load();
    if settings.is_configured() {
        crate::ui::main_window::show_main_window(app, settings);
    } else {
        crate::ui::connect::show_connect_window(app);
    }
}
