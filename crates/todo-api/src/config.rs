//! Client Configuration
//!
//! Parsed from TOML. Every section is optional and falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub user: UserSection,
    pub notice: NoticeSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSection {
    /// Owner of the managed todos; 0 means unset
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeSection {
    /// How long an error banner stays visible
    pub hide_after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: "https://mate.academy/students-api".to_string(),
        }
    }
}

impl Default for UserSection {
    fn default() -> Self {
        Self { id: 11028 }
    }
}

impl Default for NoticeSection {
    fn default() -> Self {
        Self { hide_after_ms: 3000 }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// `None` when no user is configured
    pub fn session(&self) -> Option<Session> {
        Session::new(self.api.base_url.clone(), self.user.id)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
