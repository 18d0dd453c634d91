//! Embedded Settings
//!
//! The browser has no config directory, so `todo.toml` is compiled in.

use todo_api::{Config, ConfigError};

const EMBEDDED: &str = include_str!("../todo.toml");

pub fn load() -> Result<Config, ConfigError> {
    Config::from_toml(EMBEDDED)
}
