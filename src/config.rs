use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use crate::error::Result;

const APP_PREFIX: &str = "clockwise";
const CONFIG: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Suggestions shown in the category field; any text is still accepted.
    pub categories: Vec<String>,
    pub remind_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            categories: vec!["Work".to_owned(), "Personal".to_owned()],
            remind_on_start: false,
        }
    }
}

impl Config {
    /// Loads `$XDG_CONFIG_HOME/clockwise/config.toml`, falling back to the
    /// defaults when no such file exists.
    pub fn load() -> Result<Self> {
        let dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
        match dirs.find_config_file(CONFIG) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No {CONFIG} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration from {path:?}");
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn category_hint(&self) -> String {
        if self.categories.is_empty() {
            "Category".to_owned()
        } else {
            self.categories.join(" / ")
        }
    }
}
