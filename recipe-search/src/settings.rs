use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::state::SearchOptions;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,

    #[serde(default = "default_true")]
    pub validate_recipe_on_select: bool,

    #[serde(default = "default_true")]
    pub validate_location_on_select: bool,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

fn default_true() -> bool {
    true
}

fn environment() -> Environment {
    Environment::with_prefix("RECIPE_SEARCH")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load from the optional config file, then `RECIPE_SEARCH__*` environment overrides
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("RECIPE_SEARCH_CONFIG")
            .unwrap_or_else(|_| "recipe-search.toml".to_string());

        Self::from_config(
            Config::builder()
                .add_source(File::with_name(&config_path).required(false))
                .add_source(environment())
                .build()?,
        )
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_path.trim().is_empty() {
            return Err("catalog_path is required".to_string());
        }
        if self.log_buffer_size == 0 {
            return Err("log_buffer_size must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            validate_recipe_on_select: self.validate_recipe_on_select,
            validate_location_on_select: self.validate_location_on_select,
        }
    }
}
