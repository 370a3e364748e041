use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{FilterFormSync, DEFAULT_SEARCH_PATH};
use crate::models::{FilterOptions, MissingSearch};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub filters: FilterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_path")]
    pub path: String,
    #[serde(default)]
    pub missing_search: MissingSearch,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            path: default_search_path(),
            missing_search: MissingSearch::default(),
        }
    }
}

fn default_search_path() -> String { DEFAULT_SEARCH_PATH.to_string() }

/// Allow-lists for the caller-configurable filter fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub hometowns: Vec<String>,
    #[serde(default)]
    pub work: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

impl FilterSettings {
    pub fn to_options(&self) -> FilterOptions {
        FilterOptions::new(self.hometowns.clone(), self.work.clone(), self.education.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Environment source shared by both loaders
///
/// e.g. LUME__SERVER__PORT -> server.port,
/// LUME__FILTERS__HOMETOWNS=Paris,London -> filters.hometowns
fn environment() -> Environment {
    Environment::with_prefix("LUME")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("filters.hometowns")
        .with_list_parse_key("filters.work")
        .with_list_parse_key("filters.education")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LUME__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Form synchroniser built from the `filters` and `search` sections
    pub fn filter_form_sync(&self) -> FilterFormSync {
        FilterFormSync::new(self.filters.to_options())
            .with_search_path(self.search.path.clone())
            .with_missing_search(self.search.missing_search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let settings = from_toml("[server]\nhost = \"127.0.0.1\"\nport = 8080\n");

        assert_eq!(settings.search.path, "/search/");
        assert_eq!(settings.search.missing_search, MissingSearch::Empty);
        assert!(settings.filters.hometowns.is_empty());
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_filters_and_search_sections() {
        let settings = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [search]
            path = "/people/"
            missing_search = "literal_null"

            [filters]
            hometowns = ["Paris", "Berlin"]
            work = ["Acme"]
            education = []
            "#,
        );

        let sync = settings.filter_form_sync();
        assert_eq!(sync.search_path(), "/people/");
        assert_eq!(sync.reset_url(None), "/people/?search=null");
        assert_eq!(sync.options().hometown_filters, vec!["Paris", "Berlin"]);
        assert!(sync.options().education_filters.is_empty());
    }
}
