//! Demo configuration from environment variables.

use datagrid::theme::ThemeMode;
use log::LevelFilter;
use thiserror::Error;

use crate::pages::Page;

pub const THEME_VAR: &str = "DATAGRID_THEME";
pub const PAGE_VAR: &str = "DATAGRID_PAGE";
pub const LOG_VAR: &str = "DATAGRID_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not one of {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub theme: ThemeMode,
    pub start_page: Page,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            start_page: Page::Input,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from `lookup`, which maps a variable name to its value.
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(THEME_VAR) {
            config.theme = parse_theme(&value).ok_or(ConfigError::InvalidValue {
                var: THEME_VAR,
                value,
                expected: "light, dark",
            })?;
        }

        if let Some(value) = get(PAGE_VAR) {
            config.start_page = parse_page(&value).ok_or(ConfigError::InvalidValue {
                var: PAGE_VAR,
                value,
                expected: "input, table",
            })?;
        }

        if let Some(value) = get(LOG_VAR) {
            let level = value.trim().parse::<LevelFilter>();
            config.log_level = level.map_err(|_| ConfigError::InvalidValue {
                var: LOG_VAR,
                value,
                expected: "off, error, warn, info, debug, trace",
            })?;
        }

        Ok(config)
    }
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn parse_page(value: &str) -> Option<Page> {
    match value.trim().to_ascii_lowercase().as_str() {
        "input" => Some(Page::Input),
        "table" | "datatable" => Some(Page::Table),
        _ => None,
    }
}
