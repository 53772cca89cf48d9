//! Environment configuration and user-facing copy.
//!
//! # Responsibility
//! - Resolve `TASKLIST_*` environment settings into typed config.
//! - Hold the dialog/notice strings shown by the screen.
//!
//! # Invariants
//! - Missing variables fall back to defaults; malformed ones are errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "TASKLIST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKLIST_LOG_DIR";
pub const ENV_LOCALE: &str = "TASKLIST_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLocale(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLocale(value) => write!(
                f,
                "unsupported locale `{value}` in {ENV_LOCALE}; expected en|pt-BR"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Language of the dialog copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    PortugueseBrazil,
}

impl Locale {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::English),
            "pt" | "pt-br" => Ok(Self::PortugueseBrazil),
            _ => Err(ConfigError::UnsupportedLocale(value.trim().to_string())),
        }
    }
}

/// Strings for the notices and dialogs raised by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCopy {
    pub duplicate_title: String,
    pub duplicate_message: String,
    pub remove_title: String,
    pub remove_message: String,
    pub remove_confirm: String,
    pub remove_cancel: String,
}

impl ScreenCopy {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self {
                duplicate_title: "Task already registered".to_string(),
                duplicate_message: "You cannot register a task with the same name".to_string(),
                remove_title: "Remove item".to_string(),
                remove_message: "Are you sure you want to remove this item?".to_string(),
                remove_confirm: "OK".to_string(),
                remove_cancel: "Cancel".to_string(),
            },
            Locale::PortugueseBrazil => Self {
                duplicate_title: "Task já cadastrada".to_string(),
                duplicate_message: "Você não pode cadastrar uma task com o mesmo nome"
                    .to_string(),
                remove_title: "Remover item".to_string(),
                remove_message: "Tem certeza de que deseja remover este item?".to_string(),
                remove_confirm: "OK".to_string(),
                remove_cancel: "Cancelar".to_string(),
            },
        }
    }
}

impl Default for ScreenCopy {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Settings resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw level string; validated by `logging::init_logging`.
    pub log_level: String,
    /// Log directory; `None` leaves file logging off.
    pub log_dir: Option<String>,
    pub locale: Locale,
}

impl AppConfig {
    /// Reads config from `std::env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let locale = match non_empty(ENV_LOCALE) {
            Some(value) => Locale::parse(&value)?,
            None => Locale::default(),
        };

        Ok(Self {
            log_level: non_empty(ENV_LOG_LEVEL)
                .unwrap_or_else(|| crate::logging::default_log_level().to_string()),
            log_dir: non_empty(ENV_LOG_DIR),
            locale,
        })
    }

    pub fn copy(&self) -> ScreenCopy {
        ScreenCopy::for_locale(self.locale)
    }
}
