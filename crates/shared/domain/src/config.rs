use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub api: ApiConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Deserializes straight through [`AppConfigInner`] so loaders that coerce string values
/// (environment variables) reach the typed fields directly.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "AppConfigInner")]
pub struct AppConfig {
    inner: Arc<AppConfigInner>,
}

impl From<AppConfigInner> for AppConfig {
    fn from(inner: AppConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the restaurant REST API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Translation catalogs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Active locale tag, e.g. `de` or `en-US`.
    pub locale: String,
    /// Locale consulted when the active one has no entry for a key.
    pub fallback_locale: String,
    /// Directory holding `<locale>.json` catalogs that extend the built-in ones.
    pub catalog_dir: Option<PathBuf>,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Extra directives, e.g. `brigade_recipes=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:8080/api".to_owned(), timeout_seconds: 30 }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { locale: "en".to_owned(), fallback_locale: "en".to_owned(), catalog_dir: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            dir: None,
            json: false,
            max_files: 10,
        }
    }
}
