//! Facade crate for Brigade features and shared modules.
//! Re-exports domain/kernel primitives and composes the per-process context.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `brigade` with the desired feature flags (`recipes`/`menu`, both on by default).
//! - Call [`Context::load`] once at startup and pass the context to whatever needs config or
//!   translations.

pub use brigade_domain as domain;
pub use brigade_kernel as kernel;

use brigade_domain::config::AppConfig;
use brigade_kernel::KernelError;
use brigade_kernel::i18n::Translator;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "menu")]
    pub use brigade_menu as menu;
    #[cfg(feature = "recipes")]
    pub use brigade_recipes as recipes;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "recipes")]
        "recipes",
        #[cfg(feature = "menu")]
        "menu",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "menu")]
pub use brigade_menu as menu;
#[cfg(feature = "recipes")]
pub use brigade_recipes as recipes;

/// Configuration and translations resolved once per process.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
    pub translator: Arc<Translator>,
}

impl Context {
    /// Loads configuration (optional file plus `BRIGADE__*` overrides) and builds the translator.
    ///
    /// # Errors
    /// Returns [`KernelError`] if the configuration or an extra catalog cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self, KernelError> {
        let config: AppConfig = brigade_kernel::config::load_config(path)?;
        Self::from_config(config)
    }

    /// Builds a context from an already loaded configuration.
    ///
    /// # Errors
    /// Returns [`KernelError`] if an extra catalog from `i18n.catalog_dir` cannot be loaded.
    pub fn from_config(config: AppConfig) -> Result<Self, KernelError> {
        let translator = Translator::from_config(&config.i18n)?;
        debug!(locale = %translator.locale(), features = ?features::ENABLED, "Context ready");
        Ok(Self { config, translator: Arc::new(translator) })
    }
}
