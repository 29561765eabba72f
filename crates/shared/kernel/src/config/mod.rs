use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "BRIGADE";

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "brigade";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: An explicit `path` must exist. Without one, a `brigade.{toml,json,yaml}`
///    file in the working directory is used when present and skipped otherwise.
/// 2. **Environment Overrides**: Variables prefixed with `BRIGADE__`; nested keys are separated
///    by double underscores (e.g., `BRIGADE__I18N__LOCALE` maps to `i18n.locale`).
///
/// # Errors
/// Returns [`KernelError::Config`] if an explicit file is missing, a source is malformed, or the
/// merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use brigade_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    build(path, Environment::with_prefix(ENV_PREFIX))
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// Keys use the same `BRIGADE__SECTION__KEY` form.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, KernelError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    let vars = vars.into_iter().collect::<config::Map<String, String>>();
    build(path, Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
}

fn build<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(p) => {
            let p: PathBuf = p.as_ref().to_path_buf();
            info!("Loading config from {}", p.display());
            File::from(p.as_path()).required(true)
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG_NAME} config file");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(environment.separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
