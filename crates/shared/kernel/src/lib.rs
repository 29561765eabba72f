//! Kernel utilities shared across features.
//! Keep this crate lightweight: layered config loading and namespaced translation lookup.
//!
//! ## Config loading
//! ```rust,no_run
//! use brigade_kernel::config::load_config;
//! use brigade_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
//!
//! ## Translation
//! ```rust
//! use brigade_kernel::i18n::{Locale, Translator};
//!
//! let t = Translator::new(Locale::De, Locale::En);
//! assert_eq!(t.translate("common.save"), "Speichern");
//! ```

pub mod config;
mod error;
pub mod i18n;

pub use crate::error::{KernelError, KernelErrorExt};
pub use brigade_domain as domain;
