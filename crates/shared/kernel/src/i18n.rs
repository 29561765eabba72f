//! Namespaced translation lookup.
//!
//! Catalogs are nested JSON objects whose string leaves are addressed by dot-separated keys,
//! e.g. `ingredients.form.name`. Lookup tries the active locale, then the fallback locale,
//! then returns the key itself so a missing entry is visible rather than blank.

use crate::error::{KernelError, KernelErrorExt};
use brigade_domain::config::I18nConfig;
use fxhash::FxHashMap;
use serde_json::Value;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::{debug, warn};

const BUILTIN_EN: &str = include_str!("../locales/en.json");
const BUILTIN_DE: &str = include_str!("../locales/de.json");

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    En,
    De,
    Fr,
    Uk,
}

impl Locale {
    /// Parses a language tag, ignoring case and any region suffix (`en-US`, `de_AT`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let lang = tag.trim().split(['-', '_']).next()?;
        Self::iter().find(|l| l.as_ref().eq_ignore_ascii_case(lang))
    }
}

/// Flattened catalogs for every loaded locale.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    fallback: Locale,
    catalogs: FxHashMap<Locale, FxHashMap<String, String>>,
}

impl Translator {
    /// Creates a translator preloaded with the built-in catalogs.
    #[must_use]
    pub fn new(locale: Locale, fallback: Locale) -> Self {
        let mut translator = Self { locale, fallback, catalogs: FxHashMap::default() };

        for (builtin, raw) in [(Locale::En, BUILTIN_EN), (Locale::De, BUILTIN_DE)] {
            if let Err(e) = translator.load_catalog_str(builtin, raw) {
                warn!(locale = %builtin, error = %e, "Skipping broken built-in catalog");
            }
        }

        translator
    }

    /// Builds a translator from the `[i18n]` config section.
    ///
    /// Unknown locale tags fall back to English with a warning.
    ///
    /// # Errors
    /// Returns an error if `catalog_dir` is set and one of its catalogs cannot be read or parsed.
    pub fn from_config(config: &I18nConfig) -> Result<Self, KernelError> {
        let resolve = |tag: &str| {
            Locale::parse(tag).unwrap_or_else(|| {
                warn!(tag, "Unsupported locale, using English");
                Locale::En
            })
        };

        let mut translator = Self::new(resolve(&config.locale), resolve(&config.fallback_locale));
        if let Some(dir) = &config.catalog_dir {
            translator.load_catalog_dir(dir)?;
        }

        Ok(translator)
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn fallback(&self) -> Locale {
        self.fallback
    }

    pub const fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Merges a JSON catalog into `locale`, overriding existing keys.
    ///
    /// # Errors
    /// Returns [`KernelError::Serde`] for malformed JSON and [`KernelError::Catalog`] when the
    /// root is not an object or a leaf is not a string.
    pub fn load_catalog_str(&mut self, locale: Locale, raw: &str) -> Result<(), KernelError> {
        let value: Value = serde_json::from_str(raw).context(format!("catalog '{locale}'"))?;
        let Value::Object(root) = value else {
            return Err(KernelError::Catalog {
                message: "catalog root must be a JSON object".into(),
                context: Some(format!("catalog '{locale}'").into()),
            });
        };

        let mut flat = FxHashMap::default();
        for (key, child) in root {
            flatten_into(&mut flat, key, child)?;
        }

        let entries = self.catalogs.entry(locale).or_default();
        entries.extend(flat);
        debug!(%locale, keys = entries.len(), "Catalog loaded");
        Ok(())
    }

    /// Loads `<dir>/<locale>.json` for every supported locale that has such a file.
    ///
    /// # Errors
    /// Returns an error if an existing catalog file cannot be read or parsed.
    pub fn load_catalog_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), KernelError> {
        let dir = dir.as_ref();
        for locale in Locale::iter() {
            let path = dir.join(format!("{locale}.json"));
            if !path.is_file() {
                continue;
            }
            let raw = std::fs::read_to_string(&path)
                .context(format!("Failed to read {}", path.display()))?;
            self.load_catalog_str(locale, &raw)?;
        }
        Ok(())
    }

    /// Looks up `key` in the active locale, then the fallback; returns the key when both miss.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        [self.locale, self.fallback]
            .into_iter()
            .find_map(|l| self.lookup(l).and_then(|catalog| catalog.get(key)))
            .map_or(key, String::as_str)
    }

    /// Like [`Translator::translate`], substituting `{name}` placeholders from `args`.
    ///
    /// The template is scanned once, so braces inside substituted values are never expanded.
    /// Placeholders without a matching argument are left untouched.
    #[must_use]
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.translate(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let found = after.find('}').and_then(|close| {
                let name = &after[..close];
                args.iter().find(|(arg, _)| *arg == name).map(|(_, value)| (close, *value))
            });

            match found {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                },
                None => {
                    out.push('{');
                    rest = after;
                },
            }
        }

        out.push_str(rest);
        out
    }

    /// Whether `key` resolves in the active or fallback locale.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        [self.locale, self.fallback]
            .into_iter()
            .any(|l| self.lookup(l).is_some_and(|c| c.contains_key(key)))
    }

    fn lookup(&self, locale: Locale) -> Option<&FxHashMap<String, String>> {
        self.catalogs.get(&locale)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::En, Locale::En)
    }
}

fn flatten_into(
    entries: &mut FxHashMap<String, String>,
    key: String,
    value: Value,
) -> Result<(), KernelError> {
    match value {
        Value::String(text) => {
            entries.insert(key, text);
            Ok(())
        },
        Value::Object(children) => {
            for (child_key, child) in children {
                flatten_into(entries, format!("{key}.{child_key}"), child)?;
            }
            Ok(())
        },
        other => Err(KernelError::Catalog {
            message: format!("'{key}' must be a string or an object, found {other}").into(),
            context: None,
        }),
    }
}
