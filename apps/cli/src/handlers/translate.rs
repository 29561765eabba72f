use crate::models::args::TranslateArgs;
use anyhow::{Context as _, Result};
use brigade::kernel::i18n::Translator;

/// Resolves `args.key` against the configured catalogs plus any `--catalog` file.
///
/// # Errors
/// Returns an error if the extra catalog cannot be read or parsed.
pub fn translate(args: &TranslateArgs, translator: &Translator) -> Result<String> {
    let mut translator = translator.clone();
    if let Some(locale) = args.locale {
        translator.set_locale(locale);
    }

    if let Some(path) = &args.catalog {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        translator.load_catalog_str(translator.locale(), &raw)?;
    }

    let placeholders: Vec<(&str, &str)> =
        args.args.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
    Ok(translator.translate_with(&args.key, &placeholders))
}
