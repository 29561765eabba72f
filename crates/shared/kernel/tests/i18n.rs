use brigade_kernel::KernelError;
use brigade_kernel::domain::config::I18nConfig;
use brigade_kernel::i18n::{Locale, Translator};
use std::fs;
use tempfile::tempdir;

#[test]
fn locale_parse_tolerates_region_and_case() {
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse("DE_at"), Some(Locale::De));
    assert_eq!(Locale::parse(" uk "), Some(Locale::Uk));
    assert_eq!(Locale::parse("pt-BR"), None);
    assert_eq!(Locale::parse(""), None);
}

#[test]
fn nested_keys_resolve_in_active_locale() {
    let t = Translator::new(Locale::De, Locale::En);
    assert_eq!(t.translate("ingredients.title"), "Zutaten");
    assert_eq!(t.translate("ingredients.categories.fish"), "Fisch");
}

#[test]
fn missing_keys_fall_back_then_echo() {
    let t = Translator::new(Locale::De, Locale::En);
    // Only the English catalog carries this key.
    assert_eq!(t.translate("recipes.steps.noImage"), "No image");
    assert_eq!(t.translate("nowhere.to.be.found"), "nowhere.to.be.found");
    assert!(t.has("recipes.steps.noImage"));
    assert!(!t.has("nowhere.to.be.found"));
}

#[test]
fn locale_without_catalog_uses_fallback() {
    let t = Translator::new(Locale::Fr, Locale::En);
    assert_eq!(t.translate("common.save"), "Save");
}

#[test]
fn placeholders_are_substituted() {
    let t = Translator::new(Locale::En, Locale::En);
    let text = t.translate_with("errors.fetchFailed", &[("resource", "ingredients"), ("status", "503")]);
    assert_eq!(text, "Could not load ingredients (status 503)");

    let partial = t.translate_with("recipes.steps.title", &[]);
    assert_eq!(partial, "Step {number}");
}

#[test]
fn substituted_values_are_not_expanded_again() {
    let t = Translator::new(Locale::En, Locale::En);
    let text = t.translate_with("errors.fetchFailed", &[("resource", "{status}"), ("status", "404")]);
    assert_eq!(text, "Could not load {status} (status 404)");

    let repeated = t.translate_with("errors.fetchFailed", &[("status", "{resource}"), ("resource", "menu")]);
    assert_eq!(repeated, "Could not load menu (status {resource})");
}

#[test]
fn unknown_and_unclosed_placeholders_stay_literal() -> Result<(), KernelError> {
    let mut t = Translator::new(Locale::En, Locale::En);
    t.load_catalog_str(Locale::En, r#"{ "odd": { "braces": "{a} {missing} {open" } }"#)?;

    assert_eq!(t.translate_with("odd.braces", &[("a", "1"), ("open", "x")]), "1 {missing} {open");
    Ok(())
}

#[test]
fn custom_catalog_overrides_builtin() -> Result<(), KernelError> {
    let mut t = Translator::new(Locale::Fr, Locale::En);
    t.load_catalog_str(Locale::Fr, r#"{ "common": { "save": "Enregistrer" } }"#)?;

    assert_eq!(t.translate("common.save"), "Enregistrer");
    assert_eq!(t.translate("common.cancel"), "Cancel");
    Ok(())
}

#[test]
fn invalid_catalogs_are_rejected() {
    let mut t = Translator::default();

    let err = t.load_catalog_str(Locale::Uk, "[1, 2]").expect_err("array root");
    assert!(matches!(err, KernelError::Catalog { .. }));

    let err = t.load_catalog_str(Locale::Uk, r#"{ "common": { "save": 1 } }"#).expect_err("number leaf");
    assert!(err.to_string().contains("common.save"));

    let err = t.load_catalog_str(Locale::Uk, "{ not json").expect_err("malformed");
    assert!(matches!(err, KernelError::Serde { .. }));

    // A rejected catalog leaves nothing behind.
    t.set_locale(Locale::Uk);
    assert_eq!(t.translate("common.save"), "Save");
}

#[test]
fn from_config_loads_catalog_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("uk.json"), r#"{ "common": { "save": "Зберегти" } }"#)?;

    let config = I18nConfig {
        locale: "uk-UA".to_owned(),
        fallback_locale: "klingon".to_owned(),
        catalog_dir: Some(dir.path().to_path_buf()),
    };

    let t = Translator::from_config(&config)?;
    assert_eq!(t.locale(), Locale::Uk);
    assert_eq!(t.fallback(), Locale::En);
    assert_eq!(t.translate("common.save"), "Зберегти");
    assert_eq!(t.translate("common.search"), "Search");
    Ok(())
}
