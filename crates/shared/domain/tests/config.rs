use brigade_domain::config::{ApiConfig, AppConfig, I18nConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.base_url, "http://localhost:8080/api");
    assert_eq!(api.timeout_seconds, 30);

    let i18n = I18nConfig::default();
    assert_eq!(i18n.locale, "en");
    assert_eq!(i18n.fallback_locale, "en");
    assert!(i18n.catalog_dir.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.dir.is_none());
    assert_eq!(logging.max_files, 10);
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "api": { "base_url": "https://kitchen.example/api" },
        "i18n": { "locale": "de", "catalog_dir": "/srv/i18n" },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "https://kitchen.example/api");
    assert_eq!(cfg.api.timeout_seconds, 30);
    assert_eq!(cfg.i18n.locale, "de");
    assert_eq!(cfg.i18n.fallback_locale, "en");
    assert_eq!(cfg.i18n.catalog_dir, Some(std::path::PathBuf::from("/srv/i18n")));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn app_config_clones_share_until_mutated() {
    let original = AppConfig::default();
    let mut changed = original.clone();
    changed.i18n.locale = "fr".to_owned();

    assert_eq!(original.i18n.locale, "en");
    assert_eq!(changed.i18n.locale, "fr");
}
