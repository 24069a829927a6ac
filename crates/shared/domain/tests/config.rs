use agency_domain::config::{LogSettings, SeoDefaults, SiteConfig, SiteSettings};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let site = SiteSettings::default();
    assert_eq!(site.base_url, "https://pixelforge.digital");
    assert_eq!(site.locale, "en_US");

    let seo = SeoDefaults::default();
    assert_eq!(seo.title_separator, " | ");
    assert!(seo.default_image.starts_with('/'));
    assert!(seo.twitter_handle.is_some());

    let log = LogSettings::default();
    assert!(log.filter.is_none());
    assert!(log.dir.is_none());
    assert!(!log.json);
}

#[test]
fn site_config_deserializes_partial_documents() {
    let raw = json!({
        "site": { "base_url": "https://staging.pixelforge.digital", "name": "Pixel Forge (staging)" },
        "seo": { "twitter_handle": null },
        "log": { "filter": "agency_seo=debug", "dir": "/tmp/agency-logs" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.site.base_url, "https://staging.pixelforge.digital");
    assert_eq!(cfg.site.locale, "en_US", "missing fields fall back to defaults");
    assert!(cfg.seo.twitter_handle.is_none());
    assert_eq!(cfg.seo.title_separator, " | ");
    assert_eq!(cfg.log.filter.as_deref(), Some("agency_seo=debug"));
    assert_eq!(cfg.log.dir, Some(std::path::PathBuf::from("/tmp/agency-logs")));
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.site.name = "Renamed".to_owned();

    assert_eq!(original.site.name, "Pixel Forge Digital");
    assert_eq!(edited.site.name, "Renamed");
}
