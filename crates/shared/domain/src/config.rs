use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared by the SEO helpers and binaries.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub site: SiteSettings,
    pub seo: SeoDefaults,
    pub log: LogSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Public identity of the site.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Absolute origin without a trailing slash requirement, e.g. `https://pixelforge.digital`.
    pub base_url: String,
    pub name: String,
    /// Open Graph locale, e.g. `en_US`.
    pub locale: String,
}

/// Fallbacks used when a page does not provide its own metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeoDefaults {
    pub default_title: String,
    pub title_separator: String,
    pub default_description: String,
    /// Site-relative or absolute share image.
    pub default_image: String,
    pub twitter_handle: Option<String>,
    pub keywords: Vec<String>,
}

/// Log output settings for the binaries.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Env-filter directive (e.g. `agency_content=debug`).
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pixelforge.digital".to_owned(),
            name: "Pixel Forge Digital".to_owned(),
            locale: "en_US".to_owned(),
        }
    }
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            default_title: "Pixel Forge Digital | Web Design & Digital Marketing in Denver".to_owned(),
            title_separator: " | ".to_owned(),
            default_description: "Custom websites, SEO and paid media that turn visitors into customers. Denver-based, serving businesses nationwide.".to_owned(),
            default_image: "/images/og-default.jpg".to_owned(),
            twitter_handle: Some("@pixelforgedigital".to_owned()),
            keywords: vec![
                "web design".to_owned(),
                "digital marketing".to_owned(),
                "SEO".to_owned(),
                "Denver".to_owned(),
            ],
        }
    }
}
