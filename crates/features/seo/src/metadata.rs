//! `<head>` metadata for a page: title, description, canonical URL, Open Graph,
//! Twitter card and robots directives.

use agency_domain::config::SiteConfig;
use serde::Serialize;
use strum::{AsRefStr, Display};
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

/// What a page knows about itself.
///
/// ```rust
/// use agency_seo::metadata::PageSeo;
///
/// let page = PageSeo::builder().path("/services/seo").title("Local SEO").build();
/// assert_eq!(page.title.as_deref(), Some("Local SEO"));
/// assert!(!page.no_index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct PageSeo {
    #[builder(setter(into))]
    pub path: String,
    #[builder(default, setter(into, strip_option))]
    pub title: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default)]
    pub keywords: Vec<String>,
    /// Site-relative or absolute share image.
    #[builder(default, setter(into, strip_option))]
    pub image: Option<String>,
    #[builder(default)]
    pub no_index: bool,
    #[builder(default)]
    pub og_type: OgType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

/// Builds the metadata for `page`, filling gaps from the site defaults.
pub fn generate_metadata(site: &SiteConfig, page: &PageSeo) -> Metadata {
    let seo = &site.seo;

    let title = page.title.as_ref().map_or_else(
        || seo.default_title.clone(),
        |title| format!("{title}{}{}", seo.title_separator, site.site.name),
    );
    let description = page.description.clone().unwrap_or_else(|| seo.default_description.clone());
    let canonical = absolute_url(&site.site.base_url, &page.path);
    let image = absolute_url(&site.site.base_url, page.image.as_deref().unwrap_or(&seo.default_image));
    let keywords = if page.keywords.is_empty() { seo.keywords.clone() } else { page.keywords.clone() };

    debug!(path = %page.path, %canonical, "Generating page metadata");

    Metadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: site.site.name.clone(),
            locale: site.site.locale.clone(),
            og_type: page.og_type,
            images: vec![OgImage { url: image.clone(), alt: title.clone() }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: title.clone(),
            description: description.clone(),
            images: vec![image],
            creator: seo.twitter_handle.clone(),
        },
        robots: Robots { index: !page.no_index, follow: !page.no_index },
        title,
        description,
        keywords,
        canonical,
    }
}

/// Joins `path` onto `base`. Absolute URLs pass through; `/` maps to the bare base.
fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }

    let base = base.trim_end_matches('/');
    match path.trim_start_matches('/') {
        "" => base.to_owned(),
        rest => format!("{base}/{rest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::absolute_url;

    #[test]
    fn joins_with_exactly_one_slash() {
        assert_eq!(absolute_url("https://x.dev/", "/a"), "https://x.dev/a");
        assert_eq!(absolute_url("https://x.dev", "a/b"), "https://x.dev/a/b");
    }

    #[test]
    fn root_path_is_the_bare_base() {
        assert_eq!(absolute_url("https://x.dev/", "/"), "https://x.dev");
        assert_eq!(absolute_url("https://x.dev", ""), "https://x.dev");
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(absolute_url("https://x.dev", "https://cdn.y/img.jpg"), "https://cdn.y/img.jpg");
    }
}
