use super::print_json;
use agency::domain::config::SiteConfig;
use agency::seo::metadata::OgType;
use agency::seo::{PageSeo, generate_metadata};
use anyhow::Result;

/// Prints the metadata of one page as JSON.
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn print_metadata(
    site: &SiteConfig,
    path: String,
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
    no_index: bool,
) -> Result<()> {
    let page = PageSeo {
        path,
        title,
        description,
        keywords: Vec::new(),
        image,
        no_index,
        og_type: OgType::Website,
    };
    print_json(&generate_metadata(site, &page))
}
