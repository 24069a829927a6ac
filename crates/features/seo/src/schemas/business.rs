//! Nodes describing the agency itself: `LocalBusiness`, `Organization`, `WebSite`.

use super::nodes::{AggregateRating, GeoCoordinates, PostalAddress, Publisher};
use agency_domain::business::CONTACT_INFO;
use agency_domain::config::SiteConfig;
use agency_domain::constants::SCHEMA_CONTEXT;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "LocalBusiness", rename_all = "camelCase")]
pub struct LocalBusinessSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub telephone: &'static str,
    pub email: &'static str,
    pub image: &'static str,
    pub logo: &'static str,
    pub price_range: &'static str,
    pub address: PostalAddress<'static>,
    pub geo: GeoCoordinates,
    pub opening_hours: &'static [&'static str],
    pub area_served: &'static [&'static str],
    pub aggregate_rating: AggregateRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ContactPoint", rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: &'static str,
    pub email: &'static str,
    pub contact_type: &'static str,
    pub area_served: &'static str,
    pub available_language: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Organization", rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub name: &'static str,
    pub legal_name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub founding_date: &'static str,
    pub same_as: [&'static str; 3],
    pub contact_point: ContactPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "WebSite", rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub in_language: String,
    pub publisher: Publisher<'static>,
}

/// `LocalBusiness` node for the agency, built from [`CONTACT_INFO`].
pub fn generate_local_business_schema() -> LocalBusinessSchema {
    let info = &CONTACT_INFO;
    debug!(name = info.name, "Generating LocalBusiness schema");

    LocalBusinessSchema {
        context: SCHEMA_CONTEXT,
        id: format!("{}/#business", info.url.trim_end_matches('/')),
        name: info.name,
        description: info.description,
        url: info.url,
        telephone: info.telephone,
        email: info.email,
        image: info.image,
        logo: info.logo,
        price_range: info.price_range,
        address: (&info.address).into(),
        geo: (&info.geo).into(),
        opening_hours: info.opening_hours,
        area_served: info.area_served,
        aggregate_rating: (&info.rating).into(),
    }
}

/// `Organization` node with social profiles in `sameAs`
/// (facebook, instagram, linkedin).
pub fn generate_organization_schema() -> OrganizationSchema {
    let info = &CONTACT_INFO;
    debug!(name = info.name, "Generating Organization schema");

    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        name: info.name,
        legal_name: info.legal_name,
        url: info.url,
        logo: info.logo,
        description: info.description,
        founding_date: info.founding_date,
        same_as: info.social.urls(),
        contact_point: ContactPoint {
            telephone: info.telephone,
            email: info.email,
            contact_type: "customer service",
            area_served: info.address.country,
            available_language: &["English"],
        },
    }
}

/// `WebSite` node for the configured site. The locale is rewritten to a BCP 47
/// tag (`en_US` becomes `en-US`).
pub fn generate_website_schema(site: &SiteConfig) -> WebSiteSchema {
    debug!(url = %site.site.base_url, "Generating WebSite schema");

    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        name: site.site.name.clone(),
        url: site.site.base_url.clone(),
        description: site.seo.default_description.clone(),
        in_language: site.site.locale.replace('_', "-"),
        publisher: (&CONTACT_INFO).into(),
    }
}
