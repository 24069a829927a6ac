//! The agency's public business card.
//!
//! [`CONTACT_INFO`] is the single source for every structured-data node that
//! describes the business (`LocalBusiness`, `Organization`, review targets).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub image: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
    pub founding_date: &'static str,
    pub address: Address,
    pub geo: GeoPoint,
    /// schema.org `openingHours` strings, e.g. `"Mo-Fr 09:00-18:00"`.
    pub opening_hours: &'static [&'static str],
    pub price_range: &'static str,
    pub area_served: &'static [&'static str],
    pub rating: RatingSummary,
    pub social: SocialProfiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Aggregate review score shown in search results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub value: f64,
    pub review_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialProfiles {
    pub facebook: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

impl SocialProfiles {
    /// Profile URLs in publishing order: facebook, instagram, linkedin.
    #[must_use]
    pub const fn urls(&self) -> [&'static str; 3] {
        [self.facebook, self.instagram, self.linkedin]
    }
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    name: "Pixel Forge Digital",
    legal_name: "Pixel Forge Digital LLC",
    description: "Denver web design and digital marketing agency building fast, conversion-focused websites, SEO campaigns and paid media for small and mid-sized businesses.",
    url: "https://pixelforge.digital",
    logo: "https://pixelforge.digital/images/logo.png",
    image: "https://pixelforge.digital/images/og-default.jpg",
    email: "hello@pixelforge.digital",
    telephone: "+1-303-555-0147",
    founding_date: "2016",
    address: Address {
        street: "1550 Wynkoop Street, Suite 300",
        locality: "Denver",
        region: "CO",
        postal_code: "80202",
        country: "US",
    },
    geo: GeoPoint { latitude: 39.7527, longitude: -105.0002 },
    opening_hours: &["Mo-Fr 09:00-18:00"],
    price_range: "$$",
    area_served: &["Denver", "Boulder", "Colorado Springs", "United States"],
    rating: RatingSummary { value: 4.9, review_count: 127 },
    social: SocialProfiles {
        facebook: "https://www.facebook.com/pixelforgedigital",
        instagram: "https://www.instagram.com/pixelforgedigital",
        linkedin: "https://www.linkedin.com/company/pixel-forge-digital",
    },
};
