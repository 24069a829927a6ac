//! Building blocks shared by several top-level schemas.

use agency_domain::business::{Address, ContactInfo, GeoPoint, RatingSummary};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Person")]
pub struct Person<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ImageObject")]
pub struct ImageObject<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "PostalAddress", rename_all = "camelCase")]
pub struct PostalAddress<'a> {
    pub street_address: &'a str,
    pub address_locality: &'a str,
    pub address_region: &'a str,
    pub postal_code: &'a str,
    pub address_country: &'a str,
}

impl From<&Address> for PostalAddress<'static> {
    fn from(address: &Address) -> Self {
        Self {
            street_address: address.street,
            address_locality: address.locality,
            address_region: address.region,
            postal_code: address.postal_code,
            address_country: address.country,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "GeoCoordinates")]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&GeoPoint> for GeoCoordinates {
    fn from(geo: &GeoPoint) -> Self {
        Self { latitude: geo.latitude, longitude: geo.longitude }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "AggregateRating", rename_all = "camelCase")]
pub struct AggregateRating {
    pub rating_value: f64,
    pub review_count: u32,
    pub best_rating: u8,
}

impl From<&RatingSummary> for AggregateRating {
    fn from(rating: &RatingSummary) -> Self {
        Self { rating_value: rating.value, review_count: rating.review_count, best_rating: 5 }
    }
}

/// A `LocalBusiness` reduced to what identifies it: provider of a service or
/// subject of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "LocalBusiness")]
pub struct BusinessRef<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

impl From<&ContactInfo> for BusinessRef<'static> {
    fn from(contact: &ContactInfo) -> Self {
        Self { name: contact.name, url: contact.url }
    }
}

/// The publishing organization of an article or website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct Publisher<'a> {
    pub name: &'a str,
    pub logo: ImageObject<'a>,
}

impl From<&ContactInfo> for Publisher<'static> {
    fn from(contact: &ContactInfo) -> Self {
        Self { name: contact.name, logo: ImageObject { url: contact.logo } }
    }
}
