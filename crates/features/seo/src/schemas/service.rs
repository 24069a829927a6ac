use super::nodes::BusinessRef;
use agency_domain::business::CONTACT_INFO;
use agency_domain::constants::{PRICE_CURRENCY, SCHEMA_CONTEXT};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

/// Billing period published in `unitText`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PriceType {
    #[default]
    OneTime,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Service", rename_all = "camelCase")]
pub struct ServiceSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub name: &'a str,
    pub description: &'a str,
    pub provider: BusinessRef<'static>,
    pub area_served: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Offer", rename_all = "camelCase")]
pub struct Offer<'a> {
    pub price: &'a str,
    pub price_currency: &'static str,
    pub price_specification: UnitPriceSpecification<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "UnitPriceSpecification", rename_all = "camelCase")]
pub struct UnitPriceSpecification<'a> {
    pub price: &'a str,
    pub price_currency: &'static str,
    pub unit_text: PriceType,
}

/// `Service` node offered by the agency.
///
/// `offers` is only attached when `price` is given; without a price the key is
/// absent from the JSON rather than `null`. The price is published verbatim.
pub fn generate_service_schema<'a>(
    name: &'a str,
    description: &'a str,
    price: Option<&'a str>,
    price_type: PriceType,
) -> ServiceSchema<'a> {
    debug!(service = name, priced = price.is_some(), %price_type, "Generating Service schema");

    ServiceSchema {
        context: SCHEMA_CONTEXT,
        name,
        description,
        provider: (&CONTACT_INFO).into(),
        area_served: CONTACT_INFO.area_served,
        offers: price.map(|price| Offer {
            price,
            price_currency: PRICE_CURRENCY,
            price_specification: UnitPriceSpecification {
                price,
                price_currency: PRICE_CURRENCY,
                unit_text: price_type,
            },
        }),
    }
}
