use super::nodes::{BusinessRef, Person};
use agency_domain::business::CONTACT_INFO;
use agency_domain::constants::SCHEMA_CONTEXT;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A customer testimonial as shown on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub author: String,
    /// Stars; not range-checked.
    pub rating: f64,
    pub text: String,
    /// Publication date as written, usually `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Review", rename_all = "camelCase")]
pub struct ReviewSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub author: Person<'a>,
    pub review_rating: Rating,
    pub review_body: &'a str,
    pub date_published: &'a str,
    pub item_reviewed: BusinessRef<'static>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Rating", rename_all = "camelCase")]
pub struct Rating {
    pub rating_value: f64,
    pub best_rating: u8,
    pub worst_rating: u8,
}

/// One `Review` node per input, in input order.
///
/// Unlike the other generators this returns a list of top-level nodes, each
/// with its own `@context`.
pub fn generate_review_schema(reviews: &[ReviewInput]) -> Vec<ReviewSchema<'_>> {
    debug!(reviews = reviews.len(), "Generating Review schemas");

    reviews
        .iter()
        .map(|review| ReviewSchema {
            context: SCHEMA_CONTEXT,
            author: Person { name: &review.author },
            review_rating: Rating { rating_value: review.rating, best_rating: 5, worst_rating: 1 },
            review_body: &review.text,
            date_published: &review.date,
            item_reviewed: (&CONTACT_INFO).into(),
        })
        .collect()
}
