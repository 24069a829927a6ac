//! Page-scoped nodes: FAQ pages, breadcrumbs and articles.

use super::nodes::{Person, Publisher};
use agency_domain::business::CONTACT_INFO;
use agency_domain::constants::SCHEMA_CONTEXT;
use agency_domain::content::Faq;
use serde::{Deserialize, Serialize};
use tracing::debug;

// --- FAQ ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "FAQPage", rename_all = "camelCase")]
pub struct FaqPageSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub main_entity: Vec<Question<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Question", rename_all = "camelCase")]
pub struct Question<'a> {
    pub name: &'a str,
    pub accepted_answer: Answer<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Answer")]
pub struct Answer<'a> {
    pub text: &'a str,
}

/// `FAQPage` with one `Question` per FAQ, in input order. Duplicates are kept.
pub fn generate_faq_schema(faqs: &[Faq]) -> FaqPageSchema<'static> {
    debug!(questions = faqs.len(), "Generating FAQPage schema");

    FaqPageSchema {
        context: SCHEMA_CONTEXT,
        main_entity: faqs
            .iter()
            .map(|faq| Question { name: faq.question, accepted_answer: Answer { text: faq.answer } })
            .collect(),
    }
}

// --- Breadcrumbs ---

/// One link of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "BreadcrumbList", rename_all = "camelCase")]
pub struct BreadcrumbListSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub item_list_element: Vec<ListItem<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ListItem")]
pub struct ListItem<'a> {
    pub position: usize,
    pub name: &'a str,
    pub item: &'a str,
}

/// `BreadcrumbList` whose positions are 1-based input indexes.
pub fn generate_breadcrumb_schema(items: &[BreadcrumbItem]) -> BreadcrumbListSchema<'_> {
    debug!(items = items.len(), "Generating BreadcrumbList schema");

    BreadcrumbListSchema {
        context: SCHEMA_CONTEXT,
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem { position: index + 1, name: &crumb.name, item: &crumb.url })
            .collect(),
    }
}

// --- Article ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Article", rename_all = "camelCase")]
pub struct ArticleSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub headline: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub author: Person<'a>,
    pub publisher: Publisher<'static>,
    pub date_published: &'a str,
    pub date_modified: &'a str,
}

/// `Article` node. Every argument is copied verbatim; dates are not parsed.
pub fn generate_article_schema<'a>(
    title: &'a str,
    description: &'a str,
    author: &'a str,
    date_published: &'a str,
    date_modified: &'a str,
    image_url: &'a str,
) -> ArticleSchema<'a> {
    debug!(headline = title, "Generating Article schema");

    ArticleSchema {
        context: SCHEMA_CONTEXT,
        headline: title,
        description,
        image: image_url,
        author: Person { name: author },
        publisher: (&CONTACT_INFO).into(),
        date_published,
        date_modified,
    }
}
