//! schema.org generators.
//!
//! Each generator is a pure function returning a typed node; render it with
//! [`crate::JsonLd`]. Inputs are never validated: odd input yields odd but
//! well-formed JSON.

mod business;
mod nodes;
mod page;
mod review;
mod service;

pub use business::{
    ContactPoint, LocalBusinessSchema, OrganizationSchema, WebSiteSchema,
    generate_local_business_schema, generate_organization_schema, generate_website_schema,
};
pub use nodes::{
    AggregateRating, BusinessRef, GeoCoordinates, ImageObject, Person, PostalAddress, Publisher,
};
pub use page::{
    Answer, ArticleSchema, BreadcrumbItem, BreadcrumbListSchema, FaqPageSchema, ListItem,
    Question, generate_article_schema, generate_breadcrumb_schema, generate_faq_schema,
};
pub use review::{Rating, ReviewInput, ReviewSchema, generate_review_schema};
pub use service::{
    Offer, PriceType, ServiceSchema, UnitPriceSpecification, generate_service_schema,
};
