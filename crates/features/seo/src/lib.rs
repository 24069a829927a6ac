//! # Structured Data & Page Metadata
//!
//! Pure generators for the schema.org JSON-LD that search engines read, plus
//! the `<head>` metadata of each page.
//!
//! Generators return typed nodes; [`JsonLd`] renders any of them as compact
//! JSON, pretty JSON or a ready-to-inline `<script>` element.
//!
//! ## Example
//!
//! ```rust
//! use agency_seo::{JsonLd, PriceType, generate_service_schema};
//!
//! let schema = generate_service_schema("SEO", "Monthly SEO", Some("750"), PriceType::Monthly);
//! let json = schema.to_json_ld().expect("serializable");
//! assert!(json.contains(r#""unitText":"monthly""#));
//!
//! let unpriced = generate_service_schema("Audit", "Site audit", None, PriceType::default());
//! assert!(!unpriced.to_json_ld().expect("serializable").contains("offers"));
//! ```

mod error;
mod json_ld;
pub mod metadata;
pub mod schemas;

pub use crate::error::{SeoError, SeoErrorExt};
pub use crate::json_ld::JsonLd;
pub use crate::metadata::{Metadata, PageSeo, generate_metadata};
pub use crate::schemas::*;
