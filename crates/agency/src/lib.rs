//! Facade crate for the agency site's content and SEO layers.
//! Re-exports domain/kernel primitives and the feature crates enabled at build time.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `agency` with the desired feature flags (`content`/`seo`, both on by default).
//! - Call `agency::verify` at startup to refuse broken content tables.

pub use agency_domain as domain;
pub use agency_kernel as kernel;

#[cfg(feature = "content")]
pub use agency_content as content;
#[cfg(feature = "seo")]
pub use agency_seo as seo;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "content")]
        "content",
        #[cfg(feature = "seo")]
        "seo",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Validates every content table.
///
/// # Errors
/// Returns [`content::ContentError::Invalid`] if any table breaks an invariant.
#[cfg(feature = "content")]
pub fn verify() -> Result<content::ValidationReport, content::ContentError> {
    content::ensure_valid()
}

/// `FAQPage` schema for a named FAQ group, or `None` when the group does not exist.
#[cfg(all(feature = "content", feature = "seo"))]
pub fn faq_page_schema(group_id: &str) -> Option<seo::FaqPageSchema<'static>> {
    content::get_faq_group(group_id).map(|group| seo::generate_faq_schema(group.faqs))
}
