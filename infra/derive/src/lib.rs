#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the agency workspace.
//!
//! Currently a single attribute, [`macro@agency_error`], which turns a plain enum into
//! a `thiserror` error with context support. Every library crate in the
//! workspace declares its error type through it so that errors read the same
//! everywhere.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant that wraps a source.
/// * **Standard Conversions**: `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]` / `#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use agency_derive::agency_error;
/// use std::borrow::Cow;
///
/// #[agency_error]
/// pub enum SeoError {
///     #[error("Serialization error{}: {source}", format_context(.context))]
///     Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn render(value: &serde_json::Value) -> Result<String, SeoError> {
///     serde_json::to_string(value).context("Rendering JSON-LD")
/// }
/// ```
#[proc_macro_attribute]
pub fn agency_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
