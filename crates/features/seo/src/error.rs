use std::borrow::Cow;

/// Structured-data rendering error type.
#[agency_derive::agency_error]
pub enum SeoError {
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
