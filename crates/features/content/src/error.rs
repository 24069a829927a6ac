use std::borrow::Cow;

/// Content registry error type.
#[agency_derive::agency_error]
pub enum ContentError {
    /// One or more records break a required-field invariant.
    #[error("Invalid content{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A registry name that does not match any known registry.
    #[error("Unknown registry{}: {message}", format_context(.context))]
    UnknownKind { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
