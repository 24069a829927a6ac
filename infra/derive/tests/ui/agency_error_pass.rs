use agency_derive::agency_error;
use std::borrow::Cow;

#[agency_error]
pub enum RenderError {
    #[error("Format error{}: {source}", format_context(.context))]
    Format {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: RenderError = "boom".into();
    let _ = err.to_string();
}
