use agency_derive::agency_error;
use std::borrow::Cow;

#[agency_error]
#[derive(Debug)]
pub enum LookupError {
    #[error("Missing entry{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
