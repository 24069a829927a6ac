use agency_derive::agency_error;
use std::borrow::Cow;

#[agency_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn agency_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/agency_error_pass.rs");
    t.pass("tests/ui/agency_error_message_only.rs");
    t.compile_fail("tests/ui/agency_error_tuple_variant.rs");
    t.compile_fail("tests/ui/agency_error_no_context.rs");
    t.compile_fail("tests/ui/agency_error_bad_context_type.rs");
}

#[test]
fn question_mark_converts_source_without_context() {
    let err = parse("abc").expect_err("not a number");
    assert!(matches!(err, DemoError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_on_source_result_wraps_into_variant() {
    let err = "x1".parse::<u32>().context("reading step number").expect_err("not a number");
    assert!(matches!(err, DemoError::Parse { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Parse error (reading step number): "));
}

#[test]
fn context_on_own_result_fills_context_slot() {
    let res: Result<(), DemoError> =
        Err(DemoError::Invalid { message: "empty heading".into(), context: None });
    let err = res.context("hero 'home'").expect_err("still an error");
    assert_eq!(err.to_string(), "Invalid input (hero 'home'): empty heading");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: DemoError = "unexpected".into();
    let from_owned: DemoError = format!("unexpected {}", 42).into();

    assert_eq!(from_static.to_string(), "Internal error: unexpected");
    assert_eq!(from_owned.to_string(), "Internal error: unexpected 42");
}
