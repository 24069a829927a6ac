use agency_content::{ensure_valid, validate};

#[test]
fn compiled_tables_have_no_violations() {
    let report = validate();
    assert!(report.is_valid(), "violations: {:#?}", report.violations());
    assert!(report.checked() > 0);
}

#[test]
fn ensure_valid_passes_on_shipped_content() {
    let report = ensure_valid().expect("shipped content is valid");
    assert_eq!(report.checked(), validate().checked());
}
