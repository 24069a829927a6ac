use agency::{faq_page_schema, features, verify};

#[test]
fn default_features_are_enabled() {
    assert!(features::is_enabled("content"));
    assert!(features::is_enabled("seo"));
    assert!(!features::is_enabled("server"));
}

#[test]
fn shipped_content_verifies() {
    let report = verify().expect("content is valid");
    assert!(report.is_valid());
}

#[test]
fn faq_page_schema_covers_the_whole_group() {
    let group = agency::content::get_faq_group("seo").expect("seo group");
    let schema = faq_page_schema("seo").expect("known group");

    assert_eq!(schema.main_entity.len(), group.faqs.len());
    let json = serde_json::to_value(&schema).expect("serializes");
    assert_eq!(json["@type"], "FAQPage");
}

#[test]
fn unknown_faq_group_yields_none() {
    assert!(faq_page_schema("does-not-exist").is_none());
}
