use agency_domain::constants::{
    FAQS, FEATURES, HEROES, PORTFOLIO, PRICE_CURRENCY, PROCESSES, SCHEMA_CONTEXT, STATS,
};
use agency_domain::registry::RegistryKind;
use strum::IntoEnumIterator;

#[test]
fn constants_match_registry_names() {
    assert_eq!(HEROES, "heroes");
    assert_eq!(STATS, "stats");
    assert_eq!(FEATURES, "features");
    assert_eq!(FAQS, "faqs");
    assert_eq!(PROCESSES, "processes");
    assert_eq!(PORTFOLIO, "portfolio");
    assert_eq!(SCHEMA_CONTEXT, "https://schema.org");
    assert_eq!(PRICE_CURRENCY, "USD");
}

#[test]
fn registry_kind_display_matches_canonical_name() {
    for kind in RegistryKind::iter() {
        assert_eq!(kind.to_string(), kind.name());
        assert_eq!(kind.as_ref(), kind.name());
    }
}
