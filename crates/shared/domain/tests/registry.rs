use agency_domain::content::{FaqGroup, HeroConfig};
use agency_domain::registry::{Keyed, RegistryKind};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn registry_kind_parses_plural_singular_and_any_case() {
    assert_eq!(RegistryKind::from_str("heroes"), Ok(RegistryKind::Heroes));
    assert_eq!(RegistryKind::from_str("hero"), Ok(RegistryKind::Heroes));
    assert_eq!(RegistryKind::from_str("FAQ"), Ok(RegistryKind::Faqs));
    assert_eq!(RegistryKind::from_str("Processes"), Ok(RegistryKind::Processes));
    assert_eq!(RegistryKind::from_str("projects"), Ok(RegistryKind::Portfolio));
    assert!(RegistryKind::from_str("testimonials").is_err());
}

#[test]
fn registry_kinds_are_declared_in_page_order() {
    let names: Vec<&str> = RegistryKind::iter().map(RegistryKind::name).collect();
    assert_eq!(names, ["heroes", "stats", "features", "faqs", "processes", "portfolio"]);
}

#[test]
fn keyed_records_expose_their_id() {
    const HERO: HeroConfig = HeroConfig {
        id: "landing",
        badge: None,
        heading: "Heading",
        subheading: None,
        description: "Description",
        buttons: &[],
        theme: None,
        show_scroll_indicator: None,
    };
    const GROUP: FaqGroup = FaqGroup { id: "general", title: None, description: None, faqs: &[] };

    assert_eq!(HERO.key(), "landing");
    assert_eq!(GROUP.key(), "general");
}
