use agency_content::*;
use agency_domain::content::{HeroTheme, StepLabel};
use agency_domain::registry::RegistryKind;
use strum::IntoEnumIterator;

const MISSING: &str = "does-not-exist";

#[test]
fn every_listed_hero_resolves_to_its_own_id() {
    for id in get_hero_ids() {
        let hero = get_hero(id).expect("listed id resolves");
        assert_eq!(hero.id, id);
    }
}

#[test]
fn every_registry_lists_resolvable_ids() {
    for kind in RegistryKind::iter() {
        let ids = ids_for(kind);
        assert!(!ids.is_empty(), "{kind} is empty");
        for id in ids {
            assert!(lookup(kind, id).is_some(), "{kind}/{id} does not resolve");
        }
    }
}

#[test]
fn unknown_ids_return_none() {
    assert!(get_hero(MISSING).is_none());
    assert!(get_stats_group(MISSING).is_none());
    assert!(get_feature_group(MISSING).is_none());
    assert!(get_faq_group(MISSING).is_none());
    assert!(get_process_flow(MISSING).is_none());
    assert!(get_project(MISSING).is_none());

    for kind in RegistryKind::iter() {
        assert!(lookup(kind, MISSING).is_none());
    }
}

#[test]
fn lookups_are_case_sensitive() {
    assert!(get_hero("home").is_some());
    assert!(get_hero("Home").is_none());
}

#[test]
fn ids_keep_declaration_order() {
    assert_eq!(
        get_hero_ids(),
        [
            "home",
            "services",
            "web-design",
            "seo",
            "digital-marketing",
            "pricing",
            "portfolio",
            "about",
            "contact"
        ]
    );
    assert_eq!(get_faq_group_ids(), ["general", "web-design", "seo", "pricing", "maintenance"]);
    assert_eq!(get_process_flow_ids(), ["web-design", "seo", "onboarding"]);
    assert_eq!(get_stats_group_ids(), ["home", "about", "seo-results", "web-design"]);
    assert_eq!(get_feature_group_ids(), ["services", "why-choose-us", "web-design", "seo"]);
}

#[test]
fn ids_are_unique_per_registry() {
    for kind in RegistryKind::iter() {
        let mut ids = ids_for(kind);
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "{kind} has duplicate ids");
    }
}

#[test]
fn home_hero_has_the_primary_call_to_action() {
    let hero = get_hero("home").expect("home hero");
    assert_eq!(hero.heading, "Websites That Turn Visitors Into Customers");
    assert_eq!(hero.buttons[0].action_id, Some("open-quote-form"));
    assert_eq!(hero.theme, Some(HeroTheme::Gradient));
}

#[test]
fn process_steps_allow_numeric_and_text_labels() {
    let web = get_process_flow("web-design").expect("web-design flow");
    assert_eq!(web.steps.first().map(|s| s.step), Some(StepLabel::Number(1)));
    assert_eq!(web.steps.len(), 5);

    let seo = get_process_flow("seo").expect("seo flow");
    assert_eq!(seo.steps.first().map(|s| s.step), Some(StepLabel::Text("01")));
}

#[test]
fn projects_filter_by_industry_ignoring_case() {
    let healthcare: Vec<_> =
        get_projects_by_industry("healthcare").into_iter().map(|p| p.id).collect();
    assert_eq!(healthcare, ["summit-dental", "front-range-family-clinic"]);
    assert!(get_projects_by_industry("Aerospace").is_empty());
}

#[test]
fn registry_names_parse_with_aliases() {
    assert_eq!(parse_kind("heroes").ok(), Some(RegistryKind::Heroes));
    assert_eq!(parse_kind("Hero").ok(), Some(RegistryKind::Heroes));
    assert_eq!(parse_kind("FAQ").ok(), Some(RegistryKind::Faqs));
    assert_eq!(parse_kind("projects").ok(), Some(RegistryKind::Portfolio));

    let err = parse_kind("testimonials").expect_err("unknown registry");
    assert!(matches!(err, ContentError::UnknownKind { .. }));
    assert!(err.to_string().contains("'testimonials'"));
}

#[test]
fn unknown_registry_error_lists_every_canonical_name() {
    let err = parse_kind("blog").expect_err("unknown registry");
    assert_eq!(
        err.to_string(),
        "Unknown registry (expected one of heroes, stats, features, faqs, processes, portfolio): 'blog'"
    );
}

#[test]
fn registry_view_reports_its_kind_and_size() {
    assert_eq!(heroes().kind(), RegistryKind::Heroes);
    assert_eq!(heroes().len(), get_hero_ids().len());
    assert!(projects().contains("peak-fitness"));
    assert!(!projects().contains(MISSING));
}

#[test]
fn entries_serialize_as_the_record_itself() {
    let entry = lookup(RegistryKind::Portfolio, "red-rocks-roofing").expect("project");
    let json = serde_json::to_value(entry).expect("serialize");
    assert_eq!(json["id"], "red-rocks-roofing");
    assert_eq!(json["websiteUrl"], "https://redrocksroofing.example");
    assert!(json.get("images").is_none());
}
