use agency_domain::business::CONTACT_INFO;
use agency_domain::content::{
    ButtonVariant, HeroButton, HeroConfig, HeroTheme, PortfolioProject, ProcessStep, StepLabel,
};
use serde_json::json;

#[test]
fn hero_serializes_camel_case_and_omits_absent_fields() {
    const BUTTONS: &[HeroButton] = &[HeroButton {
        text: "Get a quote",
        href: None,
        action_id: Some("open-quote"),
        variant: ButtonVariant::Primary,
    }];
    let hero = HeroConfig {
        id: "demo",
        badge: None,
        heading: "Websites that sell",
        subheading: None,
        description: "We build them.",
        buttons: BUTTONS,
        theme: Some(HeroTheme::Gradient),
        show_scroll_indicator: Some(true),
    };

    let value = serde_json::to_value(hero).expect("serialize hero");
    assert_eq!(
        value,
        json!({
            "id": "demo",
            "heading": "Websites that sell",
            "description": "We build them.",
            "buttons": [{ "text": "Get a quote", "actionId": "open-quote", "variant": "primary" }],
            "theme": "gradient",
            "showScrollIndicator": true
        })
    );
}

#[test]
fn step_label_serializes_untagged() {
    let numbered = ProcessStep { step: StepLabel::Number(1), icon: "i", title: "t", description: "d" };
    let texted = ProcessStep { step: StepLabel::Text("01"), icon: "i", title: "t", description: "d" };

    assert_eq!(serde_json::to_value(numbered).expect("serialize")["step"], json!(1));
    assert_eq!(serde_json::to_value(texted).expect("serialize")["step"], json!("01"));
}

#[test]
fn portfolio_project_uses_camel_case_urls() {
    let project = PortfolioProject {
        id: "p",
        name: "P",
        industry: "Retail",
        description: "D",
        services: &["SEO"],
        image: "/img.jpg",
        images: None,
        website_url: Some("https://example.com"),
        case_study_url: None,
    };

    let value = serde_json::to_value(project).expect("serialize project");
    assert_eq!(value["websiteUrl"], json!("https://example.com"));
    assert!(value.get("caseStudyUrl").is_none());
    assert!(value.get("images").is_none());
}

#[test]
fn social_profiles_keep_publishing_order() {
    let urls = CONTACT_INFO.social.urls();
    assert!(urls[0].contains("facebook.com"));
    assert!(urls[1].contains("instagram.com"));
    assert!(urls[2].contains("linkedin.com"));
}
