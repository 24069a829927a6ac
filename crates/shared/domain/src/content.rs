//! Display content records.
//!
//! Every record borrows `'static` data: tables are compiled into the binary
//! and never change at runtime. Groups own their items by composition.

use serde::Serialize;

/// Visual style of a hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroTheme {
    Light,
    Dark,
    Gradient,
}

/// Emphasis of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// A hero call-to-action. Either navigates (`href`) or triggers a client-side
/// action such as opening the quote form (`action_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroButton {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<&'static str>,
    pub variant: ButtonVariant,
}

/// Top-of-page banner content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub heading: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<&'static str>,
    pub description: &'static str,
    pub buttons: &'static [HeroButton],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<HeroTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_scroll_indicator: Option<bool>,
}

/// A statistic card. `value` is display text ("98%", "< 2s"), never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsGroup {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureGroup {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub features: &'static [Feature],
}

/// A question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqGroup {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub faqs: &'static [Faq],
}

/// Step marker: a number (`1`) or free text (`"01"`, `"Launch"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepLabel {
    Number(u32),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub step: StepLabel,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Ordered steps of a delivery process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessFlow {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub steps: &'static [ProcessStep],
}

/// A showcased client project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
    pub image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_url: Option<&'static str>,
}
