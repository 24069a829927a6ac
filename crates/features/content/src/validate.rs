//! Required-field checks for every content table.
//!
//! Page components render whatever the tables hold, so an empty heading or a
//! hero without a call to action would ship silently. [`validate`] walks all
//! registries and collects every violation; [`ensure_valid`] turns a non-empty
//! report into an error.

use crate::error::ContentError;
use crate::{faq_groups, feature_groups, heroes, process_flows, projects, stats_groups};
use agency_domain::content::{
    FaqGroup, FeatureGroup, HeroConfig, PortfolioProject, ProcessFlow, StatsGroup,
};
use agency_domain::registry::{Keyed, RegistryKind};
use fxhash::FxHashSet;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{info, warn};

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub registry: RegistryKind,
    pub id: &'static str,
    pub message: Cow<'static, str>,
}

/// Outcome of a validation pass.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    checked: usize,
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub const fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of records inspected.
    pub const fn checked(&self) -> usize {
        self.checked
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Converts the report into an error when any violation was found.
    ///
    /// # Errors
    /// Returns [`ContentError::Invalid`] naming the number of violations.
    pub fn into_result(self) -> Result<Self, ContentError> {
        if self.is_valid() {
            return Ok(self);
        }
        Err(ContentError::Invalid {
            message: format!(
                "{} violation(s) across {} record(s)",
                self.violations.len(),
                self.checked
            )
            .into(),
            context: None,
        })
    }

    fn flag(&mut self, registry: RegistryKind, id: &'static str, message: impl Into<Cow<'static, str>>) {
        self.violations.push(Violation { registry, id, message: message.into() });
    }

    fn require(&mut self, ok: bool, registry: RegistryKind, id: &'static str, message: &'static str) {
        if !ok {
            self.flag(registry, id, message);
        }
    }
}

/// Checks every compiled-in table.
pub fn validate() -> ValidationReport {
    let mut report = ValidationReport::default();

    check_heroes(heroes().entries(), &mut report);
    check_stats(stats_groups().entries(), &mut report);
    check_features(feature_groups().entries(), &mut report);
    check_faqs(faq_groups().entries(), &mut report);
    check_processes(process_flows().entries(), &mut report);
    check_projects(projects().entries(), &mut report);

    report
}

/// Validates all tables, logging each violation.
///
/// # Errors
/// Returns [`ContentError::Invalid`] if any table breaks an invariant.
pub fn ensure_valid() -> Result<ValidationReport, ContentError> {
    let report = validate();
    for violation in report.violations() {
        warn!(
            registry = %violation.registry,
            id = violation.id,
            "{}", violation.message
        );
    }
    info!(
        checked = report.checked(),
        violations = report.violations().len(),
        "Content validation finished"
    );
    report.into_result()
}

fn blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn check_keys<T: Keyed>(kind: RegistryKind, entries: &'static [T], report: &mut ValidationReport) {
    let mut seen = FxHashSet::default();
    for entry in entries {
        let id = entry.key();
        report.checked += 1;
        report.require(!blank(id), kind, id, "id is empty");
        if !seen.insert(id) {
            report.flag(kind, id, "duplicate id");
        }
    }
}

fn check_heroes(entries: &'static [HeroConfig], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Heroes;
    check_keys(KIND, entries, report);

    for hero in entries {
        report.require(!blank(hero.heading), KIND, hero.id, "heading is empty");
        report.require(!blank(hero.description), KIND, hero.id, "description is empty");
        report.require(!hero.buttons.is_empty(), KIND, hero.id, "hero has no buttons");

        for (position, button) in hero.buttons.iter().enumerate() {
            if blank(button.text) {
                report.flag(KIND, hero.id, format!("button {} has no text", position + 1));
            }
            if button.href.is_none() && button.action_id.is_none() {
                report.flag(KIND, hero.id, format!("button {} has neither href nor action", position + 1));
            }
        }
    }
}

fn check_stats(entries: &'static [StatsGroup], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Stats;
    check_keys(KIND, entries, report);

    for group in entries {
        report.require(!group.stats.is_empty(), KIND, group.id, "group has no stats");
        for stat in group.stats {
            if blank(stat.value) || blank(stat.label) {
                report.flag(KIND, group.id, "stat is missing a value or label");
            }
        }
    }
}

fn check_features(entries: &'static [FeatureGroup], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Features;
    check_keys(KIND, entries, report);

    for group in entries {
        report.require(!group.features.is_empty(), KIND, group.id, "group has no features");
        for feature in group.features {
            if blank(feature.title) || blank(feature.description) {
                report.flag(KIND, group.id, "feature is missing a title or description");
            }
        }
    }
}

fn check_faqs(entries: &'static [FaqGroup], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Faqs;
    check_keys(KIND, entries, report);

    for group in entries {
        report.require(!group.faqs.is_empty(), KIND, group.id, "group has no FAQs");
        for faq in group.faqs {
            if blank(faq.question) || blank(faq.answer) {
                report.flag(KIND, group.id, "FAQ is missing a question or answer");
            }
        }
    }
}

fn check_processes(entries: &'static [ProcessFlow], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Processes;
    check_keys(KIND, entries, report);

    for flow in entries {
        report.require(!flow.steps.is_empty(), KIND, flow.id, "flow has no steps");
        for step in flow.steps {
            if blank(step.title) {
                report.flag(KIND, flow.id, "step has no title");
            }
        }
    }
}

fn check_projects(entries: &'static [PortfolioProject], report: &mut ValidationReport) {
    const KIND: RegistryKind = RegistryKind::Portfolio;
    check_keys(KIND, entries, report);

    for project in entries {
        report.require(!blank(project.name), KIND, project.id, "name is empty");
        report.require(!blank(project.image), KIND, project.id, "image is empty");
        report.require(!project.services.is_empty(), KIND, project.id, "project lists no services");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::content::{ButtonVariant, Faq, HeroButton};

    static BROKEN_HEROES: &[HeroConfig] = &[
        HeroConfig {
            id: "dup",
            badge: None,
            heading: "Fine",
            subheading: None,
            description: "Fine",
            buttons: &[HeroButton {
                text: "Go",
                href: Some("/"),
                action_id: None,
                variant: ButtonVariant::Primary,
            }],
            theme: None,
            show_scroll_indicator: None,
        },
        HeroConfig {
            id: "dup",
            badge: None,
            heading: "   ",
            subheading: None,
            description: "",
            buttons: &[],
            theme: None,
            show_scroll_indicator: None,
        },
        HeroConfig {
            id: "dead-button",
            badge: None,
            heading: "Heading",
            subheading: None,
            description: "Description",
            buttons: &[HeroButton {
                text: "",
                href: None,
                action_id: None,
                variant: ButtonVariant::Secondary,
            }],
            theme: None,
            show_scroll_indicator: None,
        },
    ];

    static EMPTY_FAQ_GROUPS: &[FaqGroup] = &[
        FaqGroup { id: "empty", title: None, description: None, faqs: &[] },
        FaqGroup {
            id: "blank",
            title: None,
            description: None,
            faqs: &[Faq { question: "Q?", answer: " " }],
        },
    ];

    fn messages(report: &ValidationReport, id: &str) -> Vec<String> {
        report
            .violations()
            .iter()
            .filter(|v| v.id == id)
            .map(|v| v.message.to_string())
            .collect()
    }

    #[test]
    fn hero_invariants_are_reported() {
        let mut report = ValidationReport::default();
        check_heroes(BROKEN_HEROES, &mut report);

        assert_eq!(report.checked(), 3);
        let dup = messages(&report, "dup");
        assert!(dup.contains(&"duplicate id".to_owned()));
        assert!(dup.contains(&"heading is empty".to_owned()));
        assert!(dup.contains(&"description is empty".to_owned()));
        assert!(dup.contains(&"hero has no buttons".to_owned()));

        let dead = messages(&report, "dead-button");
        assert_eq!(dead, ["button 1 has no text", "button 1 has neither href nor action"]);
    }

    #[test]
    fn faq_group_invariants_are_reported() {
        let mut report = ValidationReport::default();
        check_faqs(EMPTY_FAQ_GROUPS, &mut report);

        assert_eq!(messages(&report, "empty"), ["group has no FAQs"]);
        assert_eq!(messages(&report, "blank"), ["FAQ is missing a question or answer"]);
    }

    #[test]
    fn report_with_violations_becomes_invalid_error() {
        let mut report = ValidationReport::default();
        check_faqs(EMPTY_FAQ_GROUPS, &mut report);

        let err = report.into_result().expect_err("violations present");
        assert!(matches!(err, ContentError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid content: 2 violation(s) across 2 record(s)");
    }

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }
}
