//! # Content Registry
//!
//! Named, typed access to the site's static display content so pages can
//! reuse the same hero, stats, features, FAQs, process steps and portfolio
//! entries without duplicating them.
//!
//! Every registry exposes the same two operations:
//!
//! * `get_<kind>(id)` returns `Some(&'static record)` or `None` on a miss;
//!   it never panics or errors, so callers must handle the missing branch.
//! * `get_<kind>_ids()` lists every id in declaration order.
//!
//! On top of that, [`search_faqs`] does a case-insensitive substring scan of
//! every FAQ, and [`validate`] checks the required-field invariants of all
//! tables.
//!
//! ## Example
//!
//! ```rust
//! use agency_content::{get_hero, get_hero_ids, search_faqs};
//!
//! for id in get_hero_ids() {
//!     let hero = get_hero(id).expect("listed ids resolve");
//!     assert!(!hero.buttons.is_empty());
//! }
//!
//! assert!(get_hero("does-not-exist").is_none());
//! assert!(search_faqs("mobile").iter().all(|faq| {
//!     faq.question.to_lowercase().contains("mobile") || faq.answer.to_lowercase().contains("mobile")
//! }));
//! ```

mod error;
mod registry;
mod search;
mod tables;
pub mod validate;

pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::registry::Registry;
pub use crate::search::{all_faqs, search_faqs};
pub use crate::validate::{ValidationReport, Violation, ensure_valid, validate};

use agency_domain::content::{
    FaqGroup, FeatureGroup, HeroConfig, PortfolioProject, ProcessFlow, StatsGroup,
};
use agency_domain::registry::RegistryKind;
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use std::sync::LazyLock;

static HEROES: LazyLock<Registry<HeroConfig>> =
    LazyLock::new(|| Registry::new(RegistryKind::Heroes, tables::heroes::HEROES));
static STATS_GROUPS: LazyLock<Registry<StatsGroup>> =
    LazyLock::new(|| Registry::new(RegistryKind::Stats, tables::stats::STATS_GROUPS));
static FEATURE_GROUPS: LazyLock<Registry<FeatureGroup>> =
    LazyLock::new(|| Registry::new(RegistryKind::Features, tables::features::FEATURE_GROUPS));
static FAQ_GROUPS: LazyLock<Registry<FaqGroup>> =
    LazyLock::new(|| Registry::new(RegistryKind::Faqs, tables::faqs::FAQ_GROUPS));
static PROCESS_FLOWS: LazyLock<Registry<ProcessFlow>> =
    LazyLock::new(|| Registry::new(RegistryKind::Processes, tables::processes::PROCESS_FLOWS));
static PROJECTS: LazyLock<Registry<PortfolioProject>> =
    LazyLock::new(|| Registry::new(RegistryKind::Portfolio, tables::portfolio::PROJECTS));

// --- Registries ---

pub fn heroes() -> &'static Registry<HeroConfig> {
    &HEROES
}

pub fn stats_groups() -> &'static Registry<StatsGroup> {
    &STATS_GROUPS
}

pub fn feature_groups() -> &'static Registry<FeatureGroup> {
    &FEATURE_GROUPS
}

pub fn faq_groups() -> &'static Registry<FaqGroup> {
    &FAQ_GROUPS
}

pub fn process_flows() -> &'static Registry<ProcessFlow> {
    &PROCESS_FLOWS
}

pub fn projects() -> &'static Registry<PortfolioProject> {
    &PROJECTS
}

// --- Lookups ---

pub fn get_hero(id: &str) -> Option<&'static HeroConfig> {
    HEROES.get(id)
}

pub fn get_hero_ids() -> Vec<&'static str> {
    HEROES.ids()
}

pub fn get_stats_group(id: &str) -> Option<&'static StatsGroup> {
    STATS_GROUPS.get(id)
}

pub fn get_stats_group_ids() -> Vec<&'static str> {
    STATS_GROUPS.ids()
}

pub fn get_feature_group(id: &str) -> Option<&'static FeatureGroup> {
    FEATURE_GROUPS.get(id)
}

pub fn get_feature_group_ids() -> Vec<&'static str> {
    FEATURE_GROUPS.ids()
}

pub fn get_faq_group(id: &str) -> Option<&'static FaqGroup> {
    FAQ_GROUPS.get(id)
}

pub fn get_faq_group_ids() -> Vec<&'static str> {
    FAQ_GROUPS.ids()
}

pub fn get_process_flow(id: &str) -> Option<&'static ProcessFlow> {
    PROCESS_FLOWS.get(id)
}

pub fn get_process_flow_ids() -> Vec<&'static str> {
    PROCESS_FLOWS.ids()
}

pub fn get_project(id: &str) -> Option<&'static PortfolioProject> {
    PROJECTS.get(id)
}

pub fn get_project_ids() -> Vec<&'static str> {
    PROJECTS.ids()
}

/// Projects whose industry equals `industry`, ignoring case, in declaration order.
pub fn get_projects_by_industry(industry: &str) -> Vec<&'static PortfolioProject> {
    PROJECTS.iter().filter(|project| project.industry.eq_ignore_ascii_case(industry)).collect()
}

// --- By registry name ---

/// A borrowed record from any registry. Serializes as the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentEntry {
    Hero(&'static HeroConfig),
    Stats(&'static StatsGroup),
    Features(&'static FeatureGroup),
    Faqs(&'static FaqGroup),
    Process(&'static ProcessFlow),
    Project(&'static PortfolioProject),
}

/// Parses a registry name (`heroes`, `hero`, `FAQ`, ...).
///
/// # Errors
/// Returns [`ContentError::UnknownKind`] when `name` matches no registry.
pub fn parse_kind(name: &str) -> Result<RegistryKind, ContentError> {
    RegistryKind::from_str(name).map_err(|_| {
        let known: Vec<&str> = RegistryKind::iter().map(RegistryKind::name).collect();
        ContentError::UnknownKind {
            message: format!("'{name}'").into(),
            context: Some(format!("expected one of {}", known.join(", ")).into()),
        }
    })
}

/// Ids of the registry named by `kind`, in declaration order.
pub fn ids_for(kind: RegistryKind) -> Vec<&'static str> {
    match kind {
        RegistryKind::Heroes => get_hero_ids(),
        RegistryKind::Stats => get_stats_group_ids(),
        RegistryKind::Features => get_feature_group_ids(),
        RegistryKind::Faqs => get_faq_group_ids(),
        RegistryKind::Processes => get_process_flow_ids(),
        RegistryKind::Portfolio => get_project_ids(),
    }
}

/// Looks up `id` in the registry named by `kind`.
pub fn lookup(kind: RegistryKind, id: &str) -> Option<ContentEntry> {
    match kind {
        RegistryKind::Heroes => get_hero(id).map(ContentEntry::Hero),
        RegistryKind::Stats => get_stats_group(id).map(ContentEntry::Stats),
        RegistryKind::Features => get_feature_group(id).map(ContentEntry::Features),
        RegistryKind::Faqs => get_faq_group(id).map(ContentEntry::Faqs),
        RegistryKind::Processes => get_process_flow(id).map(ContentEntry::Process),
        RegistryKind::Portfolio => get_project(id).map(ContentEntry::Project),
    }
}
