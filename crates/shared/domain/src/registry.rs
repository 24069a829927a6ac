//! Registry vocabulary: what a keyed record is, and which registries exist.

use crate::constants;
use crate::content::{FaqGroup, FeatureGroup, HeroConfig, PortfolioProject, ProcessFlow, StatsGroup};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A record addressable by a unique string id within its registry.
pub trait Keyed: 'static {
    fn key(&self) -> &'static str;
}

macro_rules! keyed_by_id {
    ($($ty:ty),+ $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &'static str {
                self.id
            }
        })+
    };
}

keyed_by_id!(HeroConfig, StatsGroup, FeatureGroup, FaqGroup, ProcessFlow, PortfolioProject);

/// The content registries known to the site.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RegistryKind {
    #[strum(to_string = "heroes", serialize = "hero")]
    Heroes,
    #[strum(to_string = "stats")]
    Stats,
    #[strum(to_string = "features", serialize = "feature")]
    Features,
    #[strum(to_string = "faqs", serialize = "faq")]
    Faqs,
    #[strum(to_string = "processes", serialize = "process")]
    Processes,
    #[strum(to_string = "portfolio", serialize = "projects")]
    Portfolio,
}

impl RegistryKind {
    /// Canonical (plural) name, identical to the matching constant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heroes => constants::HEROES,
            Self::Stats => constants::STATS,
            Self::Features => constants::FEATURES,
            Self::Faqs => constants::FAQS,
            Self::Processes => constants::PROCESSES,
            Self::Portfolio => constants::PORTFOLIO,
        }
    }
}
