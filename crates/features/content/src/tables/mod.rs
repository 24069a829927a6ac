//! Compiled-in content tables. Declaration order is the order pages render
//! and the order `get_*_ids` reports.

pub(crate) mod faqs;
pub(crate) mod features;
pub(crate) mod heroes;
pub(crate) mod portfolio;
pub(crate) mod processes;
pub(crate) mod stats;
