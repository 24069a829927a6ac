//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight: it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use agency_kernel::config::load_config;
//! use agency_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("config/site")).unwrap();
//! ```
pub mod config;
pub mod prelude;

pub use agency_domain as domain;
