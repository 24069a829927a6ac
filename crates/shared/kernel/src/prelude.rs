pub use crate::config::{ConfigError, ConfigErrorExt, load_config, load_config_or_default};
pub use agency_domain::config::SiteConfig;
pub use agency_domain::registry::{Keyed, RegistryKind};
