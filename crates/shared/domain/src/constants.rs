//! Fixed identifiers shared across crates.

/// JSON-LD `@context` for every generated node.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Currency used for every published price.
pub const PRICE_CURRENCY: &str = "USD";

/// Registry names as accepted on the command line and in logs.
pub const HEROES: &str = "heroes";
pub const STATS: &str = "stats";
pub const FEATURES: &str = "features";
pub const FAQS: &str = "faqs";
pub const PROCESSES: &str = "processes";
pub const PORTFOLIO: &str = "portfolio";
