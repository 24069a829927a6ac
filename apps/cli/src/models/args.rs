//! # CLI Argument Definitions
//!
//! Command-line surface of the `agency` tool, declared with `clap` derive.

use agency::content::parse_kind;
use agency::domain::registry::RegistryKind;
use agency::seo::{BreadcrumbItem, PriceType};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "agency")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect site content and generate structured data")]
pub struct Cli {
    /// Site config file (defaults to `site.*` in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List the ids of a content registry
    Ids {
        /// Registry name (heroes, stats, features, faqs, processes, portfolio)
        #[arg(value_parser = parse_kind)]
        kind: RegistryKind,
    },
    /// Print one content entry as JSON
    Show {
        #[arg(value_parser = parse_kind)]
        kind: RegistryKind,
        id: String,
    },
    /// Search FAQ questions and answers (all FAQs when no keyword is given)
    Faq {
        keyword: Option<String>,
    },
    /// Print a schema.org JSON-LD node
    Schema(SchemaArgs),
    /// Print the page metadata (title, canonical URL, Open Graph, Twitter, robots)
    Meta {
        /// Site-relative page path, e.g. `/services/seo`
        #[arg(short, long)]
        path: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Share image, site-relative or absolute
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        no_index: bool,
    },
    /// Check every content table for missing required fields
    Validate {},
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Wrap the output in a JSON-LD script element
    #[arg(long, global = true)]
    pub script: bool,

    #[command(subcommand)]
    pub target: SchemaTarget,
}

#[derive(Debug, Subcommand)]
pub enum SchemaTarget {
    /// The agency as a LocalBusiness
    LocalBusiness {},
    /// The agency as an Organization
    Organization {},
    /// The configured WebSite
    Website {},
    /// FAQPage for one FAQ group
    FaqPage {
        /// FAQ group id
        #[arg(short, long, default_value = "general")]
        group: String,
    },
    /// A Service, with an offer when a price is given
    Service {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        price: Option<String>,
        #[arg(long, default_value_t = PriceType::OneTime)]
        price_type: PriceType,
    },
    /// A BreadcrumbList, positions in argument order
    Breadcrumb {
        /// Crumb as `NAME=URL`; repeat for each level
        #[arg(long = "crumb", value_name = "NAME=URL", value_parser = parse_crumb, required = true)]
        crumbs: Vec<BreadcrumbItem>,
    },
}

fn parse_crumb(raw: &str) -> Result<BreadcrumbItem, String> {
    raw.split_once('=')
        .map(|(name, url)| BreadcrumbItem::new(name.trim(), url.trim()))
        .ok_or_else(|| format!("expected NAME=URL, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn crumb_splits_on_first_equals() {
        let crumb = parse_crumb("Search=/s?q=a").unwrap();
        assert_eq!(crumb, BreadcrumbItem::new("Search", "/s?q=a"));
        assert!(parse_crumb("no-separator").is_err());
    }

    #[test]
    fn verbosity_counts_and_config_is_global() {
        let cli = Cli::try_parse_from(["agency", "ids", "heroes", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        assert!(matches!(cli.command, AppCommands::Ids { kind: RegistryKind::Heroes }));
    }

    #[test]
    fn registry_aliases_are_accepted() {
        let cli = Cli::try_parse_from(["agency", "show", "projects", "peak-fitness"]).unwrap();
        assert!(matches!(cli.command, AppCommands::Show { kind: RegistryKind::Portfolio, .. }));
        assert!(Cli::try_parse_from(["agency", "ids", "blog"]).is_err());
    }
}
