#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{content, meta, schema};
use crate::models::args::{AppCommands, Cli};

use agency::kernel::prelude::{SiteConfig, load_config_or_default};
use agency_logger::Logger;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: SiteConfig =
        agency_logger::with_console(cli.verbose, || load_config_or_default(cli.config.as_deref()))
            .context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg, cli.verbose)?;
    debug!(base_url = %cfg.site.base_url, "Configuration loaded");

    match cli.command {
        AppCommands::Ids { kind } => content::list_ids(kind),
        AppCommands::Show { kind, id } => content::show_entry(kind, &id)?,
        AppCommands::Faq { keyword } => content::search_faqs(keyword.as_deref())?,
        AppCommands::Schema(args) => schema::print_schema(&args, &cfg)?,
        AppCommands::Meta { path, title, description, image, no_index } => {
            meta::print_metadata(&cfg, path, title, description, image, no_index)?;
        },
        AppCommands::Validate {} => content::validate()?,
    }

    Ok(())
}

fn init_logger(cfg: &SiteConfig, verbose: u8) -> Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).verbosity(verbose);
    let builder = match &cfg.log.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &cfg.log.dir {
        Some(dir) if cfg.log.json => builder.path(dir).json().init(),
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    };

    logger.context("Failed to initialize logging")
}
