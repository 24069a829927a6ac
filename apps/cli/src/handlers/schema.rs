use crate::models::args::{SchemaArgs, SchemaTarget};
use agency::domain::config::SiteConfig;
use agency::seo::{
    JsonLd, generate_breadcrumb_schema, generate_local_business_schema,
    generate_organization_schema, generate_service_schema, generate_website_schema,
};
use anyhow::{Context, Result};

/// Prints the requested node as pretty JSON-LD, or as a script element with `--script`.
///
/// # Errors
/// Returns an error for an unknown FAQ group or if rendering fails.
pub fn print_schema(args: &SchemaArgs, site: &SiteConfig) -> Result<()> {
    let output = match &args.target {
        SchemaTarget::LocalBusiness {} => render(&generate_local_business_schema(), args.script),
        SchemaTarget::Organization {} => render(&generate_organization_schema(), args.script),
        SchemaTarget::Website {} => render(&generate_website_schema(site), args.script),
        SchemaTarget::FaqPage { group } => {
            let schema = agency::faq_page_schema(group)
                .with_context(|| format!("No FAQ group with id '{group}'"))?;
            render(&schema, args.script)
        },
        SchemaTarget::Service { name, description, price, price_type } => render(
            &generate_service_schema(name, description, price.as_deref(), *price_type),
            args.script,
        ),
        SchemaTarget::Breadcrumb { crumbs } => {
            render(&generate_breadcrumb_schema(crumbs), args.script)
        },
    }?;

    println!("{output}");
    Ok(())
}

fn render<T: JsonLd>(node: &T, script: bool) -> Result<String> {
    let rendered = if script { node.to_script_tag() } else { node.to_json_ld_pretty() };
    Ok(rendered?)
}
