use super::print_json;
use agency::content;
use agency::domain::registry::RegistryKind;
use anyhow::{Context, Result, bail};
use tracing::info;

/// Prints every id of `kind`, one per line, in declaration order.
pub fn list_ids(kind: RegistryKind) {
    for id in content::ids_for(kind) {
        println!("{id}");
    }
}

/// Prints one entry as JSON.
///
/// # Errors
/// Returns an error when `id` is not in the registry.
pub fn show_entry(kind: RegistryKind, id: &str) -> Result<()> {
    let Some(entry) = content::lookup(kind, id) else {
        let known = content::ids_for(kind).join(", ");
        bail!("No {kind} entry with id '{id}' (known ids: {known})");
    };
    print_json(&entry)
}

/// Prints the FAQs matching `keyword` as a JSON array.
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn search_faqs(keyword: Option<&str>) -> Result<()> {
    let faqs = keyword.map_or_else(content::all_faqs, content::search_faqs);
    info!(matches = faqs.len(), "FAQ search finished");
    print_json(&faqs)
}

/// Runs content validation and prints one line per violation.
///
/// # Errors
/// Returns an error when any table breaks an invariant.
pub fn validate() -> Result<()> {
    let report = content::validate();
    for violation in report.violations() {
        println!("❌ {}/{}: {}", violation.registry, violation.id, violation.message);
    }

    let report = report.into_result().context("Content validation failed")?;
    info!(checked = report.checked(), "Content validation passed");
    println!("✅ {} records checked, no violations", report.checked());
    Ok(())
}
