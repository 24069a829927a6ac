pub mod content;
pub mod meta;
pub mod schema;

use anyhow::{Context, Result};
use serde::Serialize;

/// Prints `value` as indented JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
