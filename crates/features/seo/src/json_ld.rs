//! Rendering of schema nodes into JSON-LD text.

use crate::error::{SeoError, SeoErrorExt};
use serde::Serialize;

const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// Serializes any schema node as JSON-LD.
///
/// Implemented for every [`Serialize`] type, so the generators return plain
/// structs and the caller picks the output form.
pub trait JsonLd: Serialize {
    /// Compact JSON.
    ///
    /// # Errors
    /// Returns [`SeoError::Serialize`] if the value cannot be represented as JSON.
    fn to_json_ld(&self) -> Result<String, SeoError> {
        serde_json::to_string(self).context("Failed to render JSON-LD")
    }

    /// Indented JSON, for humans.
    ///
    /// # Errors
    /// Returns [`SeoError::Serialize`] if the value cannot be represented as JSON.
    fn to_json_ld_pretty(&self) -> Result<String, SeoError> {
        serde_json::to_string_pretty(self).context("Failed to render JSON-LD")
    }

    /// A complete `<script type="application/ld+json">` element.
    ///
    /// Every `<` in the payload is written as `\u003c`, which JSON parsers
    /// read back unchanged but HTML parsers never see as a closing tag.
    ///
    /// # Errors
    /// Returns [`SeoError::Serialize`] if the value cannot be represented as JSON.
    fn to_script_tag(&self) -> Result<String, SeoError> {
        let json = self.to_json_ld()?;
        Ok(format!("{SCRIPT_OPEN}{}{SCRIPT_CLOSE}", json.replace('<', "\\u003c")))
    }
}

impl<T: Serialize + ?Sized> JsonLd for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn script_tag_wraps_compact_json() {
        let tag = json!({ "name": "Pixel Forge" }).to_script_tag().unwrap();
        assert_eq!(tag, r#"<script type="application/ld+json">{"name":"Pixel Forge"}</script>"#);
    }

    #[test]
    fn script_tag_cannot_be_closed_by_content() {
        let tag = json!({ "text": "</script><script>alert(1)</script>" }).to_script_tag().unwrap();
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.contains(r"\u003c/script>"));
    }

    #[test]
    fn escaped_payload_parses_back_to_the_original_text() {
        let tag = json!({ "text": "a < b" }).to_script_tag().unwrap();
        let payload = tag.strip_prefix(SCRIPT_OPEN).and_then(|s| s.strip_suffix(SCRIPT_CLOSE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["text"], "a < b");
    }
}
