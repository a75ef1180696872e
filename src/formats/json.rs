//! JSON export of rendered items

use super::registry::{ExportError, Exporter};

/// Writes the items as a JSON array of strings
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of items"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        // A slice of strings always serializes
        Ok(serde_json::to_string(items).unwrap_or_default())
    }
}
