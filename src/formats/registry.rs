//! Export registry
//!
//! Each target dialect implements the `Exporter` trait and is registered
//! with `ExportRegistry` under its name. Exporters work on already rendered
//! items (see [`render`](super::render)), so the same dialect serves both
//! packed and unpacked output.

use std::collections::HashMap;
use std::fmt;

/// Error that can occur during export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Format not found in registry
    FormatNotFound(String),
    /// A packed item with a step cannot be written in the target dialect
    PackedItem {
        format: String,
        item: String,
        /// Byte offset of the first ':' in `item`
        column: usize,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ExportError::PackedItem {
                format,
                item,
                column,
            } => {
                let padding = " ".repeat(*column);
                let underline = "^".repeat(item.len() - *column);
                writeln!(f, "The item is not in an exportable format for {format}:")?;
                writeln!(f, "'{item}'")?;
                writeln!(f, " {padding}{underline}")?;
                writeln!(f, "--> contains two ':'")?;
                write!(f, "Recommendation: Choose the 'unpacked' format, and retry.")
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl ExportError {
    /// Reject `item` if it carries a step (`from:to:by`)
    pub(crate) fn check_unstepped(format: &str, item: &str) -> Result<(), ExportError> {
        if item.matches(':').count() <= 1 {
            return Ok(());
        }
        Err(ExportError::PackedItem {
            format: format.to_string(),
            item: item.to_string(),
            column: item.find(':').unwrap_or(0),
        })
    }
}

/// A target text dialect
pub trait Exporter: Send + Sync {
    /// The registry key (e.g., "nastran", "hypermesh")
    fn name(&self) -> &str;

    /// Serialize rendered items to this dialect
    fn export(&self, items: &[String]) -> Result<String, ExportError>;

    /// Human readable label
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of exporters, keyed by name
pub struct ExportRegistry {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExportRegistry {
            exporters: HashMap::new(),
        }
    }

    /// Register an exporter, replacing any previous one with the same name
    pub fn register<E: Exporter + 'static>(&mut self, exporter: E) {
        self.exporters
            .insert(exporter.name().to_string(), Box::new(exporter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Exporter> {
        self.exporters.get(name).map(|e| e.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.exporters.contains_key(name)
    }

    /// Export items using the named format
    pub fn export(&self, items: &[String], format: &str) -> Result<String, ExportError> {
        let exporter = self
            .get(format)
            .ok_or_else(|| ExportError::FormatNotFound(format.to_string()))?;
        exporter.export(items)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.exporters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with every built-in dialect
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::CalcLineComma);
        registry.register(super::CalcLineTab);
        registry.register(super::CalcColumn);
        registry.register(super::Nastran);
        registry.register(super::PatranElements);
        registry.register(super::PatranSession);
        registry.register(super::Femap);
        registry.register(super::HyperMesh);
        registry.register(super::JsonExporter);

        registry
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
