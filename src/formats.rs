//! Rendering and export of range sets
//!
//! This module contains:
//! - packed / unpacked rendering of ranges into display items
//! - the export registry, which re-serializes items into a CAE dialect

pub mod dialects;
pub mod json;
pub mod packing;
pub mod registry;

pub use dialects::{
    CalcColumn, CalcLineComma, CalcLineTab, Femap, HyperMesh, Nastran, PatranElements,
    PatranSession,
};
pub use json::JsonExporter;
pub use packing::{render, to_packed_string, to_unpacked_string_list, Packing};
pub use registry::{ExportError, ExportRegistry, Exporter};
