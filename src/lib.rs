//! # rangeid
//!
//! Converts identifier lists pasted from CAE tools (Nastran, Patran, Abaqus,
//! Femap, HyperMesh, spreadsheets) into canonical integer ranges, and back.
//!
//! Text goes through the [`tokenizer`] and [`parser`] into a [`RangeSet`],
//! a sorted list of disjoint [`Range`]s. Sets are edited with union and
//! difference, then rendered with [`formats::render`] and exported to a
//! target dialect through the [`formats::ExportRegistry`].
//!
//! ```text
//! let mut set = rangeid::parse("SET 1 = 100 THRU 102, 109, 110");
//! set.remove_text("101");
//! // set: 100 102 109 110
//! ```
//!
//! Parsing is permissive: anything that is not a range is dropped, and no
//! input is ever rejected.

pub mod config;
pub mod formats;
pub mod logging;
pub mod parser;
pub mod range;
pub mod range_set;
pub mod selection;
pub mod tokenizer;

pub use formats::{ExportError, ExportRegistry, Exporter, Packing};
pub use parser::{parse, parse_ranges};
pub use range::{Identifier, Range};
pub use range_set::RangeSet;
pub use selection::Selection;
pub use tokenizer::{tokenize, Token};
