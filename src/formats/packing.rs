//! Packed and unpacked text forms of ranges

use crate::range::Range;
use crate::range_set::RangeSet;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How ranges are turned into display items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Packing {
    /// One item per range: `100:102`, `115:131:8`
    #[default]
    Packed,
    /// One item per identifier
    Unpacked,
}

impl FromStr for Packing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "packed" => Ok(Packing::Packed),
            "unpacked" => Ok(Packing::Unpacked),
            other => Err(format!("unknown packing '{other}', expected 'packed' or 'unpacked'")),
        }
    }
}

impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packing::Packed => write!(f, "packed"),
            Packing::Unpacked => write!(f, "unpacked"),
        }
    }
}

/// Canonical packed form: `from`, `from:to` or `from:to:by`
pub fn to_packed_string(range: &Range) -> String {
    if range.is_empty() {
        return String::new();
    }

    let (from, to, by) = (range.from(), range.to(), range.by());
    if from == to {
        from.to_string()
    } else if by == 1 {
        format!("{from}:{to}")
    } else {
        format!("{from}:{to}:{by}")
    }
}

/// Every identifier of the range, ascending, as decimal strings
pub fn to_unpacked_string_list(range: &Range) -> Vec<String> {
    range.iter().map(|id| id.to_string()).collect()
}

/// Render a whole set into display items
pub fn render(set: &RangeSet, packing: Packing) -> Vec<String> {
    match packing {
        Packing::Packed => set.iter().map(to_packed_string).collect(),
        Packing::Unpacked => set.iter().flat_map(to_unpacked_string_list).collect(),
    }
}
