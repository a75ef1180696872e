//! Helpers shared by the integration tests

use rangeid::RangeSet;

/// Canonical ranges of `set` as space separated packed items
pub fn packed(set: &RangeSet) -> String {
    set.iter()
        .map(|range| range.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `text` and return its packed form
pub fn parse_packed(text: &str) -> String {
    packed(&rangeid::parse(text))
}
