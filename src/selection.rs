//! Live selection with its display items
//!
//! A [`Selection`] owns a [`RangeSet`] and keeps the rendered item list in
//! sync after every edit, so a front end can show `items()` row by row
//! without re-rendering.

use crate::formats::{render, Packing};
use crate::range_set::RangeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: RangeSet,
    packing: Packing,
    items: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packing(packing: Packing) -> Self {
        Selection {
            packing,
            ..Self::default()
        }
    }

    /// Parse `text` and add its identifiers. Empty text is ignored.
    pub fn add(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ranges.add_text(text);
        self.synchronize();
    }

    /// Parse `text` and remove its identifiers. Empty text is ignored.
    pub fn remove(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ranges.remove_text(text);
        self.synchronize();
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
        self.items.clear();
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn set_packing(&mut self, packing: Packing) {
        if self.packing == packing {
            return;
        }
        self.packing = packing;
        self.synchronize();
    }

    /// Rendered items, one per row
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    /// Number of unique identifiers selected
    pub fn count(&self) -> u64 {
        self.ranges.count()
    }

    pub fn ranges(&self) -> &RangeSet {
        &self.ranges
    }

    fn synchronize(&mut self) {
        self.items = render(&self.ranges, self.packing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let selection = Selection::new();
        assert_eq!(selection.packing(), Packing::Packed);
        assert_eq!(selection.row_count(), 0);
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_add_and_remove() {
        let mut selection = Selection::new();
        selection.add("100:102,109,110,115:131:8");
        assert_eq!(selection.items(), ["100:102", "109", "110", "115:131:8"]);
        assert_eq!(selection.count(), 8);

        selection.remove("101 123");
        assert_eq!(selection.items(), ["100", "102", "109", "110", "115", "131"]);
        assert_eq!(selection.count(), 6);
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let mut selection = Selection::new();
        selection.add("5");
        selection.add("");
        selection.remove("");
        assert_eq!(selection.items(), ["5"]);
    }

    #[test]
    fn test_packing_switch_rerenders() {
        let mut selection = Selection::new();
        selection.add("1 THRU 4");
        assert_eq!(selection.row_count(), 1);

        selection.set_packing(Packing::Unpacked);
        assert_eq!(selection.items(), ["1", "2", "3", "4"]);
        assert_eq!(selection.row_count(), 4);
        assert_eq!(selection.count(), 4);

        selection.set_packing(Packing::Packed);
        assert_eq!(selection.items(), ["1:4"]);
    }

    #[test]
    fn test_unpacked_selection_renders_on_add() {
        let mut selection = Selection::with_packing(Packing::Unpacked);
        selection.add("10:30:10");
        assert_eq!(selection.items(), ["10", "20", "30"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.add("1:100");
        selection.clear();
        assert!(selection.items().is_empty());
        assert!(selection.ranges().is_empty());
    }
}
