//! A single arithmetic progression of identifiers
//!
//! A [`Range`] holds `from, from+by, from+2·by, …, to`. Whatever the caller
//! passes in, the stored fields are always canonical:
//!
//! - `from == 0` means the range is empty, and nothing else is meaningful
//! - otherwise `from >= 1`, `to >= from`, `by >= 1`
//! - `to` is exactly reachable from `from` in whole steps of `by`
//! - a range with a single element has `by == 1`
//!
//! Endpoints given in descending order are swapped and the progression is
//! anchored on the larger one, so `Range::new(20, 12, -3)` is `14:20:3`.

use serde::Serialize;
use std::fmt;

/// Element type of every range and range set
pub type Identifier = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    from: Identifier,
    to: Identifier,
    by: i64,
}

impl Range {
    /// Build a range and normalize it
    ///
    /// A `to` of zero makes a single-value range; a negative `to` counts by
    /// its magnitude; a `by` of zero means one.
    pub fn new(from: Identifier, to: Identifier, by: i64) -> Self {
        let mut range = Range { from, to, by };
        range.normalize();
        range
    }

    /// A range holding only `value`, or the empty range if `value < 1`
    pub fn single(value: Identifier) -> Self {
        Range::new(value, 0, 0)
    }

    pub fn empty() -> Self {
        Range {
            from: 0,
            to: 0,
            by: 1,
        }
    }

    pub fn set_range(&mut self, from: Identifier, to: Identifier, by: i64) {
        self.from = from;
        self.to = to;
        self.by = by;
        self.normalize();
    }

    pub fn clear(&mut self) {
        *self = Range::empty();
    }

    pub fn from(&self) -> Identifier {
        self.from
    }

    pub fn to(&self) -> Identifier {
        self.to
    }

    pub fn by(&self) -> i64 {
        self.by
    }

    pub fn is_empty(&self) -> bool {
        self.from == 0
    }

    /// Number of identifiers in the range
    pub fn count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        ((self.to - self.from) / self.by) as u64 + 1
    }

    /// Every identifier of the range, ascending
    pub fn iter(&self) -> impl Iterator<Item = Identifier> {
        let (from, to) = if self.is_empty() {
            (1, 0)
        } else {
            (self.from, self.to)
        };
        (from..=to).step_by(self.by as usize)
    }

    pub fn contains(&self, id: Identifier) -> bool {
        !self.is_empty() && id >= self.from && id <= self.to && (id - self.from) % self.by == 0
    }

    fn normalize(&mut self) {
        if self.from <= 0 {
            self.clear();
            return;
        }

        self.to = self.to.saturating_abs();

        if self.to == 0 {
            self.to = self.from;
            self.by = 1;
            return;
        }

        let step = if self.by == 0 {
            1
        } else {
            self.by.saturating_abs()
        };

        if self.from > self.to {
            // Descending: anchor on the larger endpoint, walk down
            let (low, high) = (self.to, self.from);
            let steps = (high - low) / step;
            self.from = high - steps * step;
            self.to = high;
        } else {
            let steps = (self.to - self.from) / step;
            self.to = self.from + steps * step;
        }

        // A step wider than the span leaves a single value
        self.by = step.min(self.to - self.from).max(1);

        debug_assert!(self.from >= 1, "range = {self:?}");
        debug_assert!(self.to >= self.from, "range = {self:?}");
        debug_assert!(self.by >= 1, "range = {self:?}");
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::empty()
    }
}

impl AsRef<[Range]> for Range {
    fn as_ref(&self) -> &[Range] {
        std::slice::from_ref(self)
    }
}

/// Packed form: `from`, `from:to` or `from:to:by`; empty for the empty range
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::to_packed_string(self))
    }
}
