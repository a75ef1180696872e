//! Canonical sets of identifiers
//!
//! A [`RangeSet`] is an ordered list of disjoint [`Range`]s in canonical
//! form: sorted by `from`, no identifier in two ranges, and a run of
//! equally spaced identifiers is packed into one range only when it has at
//! least three members. `{10, 15}` stays as two single values, `{10, 15, 20}`
//! becomes `10:20:5`.
//!
//! Every mutation expands the current ranges and the operand to plain
//! identifiers, combines them, and collapses the result again. Cost is
//! proportional to the number of identifiers, not the number of ranges.

use crate::parser;
use crate::range::{Identifier, Range};
use serde::Serialize;
use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

/// Set operation applied by [`RangeSet::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetOp {
    Union,
    Difference,
}

impl RangeSet {
    pub fn new() -> Self {
        RangeSet { ranges: Vec::new() }
    }

    /// The canonical ranges, ascending
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn into_ranges(self) -> Vec<Range> {
        self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of unique identifiers
    pub fn count(&self) -> u64 {
        self.ranges.iter().map(Range::count).sum()
    }

    /// Number of canonical ranges
    ///
    /// ```text
    /// // ranges = { "1:5", "8", "9" }
    /// count()        == 7
    /// count_ranges() == 3
    /// ```
    pub fn count_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// Add identifiers. Accepts a `Range`, a `&RangeSet`, or a list of ranges.
    pub fn add<R: AsRef<[Range]>>(&mut self, ranges: R) {
        self.apply(SetOp::Union, ranges.as_ref());
    }

    /// Remove identifiers. Accepts the same operands as [`RangeSet::add`].
    pub fn remove<R: AsRef<[Range]>>(&mut self, ranges: R) {
        self.apply(SetOp::Difference, ranges.as_ref());
    }

    /// Parse `text` and add whatever identifiers it names
    pub fn add_text(&mut self, text: &str) {
        self.add(parser::parse_ranges(text));
    }

    /// Parse `text` and remove whatever identifiers it names
    pub fn remove_text(&mut self, text: &str) {
        self.remove(parser::parse_ranges(text));
    }

    pub fn contains(&self, id: Identifier) -> bool {
        self.ranges.iter().any(|range| range.contains(id))
    }

    // Single seam for set algebra. Operating on ranges directly, without
    // expanding, would replace the body of this function only.
    fn apply(&mut self, op: SetOp, operand: &[Range]) {
        if operand.is_empty() {
            return;
        }

        let mut identifiers = expand(&self.ranges);
        let other = expand(operand);
        match op {
            SetOp::Union => identifiers.extend(other),
            SetOp::Difference => identifiers.retain(|id| !other.contains(id)),
        }

        self.ranges = collapse(identifiers);
        tracing::trace!(
            ?op,
            ranges = self.ranges.len(),
            identifiers = self.count(),
            "range set recompacted"
        );
    }
}

/// Expand ranges into the unordered set of their identifiers
///
/// `{"5" "10:12" "20" "25"}` gives `{5, 10, 11, 12, 20, 25}`.
pub(crate) fn expand(ranges: &[Range]) -> HashSet<Identifier> {
    ranges.iter().flat_map(Range::iter).collect()
}

/// Collapse identifiers into canonical ranges
///
/// `{5, 10, 11, 12, 20, 25}` gives `{"5" "10:12" "20" "25"}`. Runs are only
/// packed from three equally spaced values up; the scan is greedy from the
/// left and a run keeps the step fixed by its first three values.
pub(crate) fn collapse<I>(identifiers: I) -> Vec<Range>
where
    I: IntoIterator<Item = Identifier>,
{
    let mut sorted: Vec<Identifier> = identifiers.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let count = sorted.len();
    let mut result = Vec::new();
    // (start, end, step) of the run being extended
    let mut run: Option<(Identifier, Identifier, i64)> = None;
    let mut i = 0;

    while i < count {
        let value = sorted[i];

        if i + 2 < count {
            let delta_1 = sorted[i + 1] - value;
            let delta_2 = sorted[i + 2] - sorted[i + 1];
            if delta_1 == delta_2 {
                let start = run.map_or(value, |(start, _, _)| start);
                run = Some((start, sorted[i + 2], delta_2));
                i += 1;
                continue;
            }
        }

        match run.take() {
            Some((start, end, step)) => {
                result.push(Range::new(start, end, step));
                // `value` and its successor already belong to the run
                i += 2;
            }
            None => {
                result.push(Range::single(value));
                i += 1;
            }
        }
    }

    result
}

impl AsRef<[Range]> for RangeSet {
    fn as_ref(&self) -> &[Range] {
        &self.ranges
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl FromIterator<Range> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
        let ranges: Vec<Range> = iter.into_iter().collect();
        let mut set = RangeSet::new();
        set.add(ranges);
        set
    }
}

impl Extend<Range> for RangeSet {
    fn extend<T: IntoIterator<Item = Range>>(&mut self, iter: T) {
        let ranges: Vec<Range> = iter.into_iter().collect();
        self.add(ranges);
    }
}

/// Parsing never fails; unrecognized text is dropped
impl FromStr for RangeSet {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(parser::parse(text))
    }
}
