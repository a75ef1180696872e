//! Range grammar over the token stream
//!
//! The parser does a single forward scan with one token of lookahead:
//!
//! - next is a number, unknown, or end of input: the current token is a
//!   standalone value, kept only if it is a positive number
//! - next is `THRU`: the current token starts `from THRU to [STEP by]`
//!
//! Nothing is ever reported. Garbage is dropped, and the caller gets
//! whatever identifiers could be extracted. Deduplication and compaction
//! are left to [`RangeSet::add`].

use crate::range::Range;
use crate::range_set::RangeSet;
use crate::tokenizer::{tokenize, Token};

/// Parse raw text into a canonical set
pub fn parse(text: &str) -> RangeSet {
    let mut set = RangeSet::new();
    set.add(parse_ranges(text));
    set
}

/// Parse raw text into the ranges it names, in input order
///
/// The result may overlap and is not sorted.
pub fn parse_ranges(text: &str) -> Vec<Range> {
    let tokens = tokenize(text);
    let mut cursor = Cursor::new(&tokens);
    let mut ranges = Vec::new();

    while let Some(current) = cursor.current() {
        match cursor.peek() {
            Token::Number(_) | Token::Unknown | Token::StreamEnd => {
                match current {
                    Token::Number(value) if value > 0 => ranges.push(Range::single(value)),
                    other => tracing::debug!(token = %other, "dropping standalone token"),
                }
                cursor.advance(1);
            }
            Token::Thru => {
                let from = current.value().unwrap_or(0);
                let (to, by) = cursor.read_thru();
                if is_consistent(from, to, by) {
                    let range = Range::new(from, to, by);
                    if !range.is_empty() {
                        ranges.push(range);
                    }
                } else {
                    tracing::debug!(
                        from,
                        to,
                        by,
                        "dropping range whose step disagrees with its direction"
                    );
                }
                cursor.advance(1);
            }
            next @ (Token::Step | Token::Except) => {
                // `5 STEP 3`, `10 EXCEPT 4`: the keyword has nothing to bind to
                tracing::debug!(
                    token = %current,
                    next = %next,
                    "dropping token before dangling keyword"
                );
                cursor.advance(1);
            }
        }
    }

    ranges
}

/// A candidate is kept only when its endpoints agree with the sign of its step
fn is_consistent(from: i64, to: i64, by: i64) -> bool {
    (by >= 0 && to >= from) || (by < 0 && from >= to)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Cursor {
            tokens,
            position: 0,
        }
    }

    fn current(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn peek(&self) -> Token {
        self.tokens
            .get(self.position + 1)
            .copied()
            .unwrap_or(Token::StreamEnd)
    }

    fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    /// From `from` with `THRU` next: read `to` and an optional `STEP by`.
    /// Leaves the cursor on the last token consumed; missing or non-number
    /// operands read as zero.
    fn read_thru(&mut self) -> (i64, i64) {
        self.advance(2);
        let Some(end) = self.current() else {
            return (0, 0);
        };
        let to = end.value().unwrap_or(0);

        let mut by = 0;
        if self.peek() == Token::Step {
            self.advance(2);
            by = self.current().and_then(|token| token.value()).unwrap_or(0);
        }
        (to, by)
    }
}
