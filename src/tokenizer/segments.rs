//! Segmentation of raw input
//!
//! Separators are space, comma, period, semicolon, apostrophe, double
//! quote, tab, CR and LF. Everything between separators is one segment;
//! runs of separators never produce empty segments.

use logos::Logos;
use std::borrow::Cow;

/// Line continuation written by Patran when it wraps a quoted string
/// in a session file: `"Node 681" // @\n"350:681400"`
const PATRAN_CONTINUATION: &str = "\" // @\n\"";

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r#"[ ,.;'"\t\r\n]+"#)]
enum Segment {
    #[regex(r#"[^ ,.;'"\t\r\n]+"#)]
    Text,
}

/// Remove Patran line continuations so wrapped content reads as one stream
///
/// `[ "Node 681" // @\n"350:681400" ]` becomes `[ "Node 681350:681400" ]`
pub fn depatranize(text: &str) -> Cow<'_, str> {
    if text.contains(PATRAN_CONTINUATION) {
        Cow::Owned(text.replace(PATRAN_CONTINUATION, ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Iterate over the non-empty segments of `source`
pub fn segments(source: &str) -> impl Iterator<Item = &str> + '_ {
    let mut lexer = Segment::lexer(source);
    std::iter::from_fn(move || loop {
        match lexer.next()? {
            Ok(Segment::Text) => return Some(lexer.slice()),
            // Both character classes are complementary, so logos has
            // nothing left to reject.
            Err(()) => continue,
        }
    })
}
