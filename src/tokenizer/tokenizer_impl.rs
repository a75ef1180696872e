//! Segment classification
//!
//! Each segment is tried, in order, as:
//! 1. a keyword (`THRU`, `BY`, `STEP`, `EXCEPT`), case-insensitive
//! 2. a colon range `from[:to[:by]]`
//! 3. a dash range `from-to`
//! 4. a bare negative integer
//!
//! and becomes [`Token::Unknown`] otherwise.

use crate::tokenizer::segments::{depatranize, segments};
use crate::tokenizer::tokens::Token;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COLON_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<from>[0-9]+)(:(?P<to>[0-9]+)(:(?P<by>[+-]?[0-9]+))?)?$").unwrap()
});

static DASH_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<from>[0-9]+)-(?P<to>[0-9]+)$").unwrap());

static NEGATIVE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[0-9]+$").unwrap());

/// Tokenize a whole input text
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    let source = depatranize(text);
    segments(&source).flat_map(classify).collect()
}

/// Classify a single segment into the tokens it stands for
///
/// A digit run too large for `i64` makes the whole segment unknown.
pub fn classify(segment: &str) -> Vec<Token> {
    if let Some(keyword) = Token::keyword(segment) {
        return vec![keyword];
    }

    let classified = if let Some(caps) = COLON_RANGE.captures(segment) {
        colon_range(&caps)
    } else if let Some(caps) = DASH_RANGE.captures(segment) {
        dash_range(&caps)
    } else if NEGATIVE_NUMBER.is_match(segment) {
        segment.parse().ok().map(|value| vec![Token::Number(value)])
    } else {
        None
    };

    classified.unwrap_or_else(|| {
        tracing::trace!(segment, "unrecognized segment");
        vec![Token::Unknown]
    })
}

/// `from[:to[:by]]`. A zero `to` or `by` reads as absent.
fn colon_range(caps: &Captures<'_>) -> Option<Vec<Token>> {
    let from = caps["from"].parse().ok()?;
    let to = optional_component(caps, "to")?;
    let by = optional_component(caps, "by")?;

    let mut tokens = vec![Token::Number(from)];
    if to != 0 {
        tokens.extend([Token::Thru, Token::Number(to)]);
    }
    if by != 0 {
        tokens.extend([Token::Step, Token::Number(by)]);
    }
    Some(tokens)
}

fn dash_range(caps: &Captures<'_>) -> Option<Vec<Token>> {
    let from = caps["from"].parse().ok()?;
    let to = caps["to"].parse().ok()?;
    Some(vec![Token::Number(from), Token::Thru, Token::Number(to)])
}

fn optional_component(caps: &Captures<'_>, name: &str) -> Option<i64> {
    match caps.name(name) {
        Some(found) => found.as_str().parse().ok(),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \r\n\t").is_empty());
    }

    #[test]
    fn test_single_number() {
        assert_eq!(tokenize("10"), vec![Number(10)]);
    }

    #[test]
    fn test_nastran_keywords() {
        assert_eq!(
            tokenize("41 thru 50 By 3"),
            vec![Number(41), Thru, Number(50), Step, Number(3)]
        );
        assert_eq!(
            tokenize("41\tTHRU\t50\tSTEP\t3"),
            vec![Number(41), Thru, Number(50), Step, Number(3)]
        );
    }

    #[test]
    fn test_glued_keywords_are_unknown() {
        assert_eq!(tokenize("5THRU9"), vec![Unknown]);
        assert_eq!(tokenize("41THRU50BY3"), vec![Unknown]);
    }

    #[test]
    fn test_except_is_tokenized() {
        assert_eq!(
            tokenize("15 THRU 100 EXCEPT 21"),
            vec![Number(15), Thru, Number(100), Except, Number(21)]
        );
    }

    #[test]
    fn test_colon_range() {
        assert_eq!(classify("10:20"), vec![Number(10), Thru, Number(20)]);
        assert_eq!(
            classify("115:131:8"),
            vec![Number(115), Thru, Number(131), Step, Number(8)]
        );
        assert_eq!(
            classify("131:115:-8"),
            vec![Number(131), Thru, Number(115), Step, Number(-8)]
        );
        assert_eq!(
            classify("15:20:+2"),
            vec![Number(15), Thru, Number(20), Step, Number(2)]
        );
    }

    #[test]
    fn test_colon_range_zero_components_are_absent() {
        assert_eq!(classify("15:20:0"), vec![Number(15), Thru, Number(20)]);
        assert_eq!(classify("15:0"), vec![Number(15)]);
        assert_eq!(classify("15:0:3"), vec![Number(15), Step, Number(3)]);
    }

    #[test]
    fn test_malformed_colon_ranges() {
        for segment in [":", "15:", ":20", "::1", "15:20:1:0", "15:+20", "15:-20", "-15:20"] {
            assert_eq!(classify(segment), vec![Unknown], "segment {segment:?}");
        }
    }

    #[test]
    fn test_dash_range() {
        assert_eq!(classify("15-20"), vec![Number(15), Thru, Number(20)]);
        assert_eq!(classify("20-15"), vec![Number(20), Thru, Number(15)]);
    }

    #[test]
    fn test_malformed_dash_ranges() {
        for segment in ["-15-20", "15-19-2", "15--20", "15-", "-"] {
            assert_eq!(classify(segment), vec![Unknown], "segment {segment:?}");
        }
    }

    #[test]
    fn test_negative_number_stays_negative() {
        assert_eq!(classify("-15"), vec![Number(-15)]);
        assert_eq!(classify("-0"), vec![Number(0)]);
        assert_eq!(classify("+10"), vec![Unknown]);
    }

    #[test]
    fn test_alphanumeric_is_unknown() {
        for segment in ["abcd", "100a", "10e2", "texte123!?>|", "SET", "="] {
            assert_eq!(classify(segment), vec![Unknown], "segment {segment:?}");
        }
    }

    #[test]
    fn test_overflow_is_unknown() {
        assert_eq!(classify("99999999999999999999"), vec![Unknown]);
        assert_eq!(classify("1:99999999999999999999"), vec![Unknown]);
        assert_eq!(classify("-99999999999999999999"), vec![Unknown]);
    }

    #[test]
    fn test_non_ascii_digits_are_unknown() {
        assert_eq!(classify("١٢٣"), vec![Unknown]);
    }

    #[test]
    fn test_decimal_separators_split_numbers() {
        assert_eq!(tokenize("1.201"), vec![Number(1), Number(201)]);
        assert_eq!(tokenize("1,201"), vec![Number(1), Number(201)]);
    }

    #[test]
    fn test_patran_continuation_is_joined() {
        let text = "\" Node 681\" // @\n\"350:681400 \"";
        assert_eq!(tokenize(text), vec![Unknown, Number(681350), Thru, Number(681400)]);
    }
}
