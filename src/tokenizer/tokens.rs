//! Token definitions for identifier lists

use std::fmt;

/// A classified piece of input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// An integer literal. Negative values survive tokenization; the parser
    /// drops them as standalone values.
    Number(i64),

    /// `THRU`, or the separator inside `a:b` and `a-b`
    Thru,

    /// `BY` or `STEP`
    Step,

    /// `EXCEPT`. Recognized so it does not read as a number filler, but
    /// never acted upon.
    Except,

    /// Any segment the grammar does not know
    Unknown,

    /// Synthetic end-of-input marker. Never produced by the tokenizer; the
    /// parser materializes it when looking past the last real token.
    StreamEnd,
}

impl Token {
    /// Match a whole segment against the keyword table, ignoring case
    pub fn keyword(segment: &str) -> Option<Token> {
        const KEYWORDS: [(&str, Token); 4] = [
            ("THRU", Token::Thru),
            ("BY", Token::Step),
            ("STEP", Token::Step),
            ("EXCEPT", Token::Except),
        ];

        KEYWORDS
            .iter()
            .find(|(text, _)| segment.eq_ignore_ascii_case(text))
            .map(|(_, token)| *token)
    }

    /// The numeric payload, if this is a number
    pub fn value(&self) -> Option<i64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Thru | Token::Step | Token::Except)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Thru => write!(f, "THRU"),
            Token::Step => write!(f, "STEP"),
            Token::Except => write!(f, "EXCEPT"),
            Token::Unknown => write!(f, "<unknown>"),
            Token::StreamEnd => write!(f, "<end>"),
        }
    }
}
