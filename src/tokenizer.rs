//! Tokenizer for pasted identifier lists
//!
//! This module turns raw text from any supported CAE dialect into a flat
//! stream of [`Token`]s. It knows nothing about grammar: deciding what a
//! `THRU` binds to, or which numbers survive, is the parser's job.
//!
//! Tokenizing happens in two passes:
//! 1. [`segments`] splits the (depatranized) text on separator characters
//! 2. [`classify`] maps each segment to zero or more tokens

pub mod segments;
pub mod tokenizer_impl;
pub mod tokens;

pub use segments::{depatranize, segments};
pub use tokenizer_impl::{classify, tokenize};
pub use tokens::Token;
