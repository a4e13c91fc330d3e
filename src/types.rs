//! Shared types used across ANNOBATCH.
//! Includes the token classification produced by the built-in tokenizer and
//! the names of the stock annotation kinds.
use serde::{Deserialize, Serialize};

/// Annotation kind produced by the tokenizer for non-whitespace tokens.
pub const TOKEN_KIND: &str = "Token";
/// Annotation kind produced by the tokenizer for whitespace runs.
pub const SPACE_TOKEN_KIND: &str = "SpaceToken";
/// Annotation kind produced by the sentence splitter.
pub const SENTENCE_KIND: &str = "Sentence";
/// Default annotation kind produced by the gazetteer.
pub const LOOKUP_KIND: &str = "Lookup";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Space,
}

impl TokenKind {
    /// Value stored in the `kind` feature of `Token`/`SpaceToken` annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Space => "space",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
