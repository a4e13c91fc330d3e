//! Word/number/punctuation tokenizer. Produces `Token` annotations in the
//! default set (and optionally `SpaceToken`s for whitespace runs), with
//! `kind`, `string`, and `length` features, the way the original engine's
//! stock tokenizer does.
use serde::Deserialize;
use serde_json::Value;

use crate::core::annotation::Features;
use crate::core::document::Document;
use crate::core::pipeline::PipelineError;
use crate::core::steps::Analyzer;
use crate::types::{SPACE_TOKEN_KIND, TOKEN_KIND, TokenKind};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct TokenizerConfig {
    /// Also emit `SpaceToken` annotations over whitespace runs.
    space_tokens: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { space_tokens: true }
    }
}

pub fn factory(params: &Value) -> Result<Box<dyn Analyzer>, PipelineError> {
    let config: TokenizerConfig = serde_json::from_value(params.clone())?;
    Ok(Box::new(Tokenizer { config }))
}

struct Tokenizer {
    config: TokenizerConfig,
}

fn classify(c: char) -> TokenKind {
    if c.is_alphabetic() {
        TokenKind::Word
    } else if c.is_numeric() {
        TokenKind::Number
    } else if c.is_whitespace() {
        TokenKind::Space
    } else {
        TokenKind::Punctuation
    }
}

impl Tokenizer {
    fn emit(&self, document: &mut Document, start: usize, end: usize, kind: TokenKind) {
        if kind == TokenKind::Space && !self.config.space_tokens {
            return;
        }
        let string = document.text()[start..end].to_string();
        let mut features = Features::new();
        features.insert("kind".to_string(), kind.as_str().to_string());
        features.insert("length".to_string(), string.chars().count().to_string());
        features.insert("string".to_string(), string);
        let annotation_kind = if kind == TokenKind::Space {
            SPACE_TOKEN_KIND
        } else {
            TOKEN_KIND
        };
        document.annotate(None, annotation_kind, start..end, features);
    }
}

impl Analyzer for Tokenizer {
    fn name(&self) -> &str {
        "tokenizer"
    }

    fn run(&self, document: &mut Document) -> Result<(), PipelineError> {
        let mut run: Option<(usize, TokenKind)> = None;
        // Spans of the pending run are collected first; annotating borrows
        // the document mutably.
        let mut spans: Vec<(usize, usize, TokenKind)> = Vec::new();
        for (offset, c) in document.text().char_indices() {
            let kind = classify(c);
            match run {
                // Word, number, and space runs coalesce; punctuation is one
                // token per char.
                Some((_, prev)) if prev == kind && prev != TokenKind::Punctuation => {}
                Some((start, prev)) => {
                    spans.push((start, offset, prev));
                    run = Some((offset, kind));
                }
                None => run = Some((offset, kind)),
            }
        }
        if let Some((start, kind)) = run {
            spans.push((start, document.text().len(), kind));
        }
        for (start, end, kind) in spans {
            self.emit(document, start, end, kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::annotation::Annotation;

    fn tokenizer(space_tokens: bool) -> Tokenizer {
        Tokenizer {
            config: TokenizerConfig { space_tokens },
        }
    }

    #[test]
    fn classifies_words_numbers_and_punctuation() {
        let mut doc = Document::new("d", "Call me at 42, ok?");
        tokenizer(false).run(&mut doc).unwrap();

        let tokens: Vec<(&str, &str)> = doc
            .annotations()
            .by_kind(TOKEN_KIND)
            .map(|a| (&doc.text()[a.start..a.end], a.features["kind"].as_str()))
            .collect();
        assert_eq!(
            tokens,
            vec![
                ("Call", "word"),
                ("me", "word"),
                ("at", "word"),
                ("42", "number"),
                (",", "punctuation"),
                ("ok", "word"),
                ("?", "punctuation"),
            ]
        );
        assert_eq!(doc.annotations().by_kind(SPACE_TOKEN_KIND).count(), 0);
    }

    #[test]
    fn space_tokens_cover_whitespace_runs() {
        let mut doc = Document::new("d", "a  b");
        tokenizer(true).run(&mut doc).unwrap();
        let spaces: Vec<&Annotation> = doc
            .annotations()
            .by_kind(SPACE_TOKEN_KIND)
            .collect();
        assert_eq!(spaces.len(), 1);
        assert_eq!((spaces[0].start, spaces[0].end), (1, 3));
    }

    #[test]
    fn offsets_fall_on_char_boundaries() {
        let mut doc = Document::new("d", "naïve café 7");
        tokenizer(false).run(&mut doc).unwrap();
        for a in doc.annotations().iter() {
            assert!(doc.text().is_char_boundary(a.start));
            assert!(doc.text().is_char_boundary(a.end));
        }
        let words: Vec<&str> = doc
            .annotations()
            .by_kind(TOKEN_KIND)
            .map(|a| &doc.text()[a.start..a.end])
            .collect();
        assert_eq!(words, vec!["naïve", "café", "7"]);
    }
}
