//! Sentence splitter. Emits `Sentence` annotations in the default set, one
//! per terminator-delimited span, with leading whitespace and bare
//! terminator runs skipped.
use serde_json::Value;

use crate::core::annotation::Features;
use crate::core::document::Document;
use crate::core::pipeline::PipelineError;
use crate::core::steps::Analyzer;
use crate::types::SENTENCE_KIND;

pub fn factory(_params: &Value) -> Result<Box<dyn Analyzer>, PipelineError> {
    Ok(Box::new(SentenceSplitter))
}

struct SentenceSplitter;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

impl Analyzer for SentenceSplitter {
    fn name(&self) -> &str {
        "sentence-splitter"
    }

    fn run(&self, document: &mut Document) -> Result<(), PipelineError> {
        let text = document.text();
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut start: Option<usize> = None;
        let mut last_content_end = 0;

        for (offset, c) in text.char_indices() {
            if start.is_none() {
                if c.is_whitespace() || is_terminator(c) {
                    continue;
                }
                start = Some(offset);
            }
            if !c.is_whitespace() {
                last_content_end = offset + c.len_utf8();
            }
            if is_terminator(c) {
                if let Some(s) = start.take() {
                    spans.push((s, offset + c.len_utf8()));
                }
            }
        }
        // Unterminated trailing sentence ends at its last non-whitespace char.
        if let Some(s) = start {
            if last_content_end > s {
                spans.push((s, last_content_end));
            }
        }

        for (s, e) in spans {
            document.annotate(None, SENTENCE_KIND, s..e, Features::new());
        }
        Ok(())
    }
}
