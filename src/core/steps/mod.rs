//! Built-in analyzer steps: tokenizer, sentence splitter, and the
//! regex/gazetteer taggers. Each module exposes a factory registered under
//! its step kind by `registry::init`.
pub mod splitter;
pub mod tagger;
pub mod tokenizer;

use crate::core::document::Document;
use crate::core::pipeline::PipelineError;

/// A single processing step of a pipeline. Steps mutate the document's
/// annotation sets and must be safe to run on many documents in sequence.
pub trait Analyzer: Send + Sync {
    /// The registered step kind this analyzer was built from.
    fn name(&self) -> &str;

    fn run(&self, document: &mut Document) -> Result<(), PipelineError>;
}
