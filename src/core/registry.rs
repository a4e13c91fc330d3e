//! Process-wide engine startup and the analyzer step registry.
//!
//! `init` must run before any pipeline is loaded; it registers the factories
//! that turn saved step definitions into runnable analyzers. Initialization
//! is idempotent, so embedders and tests may call it freely.
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::core::pipeline::PipelineError;
use crate::core::steps::{self, Analyzer};

/// Builds one analyzer from the parameter object of a saved step definition.
pub type StepFactory = fn(&serde_json::Value) -> Result<Box<dyn Analyzer>, PipelineError>;

static REGISTRY: OnceLock<HashMap<&'static str, StepFactory>> = OnceLock::new();

/// One-time engine initialization. Registers the built-in analyzer
/// factories. Safe to call more than once; later calls are no-ops.
pub fn init() -> crate::Result<()> {
    let registry = REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, StepFactory> = HashMap::new();
        map.insert("tokenizer", steps::tokenizer::factory);
        map.insert("sentence-splitter", steps::splitter::factory);
        map.insert("regex-tagger", steps::tagger::regex_factory);
        map.insert("gazetteer", steps::tagger::gazetteer_factory);
        map
    });
    debug!("engine initialized with {} step kinds", registry.len());
    Ok(())
}

pub fn is_initialized() -> bool {
    REGISTRY.get().is_some()
}

/// Look up the factory for a step kind. Errors if `init` has not run or the
/// kind is unknown.
pub(crate) fn factory(kind: &str) -> Result<StepFactory, PipelineError> {
    let registry = REGISTRY.get().ok_or(PipelineError::EngineNotInitialized)?;
    registry
        .get(kind)
        .copied()
        .ok_or_else(|| PipelineError::UnknownStep(kind.to_string()))
}
