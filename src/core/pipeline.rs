//! Saved-pipeline loading and execution.
//!
//! A pipeline definition is a JSON file written by whatever authored the
//! processing sequence: a name plus an ordered list of step definitions,
//! each naming a registered step kind and carrying its parameters. Loading
//! instantiates every step through the registry; execution runs the steps
//! over every document in a corpus, in order, aborting on the first error.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::corpus::Corpus;
use crate::core::registry;
use crate::core::steps::Analyzer;

/// Errors encountered while loading or running a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Pipeline definition parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Engine not initialized; call init() first")]
    EngineNotInitialized,
    #[error("Unknown step kind `{0}`")]
    UnknownStep(String),
    #[error("Invalid pattern in step `{step}`: {source}")]
    Pattern {
        step: String,
        #[source]
        source: regex::Error,
    },
    #[error("Missing parameter `{name}` for step `{step}`")]
    MissingParameter { step: String, name: &'static str },
    #[error("Step `{step}` failed: {message}")]
    Step { step: String, message: String },
}

/// On-disk shape of a saved pipeline.
#[derive(Debug, Serialize, Deserialize)]
struct PipelineFile {
    name: String,
    #[serde(default)]
    steps: Vec<StepDefinition>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StepDefinition {
    kind: String,
    #[serde(flatten)]
    params: Value,
}

/// A runnable processing sequence deserialized from a saved definition.
pub struct Pipeline {
    name: String,
    steps: Vec<Box<dyn Analyzer>>,
}

impl Pipeline {
    /// Load a saved pipeline from disk. Requires prior engine `init`; a
    /// missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let raw = fs::read_to_string(path)?;
        let pipeline = Self::from_json(&raw)?;
        info!("loaded pipeline `{}` from {:?}", pipeline.name, path);
        Ok(pipeline)
    }

    /// Build a pipeline from the JSON text of a saved definition.
    pub fn from_json(raw: &str) -> Result<Self, PipelineError> {
        let file: PipelineFile = serde_json::from_str(raw)?;
        let mut steps = Vec::with_capacity(file.steps.len());
        for definition in &file.steps {
            let factory = registry::factory(&definition.kind)?;
            steps.push(factory(&definition.params)?);
        }
        Ok(Self {
            name: file.name,
            steps,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step over every document currently in the corpus.
    /// Synchronous; the first failing step aborts execution.
    pub fn execute(&self, corpus: &mut Corpus) -> Result<(), PipelineError> {
        for document in corpus.iter_mut() {
            for step in &self.steps {
                debug!("running step `{}` on `{}`", step.name(), document.name());
                step.run(document)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("steps", &self.step_names())
            .finish()
    }
}
