//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Converts underlying I/O, pipeline, and XML errors, and provides
//! semantic variants for encoding and corpus misuse.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::core::PipelineError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Unsupported encoding: {label}")]
    UnsupportedEncoding { label: String },

    #[error("Invalid input path: {path}")]
    InvalidInputPath { path: String },

    #[error("Corpus is empty after execution; expected exactly one document")]
    EmptyCorpus,

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
