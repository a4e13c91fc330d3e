//! Core engine building blocks: the annotation model, documents, the reusable
//! corpus container, pipeline loading/execution, and the built-in analyzer
//! steps. These are the primitives consumed by the high-level `api` module
//! and the CLI.
pub mod annotation;
pub mod corpus;
pub mod document;
pub mod params;
pub mod pipeline;
pub mod registry;
pub mod steps;

pub use annotation::{Annotation, AnnotationSet, Features};
pub use corpus::Corpus;
pub use document::Document;
pub use pipeline::{Pipeline, PipelineError};
pub use registry::init;
