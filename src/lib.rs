#![doc = r##"
ANNOBATCH — batch-run saved NLP annotation pipelines over text files.

This crate loads a pipeline definition saved as JSON (a `.gapp` file: an
ordered list of analyzer steps such as a tokenizer, sentence splitter, and
pattern taggers), runs it over documents, and serializes the results to XML:
either full standoff XML preserving every annotation set, or inline-tagged
XML restricted to chosen annotation kinds. It powers the `annobatch` CLI and
can be embedded in your own Rust applications.

Quick start: process files the way the CLI does
-----------------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use annobatch::{RunParams, api};

fn main() -> annobatch::Result<()> {
    let params = RunParams {
        encoding: None, // platform default
        annotation_kinds: None, // full standoff XML
    };
    let report = api::process_files(
        Path::new("pipelines/annie-lite.gapp"),
        &[PathBuf::from("docs/letter.txt")],
        &params,
        false, // abort on first error
    )?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Annotate in-memory text
-----------------------
```rust,no_run
use annobatch::{Pipeline, api};

fn main() -> annobatch::Result<()> {
    annobatch::init()?;
    let pipeline = Pipeline::from_json(
        r#"{"name": "tokens", "steps": [{"kind": "tokenizer"}]}"#,
    )?;
    let doc = api::annotate_text(&pipeline, "snippet", "Some text.")?;
    for token in doc.annotations().by_kind("Token") {
        println!("{:?} {:?}", &doc.text()[token.start..token.end], token.features);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. pipeline or encoding errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — annotation model, corpus, pipeline, and analyzer steps.
- [`io`] — encodings, document loading, and the XML writers.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::RunParams;
pub use core::{Annotation, AnnotationSet, Corpus, Document, Features, Pipeline, PipelineError};
pub use error::{Error, Result};
pub use types::TokenKind;

// Engine startup
pub use core::registry::{init, is_initialized};

// High-level API re-exports
pub use api::{
    BatchReport, annotate_text, output_path_for, process_file, process_files, serialize_document,
};
