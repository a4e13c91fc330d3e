//! High-level, ergonomic library API: run a loaded pipeline over text or
//! files, batch helpers, serialization per run parameters, and output
//! naming. Prefer these entrypoints over the low-level `core`/`io` modules
//! when embedding ANNOBATCH.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::annotation::Annotation;
use crate::core::corpus::Corpus;
use crate::core::document::Document;
use crate::core::params::RunParams;
use crate::core::pipeline::Pipeline;
use crate::error::{Error, Result};
use crate::io::encoding::{encode, resolve_encoding};
use crate::io::loader::load_document;
use crate::io::writers::{inline, standoff};

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    pub outputs: Vec<PathBuf>,
}

/// Output path for an input file: a sibling named `<file name>.out.xml`.
/// The suffix is appended, never substituted.
pub fn output_path_for(input: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| Error::InvalidInputPath {
        path: input.display().to_string(),
    })?;
    let mut name = name.to_os_string();
    name.push(".out.xml");
    Ok(input.with_file_name(name))
}

/// Run a pipeline over one piece of text using a private single-document
/// corpus, returning the annotated document.
pub fn annotate_text(pipeline: &Pipeline, name: &str, text: &str) -> Result<Document> {
    let mut corpus = Corpus::new("annobatch api corpus");
    corpus.add(Document::new(name, text));
    pipeline.execute(&mut corpus)?;
    corpus.drain().pop().ok_or(Error::EmptyCorpus)
}

/// Serialize a document according to the run parameters: inline-tagged XML
/// restricted to the configured kinds (default set only, union over kinds),
/// or full standoff XML of every set when no kinds are configured.
pub fn serialize_document(document: &Document, params: &RunParams) -> Result<String> {
    match &params.annotation_kinds {
        Some(kinds) => {
            let selected: Vec<&Annotation> = kinds
                .iter()
                .flat_map(|kind| document.annotations().by_kind(kind))
                .collect();
            inline::write_inline(document.text(), &selected)
        }
        None => {
            let encoding = resolve_encoding(params.encoding.as_deref())?;
            standoff::write_xml(document, encoding.name())
        }
    }
}

/// Process one file end to end against a shared corpus: load, add, execute,
/// drain (the corpus is left empty for the next file), serialize, release
/// the document, and write `<input>.out.xml` with the input's encoding.
/// Returns the output path.
pub fn process_file(
    pipeline: &Pipeline,
    corpus: &mut Corpus,
    input: &Path,
    params: &RunParams,
) -> Result<PathBuf> {
    let encoding = resolve_encoding(params.encoding.as_deref())?;
    let document = load_document(input, encoding)?;
    corpus.add(document);
    pipeline.execute(corpus)?;
    let document = corpus.drain().pop().ok_or(Error::EmptyCorpus)?;

    let xml = serialize_document(&document, params)?;
    // The document is no longer needed once serialized.
    drop(document);

    let output = output_path_for(input)?;
    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode(&xml, encoding))?;
    writer.flush()?;
    Ok(output)
}

/// Batch helper: initialize the engine, load the saved pipeline, and process
/// every file in order with one reused corpus. With `continue_on_error` set,
/// per-file failures are counted and logged instead of aborting the run.
pub fn process_files(
    gapp: &Path,
    files: &[PathBuf],
    params: &RunParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    crate::init()?;
    let pipeline = Pipeline::load(gapp)?;
    let mut corpus = Corpus::new("annobatch corpus");
    let mut report = BatchReport::default();

    for input in files {
        match process_file(&pipeline, &mut corpus, input, params) {
            Ok(output) => {
                info!("processed {:?} -> {:?}", input, output);
                report.processed += 1;
                report.outputs.push(output);
            }
            Err(e) if continue_on_error => {
                warn!("error processing {:?}: {}", input, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
