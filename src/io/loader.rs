//! Loads input files as documents, applying the configured encoding.
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::core::document::Document;
use crate::error::{Error, Result};
use crate::io::encoding::decode;

/// Load a file as a document named after its file name. A missing or
/// unreadable file is fatal to the caller.
pub fn load_document(path: &Path, encoding: &'static Encoding) -> Result<Document> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes, encoding);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidInputPath {
            path: path.display().to_string(),
        })?;
    debug!(
        "loaded `{}` ({} bytes, {})",
        name,
        bytes.len(),
        encoding.name()
    );
    Ok(Document::new(name, text))
}
