//! I/O layer: charset resolution and decoding (`encoding`), document loading
//! (`loader`), and the XML `writers` for standoff and inline-tagged output.
pub mod encoding;
pub mod loader;
pub mod writers;

pub use encoding::{default_encoding, resolve_encoding};
pub use loader::load_document;
