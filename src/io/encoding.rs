//! Character encoding support. Inputs are decoded and outputs encoded with
//! the same charset; when none is configured, the platform default derived
//! from the locale environment is used, falling back to UTF-8.
use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// The platform default encoding, read from the codeset suffix of the usual
/// locale variables (`en_US.UTF-8` yields UTF-8). UTF-8 when nothing usable
/// is set.
pub fn default_encoding() -> &'static Encoding {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(codeset) = value.split('.').nth(1) {
                let codeset = codeset.split('@').next().unwrap_or(codeset);
                if let Some(encoding) = Encoding::for_label(codeset.as_bytes()) {
                    return encoding;
                }
            }
        }
    }
    encoding_rs::UTF_8
}

/// Resolve an optional user-supplied encoding label, defaulting to the
/// platform encoding. Unknown labels are fatal.
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        None => Ok(default_encoding()),
        Some(label) => Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            Error::UnsupportedEncoding {
                label: label.to_string(),
            }
        }),
    }
}

/// Decode file bytes. Malformed sequences are replaced, matching the lenient
/// default of the original runtime's decoders; a BOM overrides the
/// configured encoding.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Encode output text with the configured charset.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
