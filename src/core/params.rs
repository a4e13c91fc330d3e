use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Run parameters suitable for config files and embedding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParams {
    /// Character encoding label for inputs and outputs; `None` means the
    /// platform default encoding.
    pub encoding: Option<String>,
    /// Annotation kinds to export as inline-tagged XML, read from the
    /// default set only; `None` means full standoff XML of every set.
    /// A set, so repeated kinds have no additional effect.
    pub annotation_kinds: Option<BTreeSet<String>>,
}

impl RunParams {
    pub fn with_kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            encoding: None,
            annotation_kinds: Some(kinds.into_iter().map(Into::into).collect()),
        }
    }
}
