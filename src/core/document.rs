//! In-memory document: source text plus the annotations attached to it
//! during processing. Annotations live in one default (unnamed) set and any
//! number of named sets; ids are allocated document-wide.
use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::annotation::{Annotation, AnnotationSet, Features};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    text: String,
    default_set: AnnotationSet,
    named_sets: BTreeMap<String, AnnotationSet>,
    next_id: u32,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The default (unnamed) annotation set. This is the set the CLI export
    /// filter reads from.
    pub fn annotations(&self) -> &AnnotationSet {
        &self.default_set
    }

    /// A named annotation set, if present.
    pub fn named_annotations(&self, name: &str) -> Option<&AnnotationSet> {
        self.named_sets.get(name)
    }

    /// Named sets in deterministic (sorted) order.
    pub fn named_sets(&self) -> impl Iterator<Item = (&str, &AnnotationSet)> {
        self.named_sets.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Attach an annotation to the default set (`set = None`) or a named set,
    /// allocating the next document-wide id. Returns the new id.
    pub fn annotate(
        &mut self,
        set: Option<&str>,
        kind: impl Into<String>,
        span: Range<usize>,
        features: Features,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let annotation = Annotation {
            id,
            kind: kind.into(),
            start: span.start,
            end: span.end,
            features,
        };
        self.set_mut(set).push(annotation);
        id
    }

    /// Insert an annotation with a caller-chosen id, keeping the id counter
    /// ahead of it. Used when rebuilding a document from its XML form.
    pub fn insert_annotation(&mut self, set: Option<&str>, annotation: Annotation) {
        self.next_id = self.next_id.max(annotation.id + 1);
        self.set_mut(set).push(annotation);
    }

    fn set_mut(&mut self, set: Option<&str>) -> &mut AnnotationSet {
        match set {
            None => &mut self.default_set,
            Some(name) => self.named_sets.entry(name.to_string()).or_default(),
        }
    }

    /// Total annotation count across all sets.
    pub fn annotation_count(&self) -> usize {
        self.default_set.len() + self.named_sets.values().map(AnnotationSet::len).sum::<usize>()
    }
}
