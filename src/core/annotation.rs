//! Annotation model: labeled spans with feature maps, grouped into
//! annotation sets. Offsets are byte offsets into the owning document's text
//! and always fall on char boundaries.
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Feature map attached to an annotation. BTreeMap keeps serialization
/// deterministic.
pub type Features = BTreeMap<String, String>;

/// A labeled span attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Document-wide id, unique across all sets of one document.
    pub id: u32,
    /// Annotation kind ("Token", "Sentence", "Person", ...).
    pub kind: String,
    /// Start byte offset into the document text.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    pub features: Features,
}

impl Annotation {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An ordered collection of annotations. Iteration order is insertion order,
/// which equals id order for sets populated through `Document::annotate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// All annotations of one kind, in insertion order. A kind that never
    /// occurs yields an empty iterator, not an error.
    pub fn by_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Annotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }

    /// The distinct annotation kinds present in this set.
    pub fn kinds(&self) -> BTreeSet<&str> {
        self.annotations.iter().map(|a| a.kind.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(id: u32, kind: &str, start: usize, end: usize) -> Annotation {
        Annotation {
            id,
            kind: kind.to_string(),
            start,
            end,
            features: Features::new(),
        }
    }

    #[test]
    fn by_kind_filters_and_preserves_order() {
        let mut set = AnnotationSet::new();
        set.push(ann(0, "Token", 0, 3));
        set.push(ann(1, "Sentence", 0, 10));
        set.push(ann(2, "Token", 4, 7));

        let tokens: Vec<u32> = set.by_kind("Token").map(|a| a.id).collect();
        assert_eq!(tokens, vec![0, 2]);
        assert_eq!(set.by_kind("Person").count(), 0);
    }

    #[test]
    fn kinds_are_distinct() {
        let mut set = AnnotationSet::new();
        set.push(ann(0, "Token", 0, 3));
        set.push(ann(1, "Token", 4, 7));
        set.push(ann(2, "Sentence", 0, 7));

        let kinds: Vec<&str> = set.kinds().into_iter().collect();
        assert_eq!(kinds, vec!["Sentence", "Token"]);
    }
}
