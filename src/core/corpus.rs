//! Reusable processing container. A pipeline runs over whatever documents
//! the corpus currently holds; the batch loop constructs one corpus for the
//! whole run and drains it between files so at most one document is resident
//! at a time.
use crate::core::document::Document;

#[derive(Debug, Default)]
pub struct Corpus {
    name: String,
    documents: Vec<Document>,
}

impl Corpus {
    /// The name is only a label for logging, like the engine-internal corpus
    /// name in the original tooling.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Remove and return every document, leaving the corpus empty and ready
    /// for reuse. The explicit clear step of the batch loop.
    pub fn drain(&mut self) -> Vec<Document> {
        std::mem::take(&mut self.documents)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Document> {
        self.documents.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_corpus() {
        let mut corpus = Corpus::new("test corpus");
        corpus.add(Document::new("a", "one"));
        corpus.add(Document::new("b", "two"));
        assert_eq!(corpus.len(), 2);

        let docs = corpus.drain();
        assert_eq!(docs.len(), 2);
        assert!(corpus.is_empty());

        // Reusable after draining.
        corpus.add(Document::new("c", "three"));
        assert_eq!(corpus.len(), 1);
    }
}
