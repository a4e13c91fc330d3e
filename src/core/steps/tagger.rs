//! Pattern-driven taggers: a regex tagger producing one configurable
//! annotation kind per match, and a gazetteer matching a phrase list on word
//! boundaries, carrying per-entry features.
use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_json::Value;

use crate::core::annotation::Features;
use crate::core::document::Document;
use crate::core::pipeline::PipelineError;
use crate::core::steps::Analyzer;
use crate::types::LOOKUP_KIND;

#[derive(Debug, Deserialize)]
struct RegexTaggerConfig {
    /// Annotation kind to create for each match.
    annotation: Option<String>,
    pattern: Option<String>,
    #[serde(default)]
    features: Features,
}

pub fn regex_factory(params: &Value) -> Result<Box<dyn Analyzer>, PipelineError> {
    let config: RegexTaggerConfig = serde_json::from_value(params.clone())?;
    let annotation = config.annotation.ok_or(PipelineError::MissingParameter {
        step: "regex-tagger".to_string(),
        name: "annotation",
    })?;
    let pattern = config.pattern.ok_or(PipelineError::MissingParameter {
        step: "regex-tagger".to_string(),
        name: "pattern",
    })?;
    let regex = Regex::new(&pattern).map_err(|source| PipelineError::Pattern {
        step: "regex-tagger".to_string(),
        source,
    })?;
    Ok(Box::new(RegexTagger {
        annotation,
        regex,
        features: config.features,
    }))
}

struct RegexTagger {
    annotation: String,
    regex: Regex,
    features: Features,
}

impl Analyzer for RegexTagger {
    fn name(&self) -> &str {
        "regex-tagger"
    }

    fn run(&self, document: &mut Document) -> Result<(), PipelineError> {
        let matches: Vec<(usize, usize, String)> = self
            .regex
            .find_iter(document.text())
            .map(|m| (m.start(), m.end(), m.as_str().to_string()))
            .collect();
        for (start, end, string) in matches {
            let mut features = self.features.clone();
            features.insert("string".to_string(), string);
            document.annotate(None, self.annotation.clone(), start..end, features);
        }
        Ok(())
    }
}

fn default_lookup_kind() -> String {
    LOOKUP_KIND.to_string()
}

fn default_case_sensitive() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct GazetteerConfig {
    #[serde(default = "default_lookup_kind")]
    annotation: String,
    #[serde(default = "default_case_sensitive")]
    case_sensitive: bool,
    entries: Option<BTreeMap<String, Features>>,
}

pub fn gazetteer_factory(params: &Value) -> Result<Box<dyn Analyzer>, PipelineError> {
    let config: GazetteerConfig = serde_json::from_value(params.clone())?;
    let entries = config.entries.ok_or(PipelineError::MissingParameter {
        step: "gazetteer".to_string(),
        name: "entries",
    })?;
    let mut compiled = Vec::with_capacity(entries.len());
    for (phrase, features) in entries {
        // Whole-word match of the literal phrase.
        let pattern = format!(r"\b{}\b", regex::escape(&phrase));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!config.case_sensitive)
            .build()
            .map_err(|source| PipelineError::Pattern {
                step: "gazetteer".to_string(),
                source,
            })?;
        compiled.push((regex, features));
    }
    Ok(Box::new(Gazetteer {
        annotation: config.annotation,
        compiled,
    }))
}

struct Gazetteer {
    annotation: String,
    compiled: Vec<(Regex, Features)>,
}

impl Analyzer for Gazetteer {
    fn name(&self) -> &str {
        "gazetteer"
    }

    fn run(&self, document: &mut Document) -> Result<(), PipelineError> {
        let mut matches: Vec<(usize, usize, Features)> = Vec::new();
        for (regex, features) in &self.compiled {
            for m in regex.find_iter(document.text()) {
                let mut features = features.clone();
                features.insert("string".to_string(), m.as_str().to_string());
                matches.push((m.start(), m.end(), features));
            }
        }
        // Deterministic order regardless of entry iteration.
        matches.sort_by_key(|(start, end, _)| (*start, *end));
        for (start, end, features) in matches {
            document.annotate(None, self.annotation.clone(), start..end, features);
        }
        Ok(())
    }
}
