use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::hymn::HymnStub;

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("Failed to read candidate file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse candidate JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse candidate YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Candidate hymnal must have a non-empty 'name' field")]
    MissingName,
}

/// A proposed hymnal, checked against the catalog before it is created
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HymnalCandidate {
    pub name: String,

    /// Hymns in upload order
    #[serde(default)]
    pub hymns: Vec<HymnStub>,
}

/// Upload documents either carry the fields at the root or nest them under `hymn_book`
#[derive(Deserialize)]
struct CandidateDocument {
    #[serde(default)]
    hymn_book: Option<CandidateFields>,
    #[serde(flatten)]
    fields: CandidateFields,
}

#[derive(Deserialize)]
struct CandidateFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    hymns: Vec<HymnStub>,
}

impl HymnalCandidate {
    pub fn new(name: impl Into<String>, hymns: Vec<HymnStub>) -> Self {
        Self {
            name: name.into(),
            hymns,
        }
    }

    /// Load a candidate from a JSON or YAML file (chosen by extension).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or has no name.
    pub fn load_from_file(path: &Path) -> Result<Self, CandidateError> {
        let content = std::fs::read_to_string(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// # Errors
    ///
    /// Returns an error on malformed JSON or a missing name.
    pub fn from_json(json: &str) -> Result<Self, CandidateError> {
        let document: CandidateDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// # Errors
    ///
    /// Returns an error on malformed YAML or a missing name.
    pub fn from_yaml(yaml: &str) -> Result<Self, CandidateError> {
        let document: CandidateDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    fn from_document(document: CandidateDocument) -> Result<Self, CandidateError> {
        let fields = document.hymn_book.unwrap_or(document.fields);

        let name = fields
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(CandidateError::MissingName)?;

        Ok(Self {
            name,
            hymns: fields.hymns,
        })
    }

    /// Hymn numbers that appear more than once, ascending
    #[must_use]
    pub fn duplicate_numbers(&self) -> Vec<u32> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for hymn in &self.hymns {
            *counts.entry(hymn.number).or_default() += 1;
        }

        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(number, _)| number)
            .collect()
    }
}
