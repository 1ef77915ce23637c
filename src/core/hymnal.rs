use serde::{Deserialize, Serialize};

use crate::core::types::HymnalId;

/// A hymnal already present in the catalog
///
/// Hymns are not carried here; they are fetched on demand through
/// [`HymnalSource::get_hymns`](crate::catalog::source::HymnalSource::get_hymns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownHymnal {
    /// Unique identifier
    pub id: HymnalId,

    /// Full hymnal name, as displayed
    pub name: String,

    /// Person who received the hymnal (free text)
    #[serde(default)]
    pub owner_name: String,

    /// Short display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of hymns stored for this hymnal (populated on load)
    #[serde(default)]
    pub hymn_count: usize,
}

impl KnownHymnal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: HymnalId::new(id),
            name: name.into(),
            owner_name: String::new(),
            intro_name: None,
            description: None,
            hymn_count: 0,
        }
    }

    /// Short name if present, else the full name
    pub fn display_name(&self) -> &str {
        self.intro_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.name)
    }
}
