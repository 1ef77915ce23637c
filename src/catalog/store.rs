use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::catalog::source::HymnalSource;
use crate::core::hymn::HymnStub;
use crate::core::hymnal::KnownHymnal;
use crate::core::types::HymnalId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Hymnal '{0}' not found in catalog")]
    NotFound(HymnalId),

    #[error("Duplicate hymnal id '{0}' in catalog")]
    DuplicateId(HymnalId),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub hymnals: Vec<CatalogEntry>,
}

/// One hymnal as stored on disk, with its hymns inline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub hymnal: KnownHymnal,

    #[serde(default)]
    pub hymns: Vec<HymnStub>,
}

/// In-memory hymnal catalog
///
/// Hymnals keep insertion order, which is the enumeration order seen by
/// [`HymnalSource::list_all`].
#[derive(Debug, Default)]
pub struct HymnalCatalog {
    /// All known hymnals
    pub hymnals: Vec<KnownHymnal>,

    /// Hymns of each hymnal, parallel to `hymnals`, sorted by number
    hymns: Vec<Vec<HymnStub>>,

    /// Index: hymnal ID -> index in hymnals vec
    id_to_index: HashMap<HymnalId, usize>,
}

impl HymnalCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or repeated hymnal ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for entry in data.hymnals {
            catalog.add_hymnal(entry.hymnal, entry.hymns)?;
        }

        tracing::debug!("Loaded catalog with {} hymnals", catalog.len());
        Ok(catalog)
    }

    /// Add a hymnal and its hymns to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if the id is already present.
    pub fn add_hymnal(
        &mut self,
        mut hymnal: KnownHymnal,
        mut hymns: Vec<HymnStub>,
    ) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&hymnal.id) {
            return Err(CatalogError::DuplicateId(hymnal.id));
        }

        let index = self.hymnals.len();
        hymns.sort_by_key(|h| h.number);
        hymnal.hymn_count = hymns.len();

        self.id_to_index.insert(hymnal.id.clone(), index);
        self.hymnals.push(hymnal);
        self.hymns.push(hymns);
        Ok(())
    }

    /// Get a hymnal by ID
    pub fn get(&self, id: &HymnalId) -> Option<&KnownHymnal> {
        self.id_to_index.get(id).map(|&idx| &self.hymnals[idx])
    }

    /// All hymns of a hymnal, ascending by number
    pub fn hymns_of(&self, id: &HymnalId) -> Option<&[HymnStub]> {
        self.id_to_index
            .get(id)
            .map(|&idx| self.hymns[idx].as_slice())
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            hymnals: self
                .hymnals
                .iter()
                .zip(&self.hymns)
                .map(|(hymnal, hymns)| CatalogEntry {
                    hymnal: hymnal.clone(),
                    hymns: hymns.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of hymnals in catalog
    pub fn len(&self) -> usize {
        self.hymnals.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.hymnals.is_empty()
    }
}

impl HymnalSource for HymnalCatalog {
    fn list_all(&self) -> Result<Vec<KnownHymnal>, CatalogError> {
        Ok(self.hymnals.clone())
    }

    fn get_hymns(&self, id: &HymnalId, limit: usize) -> Result<Vec<HymnStub>, CatalogError> {
        let hymns = self
            .hymns_of(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        Ok(hymns.iter().take(limit).cloned().collect())
    }
}
