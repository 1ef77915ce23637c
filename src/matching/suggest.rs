use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::source::HymnalSource;
use crate::catalog::store::CatalogError;
use crate::core::hymnal::KnownHymnal;
use crate::core::types::HymnalId;
use crate::matching::engine::DisambiguationEngine;
use crate::search::client::KeywordSearch;

/// Default number of keyword-search hits requested for suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// A hymnal surfaced by keyword search
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub hymnal: KnownHymnal,
    pub hymn_count: usize,
}

impl<S: HymnalSource + ?Sized> DisambiguationEngine<'_, S> {
    /// Hymnals referenced by keyword-search hits for `query`.
    ///
    /// Suggestions are advisory: a failing search service or catalog yields
    /// an empty list instead of an error.
    pub fn suggest_similar<K: KeywordSearch + ?Sized>(
        &self,
        search: &K,
        query: &str,
        limit: usize,
    ) -> Vec<Suggestion> {
        let response = match search.search(query, limit) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Keyword search unavailable, no suggestions: {e}");
                return Vec::new();
            }
        };

        let ids = response.hymnal_ids();
        if ids.is_empty() {
            return Vec::new();
        }

        match self.resolve_hymnals(&ids) {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!("Could not resolve suggested hymnals: {e}");
                Vec::new()
            }
        }
    }

    /// Catalog hymnals whose id is in `ids`, in catalog order
    fn resolve_hymnals(&self, ids: &[HymnalId]) -> Result<Vec<Suggestion>, CatalogError> {
        let wanted: HashSet<&HymnalId> = ids.iter().collect();

        Ok(self
            .source
            .list_all()?
            .into_iter()
            .filter(|hymnal| wanted.contains(&hymnal.id))
            .map(|hymnal| Suggestion {
                hymn_count: hymnal.hymn_count,
                hymnal,
            })
            .collect())
    }
}
