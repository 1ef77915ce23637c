use crate::catalog::source::HymnalSource;
use crate::catalog::store::CatalogError;
use crate::core::hymnal::KnownHymnal;
use crate::matching::similarity::{normalize_name, string_similarity};

/// Default minimum name similarity for [`CandidateFinder::find_similar`]
pub const DEFAULT_NAME_THRESHOLD: f64 = 0.7;

/// Default number of results for [`CandidateFinder::find_similar`]
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Finds catalog hymnals whose names match a candidate name
pub struct CandidateFinder<'a, S: HymnalSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: HymnalSource + ?Sized> CandidateFinder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// First hymnal whose normalized name equals the normalized `name`.
    ///
    /// A blank name never matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be enumerated.
    pub fn find_exact_match(&self, name: &str) -> Result<Option<KnownHymnal>, CatalogError> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Ok(None);
        }

        let found = self
            .source
            .list_all()?
            .into_iter()
            .find(|hymnal| normalize_name(&hymnal.name) == normalized);

        if let Some(hymnal) = &found {
            tracing::debug!("Exact name match for '{}': {}", name, hymnal.id);
        }
        Ok(found)
    }

    /// Hymnals whose name similarity is at least `threshold`, best first.
    ///
    /// Equal scores keep catalog order. At most `limit` results are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be enumerated.
    pub fn find_similar(
        &self,
        name: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<(KnownHymnal, f64)>, CatalogError> {
        let normalized = normalize_name(name);

        let mut results: Vec<(KnownHymnal, f64)> = self
            .source
            .list_all()?
            .into_iter()
            .filter_map(|hymnal| {
                let score = string_similarity(&normalized, &normalize_name(&hymnal.name));
                (score >= threshold).then_some((hymnal, score))
            })
            .collect();

        // Stable sort by score descending
        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(limit);

        tracing::debug!(
            "{} hymnals within name threshold {:.2} of '{}'",
            results.len(),
            threshold,
            name
        );
        Ok(results)
    }
}
