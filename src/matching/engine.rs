use serde::{Deserialize, Serialize};

use crate::catalog::index::CandidateFinder;
use crate::catalog::source::HymnalSource;
use crate::catalog::store::CatalogError;
use crate::core::candidate::HymnalCandidate;
use crate::core::hymn::HymnStub;
use crate::core::hymnal::KnownHymnal;
use crate::core::types::Confidence;
use crate::matching::scoring::{classify, compare_content, ContentWeights, DEFAULT_SAMPLE_SIZE};

/// Configuration for the disambiguation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum name similarity for a hymnal to be considered at all
    pub name_threshold: f64,
    /// Minimum content similarity for high and medium confidence
    pub content_threshold: f64,
    /// Name similarity required for high confidence
    pub high_name_threshold: f64,
    /// Content similarity that alone earns low confidence
    pub low_content_threshold: f64,
    /// Maximum number of name candidates scored per request
    pub candidate_limit: usize,
    /// Hymns sampled from each side for content comparison
    pub sample_size: usize,
    pub content_weights: ContentWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            name_threshold: 0.7,
            content_threshold: 0.8,
            high_name_threshold: 0.9,
            low_content_threshold: 0.6,
            candidate_limit: 10,
            sample_size: DEFAULT_SAMPLE_SIZE,
            content_weights: ContentWeights::default(),
        }
    }
}

/// An existing hymnal together with its similarity to the candidate
#[derive(Debug, Clone, Serialize)]
pub struct ScoredHymnal {
    pub hymnal: KnownHymnal,
    pub name_score: f64,
    pub content_score: f64,
}

impl ScoredHymnal {
    /// Name score as a whole percentage (truncated)
    #[must_use]
    pub fn name_percent(&self) -> u32 {
        to_percent(self.name_score)
    }

    /// Content score as a whole percentage (truncated)
    #[must_use]
    pub fn content_percent(&self) -> u32 {
        to_percent(self.content_score)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Scores are 0.0-1.0
fn to_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0) as u32
}

/// Tiered verdict for one candidate hymnal
///
/// When `exact_match` is set every bucket is empty, and a hymnal never
/// appears in more than one bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateReport {
    pub exact_match: Option<KnownHymnal>,
    pub high_confidence: Vec<ScoredHymnal>,
    pub medium_confidence: Vec<ScoredHymnal>,
    pub low_confidence: Vec<ScoredHymnal>,
}

impl DuplicateReport {
    /// Whether the uploader must choose between creating a new hymnal and
    /// adding a version of an existing one
    #[must_use]
    pub fn needs_disambiguation(&self) -> bool {
        self.exact_match.is_some() || !self.high_confidence.is_empty()
    }

    /// Number of entries across the three confidence buckets
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.high_confidence.len() + self.medium_confidence.len() + self.low_confidence.len()
    }

    /// Highest tier reached, if any
    #[must_use]
    pub fn best_confidence(&self) -> Option<Confidence> {
        if self.exact_match.is_some() {
            Some(Confidence::Exact)
        } else if !self.high_confidence.is_empty() {
            Some(Confidence::High)
        } else if !self.medium_confidence.is_empty() {
            Some(Confidence::Medium)
        } else if !self.low_confidence.is_empty() {
            Some(Confidence::Low)
        } else {
            None
        }
    }

    fn push(&mut self, confidence: Confidence, scored: ScoredHymnal) {
        match confidence {
            Confidence::High => self.high_confidence.push(scored),
            Confidence::Medium => self.medium_confidence.push(scored),
            Confidence::Low => self.low_confidence.push(scored),
            Confidence::Exact => self.exact_match = Some(scored.hymnal),
        }
    }
}

/// Decides whether a proposed hymnal duplicates one already in the catalog
pub struct DisambiguationEngine<'a, S: HymnalSource + ?Sized> {
    pub(crate) source: &'a S,
    /// Thresholds, limits and weights
    config: MatchingConfig,
}

impl<'a, S: HymnalSource + ?Sized> DisambiguationEngine<'a, S> {
    /// Create a new engine with default configuration
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(source: &'a S, config: MatchingConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Exact (case- and whitespace-insensitive) name lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn find_exact_match(&self, name: &str) -> Result<Option<KnownHymnal>, CatalogError> {
        CandidateFinder::new(self.source).find_exact_match(name)
    }

    /// Hymnals ranked by name similarity
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn find_similar(
        &self,
        name: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<(KnownHymnal, f64)>, CatalogError> {
        CandidateFinder::new(self.source).find_similar(name, threshold, limit)
    }

    /// Content similarity of two hymn lists using the configured sample and weights
    #[must_use]
    pub fn compare_content(&self, hymns_a: &[HymnStub], hymns_b: &[HymnStub]) -> f64 {
        compare_content(
            hymns_a,
            hymns_b,
            self.config.sample_size,
            &self.config.content_weights,
        )
    }

    /// Classify a candidate against the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn check_candidate(
        &self,
        candidate: &HymnalCandidate,
    ) -> Result<DuplicateReport, CatalogError> {
        self.find_duplicates(&candidate.name, &candidate.hymns)
    }

    /// Combine exact, name and content matching into a tiered verdict.
    ///
    /// An exact name match short-circuits: nothing else is scored. Otherwise
    /// the best name matches are scored on content (when `hymns` is non-empty)
    /// and each lands in the first tier whose predicate holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn find_duplicates(
        &self,
        name: &str,
        hymns: &[HymnStub],
    ) -> Result<DuplicateReport, CatalogError> {
        let mut report = DuplicateReport::default();

        // Step 1: Exact name match
        if let Some(exact) = self.find_exact_match(name)? {
            report.exact_match = Some(exact);
            return Ok(report);
        }

        // Step 2: Candidates by name similarity
        let similar = self.find_similar(
            name,
            self.config.name_threshold,
            self.config.candidate_limit,
        )?;

        // Step 3: Score content and classify
        for (hymnal, name_score) in similar {
            let content_score = if hymns.is_empty() {
                0.0
            } else {
                let existing = self.source.get_hymns(&hymnal.id, self.config.sample_size)?;
                self.compare_content(hymns, &existing)
            };

            let tier = classify(name_score, content_score, &self.config);
            tracing::debug!(
                "Candidate {} ('{}'): name {:.3}, content {:.3} -> {:?}",
                hymnal.id,
                hymnal.name,
                name_score,
                content_score,
                tier
            );

            if let Some(confidence) = tier {
                report.push(
                    confidence,
                    ScoredHymnal {
                        hymnal,
                        name_score,
                        content_score,
                    },
                );
            }
        }

        Ok(report)
    }
}
