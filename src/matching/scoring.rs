use serde::{Deserialize, Serialize};

use crate::core::hymn::{first_by_number, HymnStub};
use crate::core::types::Confidence;
use crate::matching::engine::MatchingConfig;
use crate::matching::similarity::string_similarity;

/// Safely convert usize to f64 for averaging
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Default number of hymns sampled from each hymnal
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Relative weight of title and lyrics when comparing two hymns
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContentWeights {
    pub title: f64,
    pub text: f64,
}

impl Default for ContentWeights {
    fn default() -> Self {
        Self {
            title: 0.3, // 30%
            text: 0.7,  // 70%
        }
    }
}

/// Similarity of two hymns: weighted blend of title and text similarity
#[must_use]
pub fn hymn_similarity(a: &HymnStub, b: &HymnStub, weights: &ContentWeights) -> f64 {
    weights.title * string_similarity(&a.title, &b.title)
        + weights.text * string_similarity(&a.text, &b.text)
}

/// Estimate how similar two hymn collections are.
///
/// Both lists are sorted by number and cut to `sample_size`; the first
/// `min(len)` entries are then paired by position, not by number, so
/// hymnals transcribed with a numbering offset still line up. Entries beyond
/// the shorter sample are ignored. Returns the mean pair similarity, or 0.0
/// if either side is empty.
#[must_use]
pub fn compare_content(
    hymns_a: &[HymnStub],
    hymns_b: &[HymnStub],
    sample_size: usize,
    weights: &ContentWeights,
) -> f64 {
    if hymns_a.is_empty() || hymns_b.is_empty() {
        return 0.0;
    }

    let sample_a = first_by_number(hymns_a, sample_size);
    let sample_b = first_by_number(hymns_b, sample_size);

    let compared = sample_a.len().min(sample_b.len());
    if compared == 0 {
        return 0.0;
    }

    let total: f64 = sample_a
        .iter()
        .zip(&sample_b)
        .map(|(a, b)| hymn_similarity(a, b, weights))
        .sum();

    total / count_to_f64(compared)
}

/// Place a scored candidate into a confidence tier.
///
/// The checks run high, then medium, then low; the first that holds wins.
/// Returns `None` when the candidate should not be reported.
#[must_use]
pub fn classify(name_score: f64, content_score: f64, config: &MatchingConfig) -> Option<Confidence> {
    if name_score >= config.high_name_threshold && content_score >= config.content_threshold {
        Some(Confidence::High)
    } else if name_score >= config.name_threshold && content_score >= config.content_threshold {
        Some(Confidence::Medium)
    } else if name_score >= config.name_threshold
        || content_score >= config.low_content_threshold
    {
        Some(Confidence::Low)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lua_branca() -> HymnStub {
        HymnStub::new(1, "Lua Branca", "Da luz serena...")
    }

    fn tuperci() -> HymnStub {
        HymnStub::new(2, "Tuperci", "Eu canto é na altura...")
    }

    #[test]
    fn test_identical_hymns() {
        let hymns_a = vec![lua_branca(), tuperci()];
        let hymns_b = vec![lua_branca(), tuperci()];

        let similarity = compare_content(
            &hymns_a,
            &hymns_b,
            DEFAULT_SAMPLE_SIZE,
            &ContentWeights::default(),
        );
        assert!(similarity > 0.95, "got {similarity}");
    }

    #[test]
    fn test_different_hymns() {
        let hymns_a = vec![HymnStub::new(1, "Hino A", "Texto completamente diferente")];
        let hymns_b = vec![HymnStub::new(1, "Hino B", "Outro texto totalmente distinto")];

        let similarity = compare_content(
            &hymns_a,
            &hymns_b,
            DEFAULT_SAMPLE_SIZE,
            &ContentWeights::default(),
        );
        assert!(similarity < 0.8, "got {similarity}");
    }

    #[test]
    fn test_empty_lists() {
        let weights = ContentWeights::default();
        let one = vec![HymnStub::new(1, "Test", "Test")];

        assert!(compare_content(&[], &[], DEFAULT_SAMPLE_SIZE, &weights).abs() < 1e-9);
        assert!(compare_content(&one, &[], DEFAULT_SAMPLE_SIZE, &weights).abs() < 1e-9);
        assert!(compare_content(&[], &one, DEFAULT_SAMPLE_SIZE, &weights).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sample_size() {
        let hymns = vec![lua_branca()];
        let similarity = compare_content(&hymns, &hymns, 0, &ContentWeights::default());
        assert!(similarity.abs() < 1e-9);
    }

    #[test]
    fn test_sample_size_limit() {
        let hymns_a: Vec<HymnStub> = (0..10)
            .map(|i| HymnStub::new(i, format!("Hino {i}"), format!("Texto {i}")))
            .collect();
        // Differences only past the first three hymns
        let hymns_b: Vec<HymnStub> = (0..10)
            .map(|i| {
                if i < 3 {
                    HymnStub::new(i, format!("Hino {i}"), format!("Texto {i}"))
                } else {
                    HymnStub::new(i, "Outro", "Algo sem relação")
                }
            })
            .collect();

        let similarity = compare_content(&hymns_a, &hymns_b, 3, &ContentWeights::default());
        assert!((similarity - 1.0).abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_pairs_by_sorted_position_not_number() {
        // Same hymns, numbering shifted by 100
        let hymns_a = vec![lua_branca(), tuperci()];
        let hymns_b = vec![
            HymnStub::new(102, "Tuperci", "Eu canto é na altura..."),
            HymnStub::new(101, "Lua Branca", "Da luz serena..."),
        ];

        let similarity = compare_content(
            &hymns_a,
            &hymns_b,
            DEFAULT_SAMPLE_SIZE,
            &ContentWeights::default(),
        );
        assert!((similarity - 1.0).abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_extra_hymns_not_penalized() {
        let hymns_a = vec![lua_branca()];
        let hymns_b = vec![lua_branca(), tuperci()];

        let similarity = compare_content(
            &hymns_a,
            &hymns_b,
            DEFAULT_SAMPLE_SIZE,
            &ContentWeights::default(),
        );
        assert!((similarity - 1.0).abs() < 1e-9, "got {similarity}");
    }

    #[test]
    fn test_text_weighs_more_than_title() {
        let weights = ContentWeights::default();
        let base = HymnStub::new(1, "Lua Branca", "Da luz serena do mar sagrado");
        let same_title = HymnStub::new(1, "Lua Branca", "xxxxxxxxxxxxxxxxxxxxxxxxxxxx");
        let same_text = HymnStub::new(1, "qqqqqqqqqq", "Da luz serena do mar sagrado");

        let title_only = hymn_similarity(&base, &same_title, &weights);
        let text_only = hymn_similarity(&base, &same_text, &weights);
        assert!((title_only - 0.3).abs() < 1e-9, "got {title_only}");
        assert!((text_only - 0.7).abs() < 1e-9, "got {text_only}");
    }

    #[test]
    fn test_classify_cascade() {
        let config = MatchingConfig::default();

        assert_eq!(classify(0.95, 0.85, &config), Some(Confidence::High));
        assert_eq!(classify(0.9, 0.8, &config), Some(Confidence::High));
        assert_eq!(classify(0.75, 0.85, &config), Some(Confidence::Medium));
        assert_eq!(classify(0.95, 0.5, &config), Some(Confidence::Low));
        assert_eq!(classify(0.7, 0.0, &config), Some(Confidence::Low));
        assert_eq!(classify(0.5, 0.5, &config), None);
    }

    #[test]
    fn test_classify_content_only_low() {
        // Unreachable through the engine, whose name filter guarantees
        // name_score >= name_threshold, but kept in the classifier
        let config = MatchingConfig::default();
        assert_eq!(classify(0.2, 0.6, &config), Some(Confidence::Low));
        assert_eq!(classify(0.2, 0.9, &config), Some(Confidence::Low));
        assert_eq!(classify(0.2, 0.59, &config), None);
    }

    #[test]
    fn test_classify_respects_custom_thresholds() {
        let config = MatchingConfig {
            name_threshold: 0.6,
            content_threshold: 0.5,
            ..MatchingConfig::default()
        };

        assert_eq!(classify(0.65, 0.55, &config), Some(Confidence::Medium));
        assert_eq!(classify(0.92, 0.55, &config), Some(Confidence::High));
    }
}
