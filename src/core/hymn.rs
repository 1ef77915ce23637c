use serde::{Deserialize, Serialize};

/// Minimal view of a hymn used for similarity scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HymnStub {
    /// Sequential number of the hymn inside its hymnal
    #[serde(default)]
    pub number: u32,

    #[serde(default)]
    pub title: String,

    /// Full lyrics
    #[serde(default)]
    pub text: String,
}

impl HymnStub {
    pub fn new(number: u32, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Stable sort by hymn number, keeping at most `limit` entries.
#[must_use]
pub fn first_by_number(hymns: &[HymnStub], limit: usize) -> Vec<&HymnStub> {
    let mut sorted: Vec<&HymnStub> = hymns.iter().collect();
    sorted.sort_by_key(|h| h.number);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let hymn: HymnStub = serde_json::from_str(r#"{"title": "Lua Branca"}"#).unwrap();
        assert_eq!(hymn.number, 0);
        assert_eq!(hymn.title, "Lua Branca");
        assert!(hymn.text.is_empty());
    }

    #[test]
    fn test_first_by_number_sorts_and_truncates() {
        let hymns = vec![
            HymnStub::new(3, "C", ""),
            HymnStub::new(1, "A", ""),
            HymnStub::new(2, "B", ""),
        ];

        let first = first_by_number(&hymns, 2);
        let titles: Vec<&str> = first.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_first_by_number_is_stable_for_equal_numbers() {
        let hymns = vec![HymnStub::new(1, "first", ""), HymnStub::new(1, "second", "")];

        let first = first_by_number(&hymns, 5);
        assert_eq!(first[0].title, "first");
        assert_eq!(first[1].title, "second");
    }
}
