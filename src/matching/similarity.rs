//! Name normalization and free-text similarity.
//!
//! Similarity is the Ratcliff/Obershelp "gestalt" ratio: find the longest
//! common substring, recurse on the pieces to its left and right, and report
//! `2 * M / T` where `M` is the number of matched characters and `T` the
//! combined length of both strings.

use std::collections::HashMap;

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Canonical comparison key for a hymnal name.
///
/// Lowercases, collapses whitespace runs to a single space and trims.
/// Accented characters are kept as-is, so "São" and "Sao" stay distinct.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive similarity of two strings in `[0.0, 1.0]`.
///
/// Returns 0.0 if either side is empty and 1.0 for strings equal after
/// lowercasing. The pair is evaluated in lexicographic order so that
/// `string_similarity(a, b) == string_similarity(b, a)` holds exactly;
/// longest-block ties could otherwise resolve differently per argument order.
#[must_use]
pub fn string_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let (first, second) = if a <= b { (&a, &b) } else { (&b, &a) };
    let matched = matching_characters(first, second);

    2.0 * count_to_f64(matched) / count_to_f64(a.len() + b.len())
}

/// Total size of the matching blocks between `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    // Positions of each character in b, ascending
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        total += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among blocks of maximal size, returns the one starting earliest in `a`,
/// and of those the one starting earliest in `b`. Returns `(i, j, size)`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // j2len[j] = length of the longest block ending at a[i - 1] and b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, k);

                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }

        j2len = next_j2len;
    }

    (best_i, best_j, best_size)
}
