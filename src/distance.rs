//! Levenshtein edit distance and similarity ranking.

use compact_str::CompactString;
use std::cmp::Ordering;
use tracing::trace;

#[cfg(feature = "serialization")]
use serde::Serialize;

/// A dictionary word and its similarity to the queried token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Suggestion {
    #[cfg_attr(feature = "serialization", serde(rename = "palabra"))]
    pub word: CompactString,
    #[cfg_attr(feature = "serialization", serde(rename = "similitud"))]
    pub similarity: f64,
}

fn uppercase_chars(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_uppercase).collect()
}

/// Edit distance with unit cost for insertion, deletion and substitution,
/// ignoring case. Counts characters, not bytes.
pub fn distance(a: &str, b: &str) -> usize {
    let a = uppercase_chars(a);
    let b = uppercase_chars(b);
    char_distance(&a, &b)
}

fn char_distance(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string in the row
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = if lc == sc { 0 } else { 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// `100 * (1 - distance / longest length)`, rounded to two decimals with
/// halves to even; 100 when both strings are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = uppercase_chars(a);
    let b = uppercase_chars(b);
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 100.0;
    }

    let ratio = 1.0 - char_distance(&a, &b) as f64 / max_len as f64;
    (ratio * 100.0 * 100.0).round_ties_even() / 100.0
}

/// Ranks `dictionary` by similarity to `token`, keeping entries scoring at
/// least `threshold`, best first. Ties keep dictionary order.
pub fn suggest<'a, I>(token: &str, dictionary: I, max_results: usize, threshold: f64) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let token = token.trim().to_uppercase();
    let mut scanned = 0usize;
    let mut suggestions: Vec<Suggestion> = dictionary
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter_map(|word| {
            let score = similarity(&token, word);
            if score >= threshold {
                Some(Suggestion {
                    word: CompactString::from(word),
                    similarity: score,
                })
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    suggestions.truncate(max_results);

    trace!(
        token = %token,
        scanned,
        threshold,
        found = suggestions.len(),
        "suggestion scan"
    );
    suggestions
}
