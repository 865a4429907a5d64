//! Similarity and edit-distance metrics used by the change classifier.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::collections::HashSet;

/// Jaccard index of the two word sets.
///
/// Repeated words count once. Two empty word lists are identical, so they
/// score `1.0`.
pub fn word_similarity(old_words: &[&str], new_words: &[&str]) -> f64 {
    let old_set: HashSet<&str> = old_words.iter().copied().collect();
    let new_set: HashSet<&str> = new_words.iter().copied().collect();

    let union = old_set.union(&new_set).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = old_set.intersection(&new_set).count();

    intersection as f64 / union as f64
}

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `s1` into `s2`.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the full table are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `1 - distance / max_len`, or `1.0` when both strings are empty
pub fn character_similarity(old_text: &str, new_text: &str) -> f64 {
    let max_len = old_text.chars().count().max(new_text.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(old_text, new_text) as f64 / max_len as f64
}

/// Relative length change, or `0.0` when both strings are empty
pub fn change_ratio(old_text: &str, new_text: &str) -> f64 {
    let old_len = old_text.chars().count();
    let new_len = new_text.chars().count();
    let max_len = old_len.max(new_len);
    if max_len == 0 {
        return 0.0;
    }

    old_len.abs_diff(new_len) as f64 / max_len as f64
}
