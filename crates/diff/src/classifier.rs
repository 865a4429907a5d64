//! Heuristic change classification.
//!
//! Each predicate is independent and pure. Word-pair predicates compare
//! position-aligned pairs up to the shorter of the two word lists.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::AlignmentTable;
use crate::metrics::{change_ratio, character_similarity, word_similarity};

/// Common Indonesian abbreviations and their expansions
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dgn", "dengan"),
    ("yg", "yang"),
    ("utk", "untuk"),
    ("sbg", "sebagai"),
    ("dlm", "dalam"),
    ("dr", "dari"),
    ("pd", "pada"),
    ("tdk", "tidak"),
    ("hrs", "harus"),
    ("krn", "karena"),
    ("sdh", "sudah"),
    ("blm", "belum"),
];

static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+(?:[.,]\d+)?(?:mg|g|kg|ml|l|cm|mm|m|%|°c|°f)?$").unwrap()
});

static PURE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)?$").unwrap());

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Signals describing how two texts differ
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChangeAnalysis {
    /// Jaccard index of the word sets
    pub word_similarity: f64,

    /// Levenshtein-based similarity of the full texts
    pub character_similarity: f64,

    pub has_abbreviation_expansion: bool,
    pub has_clean_word_changes: bool,
    pub has_punctuation_only_changes: bool,
    pub has_number_unit_changes: bool,
    pub has_word_replacements: bool,

    /// Relative length delta of the full texts
    pub change_ratio: f64,
}

/// Compute every classifier signal for a pair of texts
pub fn analyze_text_changes(old_text: &str, new_text: &str) -> ChangeAnalysis {
    let old_words: Vec<&str> = old_text.split_whitespace().collect();
    let new_words: Vec<&str> = new_text.split_whitespace().collect();

    ChangeAnalysis {
        word_similarity: word_similarity(&old_words, &new_words),
        character_similarity: character_similarity(old_text, new_text),
        has_abbreviation_expansion: has_abbreviation_expansion(&old_words, &new_words),
        has_clean_word_changes: has_clean_word_changes(&old_words, &new_words),
        has_punctuation_only_changes: has_punctuation_only_changes(old_text, new_text),
        has_number_unit_changes: has_number_unit_changes(&old_words, &new_words),
        has_word_replacements: has_word_replacements(&old_words, &new_words),
        change_ratio: change_ratio(old_text, new_text),
    }
}

/// Whether `new_word` looks like the expansion of the abbreviation `old_word`
pub fn is_abbreviation_expansion(old_word: &str, new_word: &str) -> bool {
    let old_len = old_word.chars().count();
    let new_len = new_word.chars().count();
    if old_len >= new_len || old_len > 4 {
        return false;
    }

    let old_lower = old_word.to_lowercase();
    let new_lower = new_word.to_lowercase();
    if old_lower.chars().next() != new_lower.chars().next() {
        return false;
    }

    if ABBREVIATIONS
        .iter()
        .any(|&(abbr, expansion)| abbr == old_lower && expansion == new_lower)
    {
        return true;
    }

    old_len <= 3 && is_subsequence(&old_lower, &new_lower)
}

/// Every character of `needle` appears in `haystack`, in order
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|c| remaining.any(|h| h == c))
}

/// Whether a word is a number, optionally followed by a unit
pub fn is_number_with_unit(word: &str) -> bool {
    NUMBER_WITH_UNIT.is_match(word)
}

fn is_pure_number(word: &str) -> bool {
    PURE_NUMBER.is_match(word)
}

pub fn has_abbreviation_expansion(old_words: &[&str], new_words: &[&str]) -> bool {
    old_words
        .iter()
        .zip(new_words)
        .any(|(old, new)| is_abbreviation_expansion(old, new))
}

/// More than half of the longer word list survives as a common subsequence
pub fn has_clean_word_changes(old_words: &[&str], new_words: &[&str]) -> bool {
    let max_words = old_words.len().max(new_words.len());
    if max_words == 0 {
        return false;
    }

    let common = AlignmentTable::build(old_words, new_words).lcs_len();
    common as f64 / max_words as f64 > 0.5
}

/// The texts match, or nearly match, once punctuation is stripped
pub fn has_punctuation_only_changes(old_text: &str, new_text: &str) -> bool {
    let old_stripped = PUNCTUATION.replace_all(old_text, "");
    let new_stripped = PUNCTUATION.replace_all(new_text, "");

    old_stripped == new_stripped || character_similarity(&old_stripped, &new_stripped) > 0.95
}

pub fn has_number_unit_changes(old_words: &[&str], new_words: &[&str]) -> bool {
    let pairs = || old_words.iter().zip(new_words);

    let unit_change = pairs()
        .any(|(old, new)| old != new && is_number_with_unit(old) && is_number_with_unit(new));
    let number_change =
        pairs().any(|(old, new)| old != new && is_pure_number(old) && is_pure_number(new));

    unit_change || number_change
}

/// Some, but at most half, of the words were swapped for dissimilar words.
///
/// Only meaningful when both texts have the same number of words.
pub fn has_word_replacements(old_words: &[&str], new_words: &[&str]) -> bool {
    if old_words.len() != new_words.len() {
        return false;
    }

    let replacements = old_words
        .iter()
        .zip(new_words)
        .filter(|(old, new)| old != new)
        .filter(|(old, new)| !is_abbreviation_expansion(old, new))
        .filter(|(old, new)| !(is_number_with_unit(old) && is_number_with_unit(new)))
        .filter(|(old, new)| character_similarity(old, new) < 0.5)
        .count();

    replacements > 0 && replacements as f64 <= old_words.len() as f64 / 2.0
}
