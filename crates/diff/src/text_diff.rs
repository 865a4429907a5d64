use std::sync::LazyLock;

use regex::Regex;

use crate::segment::{DiffSegment, EditScript, SegmentKind};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Split text into word and whitespace-run tokens.
///
/// Whitespace runs are kept as tokens of their own, so concatenating the
/// tokens reproduces the input exactly. Empty tokens are never produced.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for run in WHITESPACE_RUN.find_iter(text) {
        if run.start() > last {
            tokens.push(&text[last..run.start()]);
        }
        tokens.push(run.as_str());
        last = run.end();
    }
    if last < text.len() {
        tokens.push(&text[last..]);
    }

    tokens
}

/// Wrapper around character and word diff operations
pub struct TextDiff;

impl TextDiff {
    /// Diff two texts one character at a time
    pub fn chars(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
        if old_text == new_text {
            return vec![DiffSegment::unchanged(new_text)];
        }
        if old_text.is_empty() {
            return vec![DiffSegment::added(new_text)];
        }
        if new_text.is_empty() {
            return vec![DiffSegment::removed(old_text)];
        }

        let old_chars: Vec<char> = old_text.chars().collect();
        let new_chars: Vec<char> = new_text.chars().collect();

        EditScript::compute(&old_chars, &new_chars).to_segments(&old_chars, &new_chars)
    }

    /// Diff two texts one word (or whitespace run) at a time
    pub fn words(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
        if old_text == new_text {
            return vec![DiffSegment::unchanged(new_text)];
        }

        let old_tokens = tokenize(old_text);
        let new_tokens = tokenize(new_text);

        EditScript::compute(&old_tokens, &new_tokens).to_segments(&old_tokens, &new_tokens)
    }

    /// Render segments as inline markup: `[-removed-]` and `{+added+}`
    pub fn render_inline(segments: &[DiffSegment]) -> String {
        let mut result = String::new();

        for segment in segments {
            match segment.kind {
                SegmentKind::Unchanged => result.push_str(&segment.text),
                SegmentKind::Removed => {
                    result.push_str("[-");
                    result.push_str(&segment.text);
                    result.push_str("-]");
                }
                SegmentKind::Added => {
                    result.push_str("{+");
                    result.push_str(&segment.text);
                    result.push_str("+}");
                }
            }
        }

        result
    }
}
