use derive_more::Display;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classifier::{analyze_text_changes, ChangeAnalysis};
use crate::config::Granularity;
use crate::segment::{DiffSegment, DiffSummary};
use crate::text_diff::TextDiff;

/// Which diff granularity was used to produce a set of segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffStrategy {
    /// The texts were equal, no diff was run
    #[display(fmt = "identical")]
    Identical,

    /// Character-level diff
    #[display(fmt = "character")]
    Character,

    /// Word-level diff
    #[display(fmt = "word")]
    Word,
}

/// Pick a diff granularity from the classifier signals.
///
/// The checks run in a fixed priority order; earlier signals win over the
/// generic similarity thresholds further down.
pub fn select_strategy(analysis: &ChangeAnalysis) -> DiffStrategy {
    if analysis.has_abbreviation_expansion || analysis.has_punctuation_only_changes {
        DiffStrategy::Character
    } else if analysis.has_number_unit_changes || analysis.has_word_replacements {
        DiffStrategy::Word
    } else if analysis.has_clean_word_changes && analysis.word_similarity > 0.6 {
        DiffStrategy::Word
    } else if analysis.character_similarity > 0.80 {
        DiffStrategy::Character
    } else {
        DiffStrategy::Word
    }
}

fn run_strategy(strategy: DiffStrategy, old_text: &str, new_text: &str) -> Vec<DiffSegment> {
    match strategy {
        DiffStrategy::Identical => vec![DiffSegment::unchanged(new_text)],
        DiffStrategy::Character => TextDiff::chars(old_text, new_text),
        DiffStrategy::Word => TextDiff::words(old_text, new_text),
    }
}

/// Diff two texts at whichever granularity best fits the kind of edit
pub fn smart_diff(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
    if old_text == new_text {
        return vec![DiffSegment::unchanged(new_text)];
    }

    let analysis = analyze_text_changes(old_text, new_text);
    run_strategy(select_strategy(&analysis), old_text, new_text)
}

/// The segments of a diff together with the analysis that shaped them
#[derive(Debug, Clone, PartialEq)]
pub struct SmartDiff {
    segments: Vec<DiffSegment>,
    analysis: ChangeAnalysis,
    strategy: DiffStrategy,
}

impl SmartDiff {
    /// Diff two texts, letting the classifier choose the granularity
    pub fn compute(old_text: &str, new_text: &str) -> Self {
        Self::compute_with(old_text, new_text, Granularity::Auto)
    }

    /// Diff two texts at the given granularity
    pub fn compute_with(old_text: &str, new_text: &str, granularity: Granularity) -> Self {
        let analysis = analyze_text_changes(old_text, new_text);
        let strategy = Self::strategy_for(old_text, new_text, &analysis, granularity);

        debug!(
            "{} diff (granularity {}, word similarity {:.2}, character similarity {:.2})",
            strategy, granularity, analysis.word_similarity, analysis.character_similarity
        );

        Self {
            segments: run_strategy(strategy, old_text, new_text),
            analysis,
            strategy,
        }
    }

    /// Resolve the strategy a granularity setting leads to for a pair of texts
    pub fn strategy_for(
        old_text: &str,
        new_text: &str,
        analysis: &ChangeAnalysis,
        granularity: Granularity,
    ) -> DiffStrategy {
        if old_text == new_text {
            return DiffStrategy::Identical;
        }
        match granularity {
            Granularity::Auto => select_strategy(analysis),
            Granularity::Character => DiffStrategy::Character,
            Granularity::Word => DiffStrategy::Word,
        }
    }

    /// Get the segments
    pub fn segments(&self) -> &[DiffSegment] {
        &self.segments
    }

    /// Get the classifier signals
    pub fn analysis(&self) -> &ChangeAnalysis {
        &self.analysis
    }

    /// Get the strategy that produced the segments
    pub fn strategy(&self) -> DiffStrategy {
        self.strategy
    }

    /// Summarize the segments
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_segments(&self.segments)
    }

    /// Split into segments, analysis and strategy
    pub fn into_parts(self) -> (Vec<DiffSegment>, ChangeAnalysis, DiffStrategy) {
        (self.segments, self.analysis, self.strategy)
    }
}
