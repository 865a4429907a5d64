// Core diff library for the diff analyzer
// This crate provides character/word diffing and change classification

mod alignment;
mod cache;
mod classifier;
mod config;
mod error;
mod metrics;
#[cfg(feature = "serde")]
mod request;
mod segment;
mod service;
mod smart_diff;
mod text_diff;

pub use alignment::AlignmentTable;
pub use cache::{cache_key, DiffCache, MemoryCache, NoopCache};
pub use classifier::{
    analyze_text_changes, has_abbreviation_expansion, has_clean_word_changes,
    has_number_unit_changes, has_punctuation_only_changes, has_word_replacements,
    is_abbreviation_expansion, is_number_with_unit, ChangeAnalysis,
};
pub use config::{DiffConfig, Granularity, DEFAULT_CACHE_TTL, DEFAULT_MAX_INPUT_CHARS};
pub use error::{DiffError, InputSide};
pub use metrics::{change_ratio, character_similarity, levenshtein_distance, word_similarity};
#[cfg(feature = "serde")]
pub use request::{DiffRequest, DiffResponse};
pub use segment::{
    reconstruct_new, reconstruct_old, DiffSegment, DiffSummary, DiffUnit, EditOp, EditScript,
    SegmentKind,
};
pub use service::{DiffOutcome, DiffService};
pub use smart_diff::{select_strategy, smart_diff, DiffStrategy, SmartDiff};
pub use text_diff::{tokenize, TextDiff};
