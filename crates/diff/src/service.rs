use log::{debug, warn};
use rayon::prelude::*;

use crate::cache::{cache_key, DiffCache};
use crate::classifier::{analyze_text_changes, ChangeAnalysis};
use crate::config::{DiffConfig, Granularity};
use crate::error::{DiffError, InputSide};
use crate::segment::{reconstruct_new, reconstruct_old, DiffSegment, DiffSummary};
use crate::smart_diff::{DiffStrategy, SmartDiff};

/// The result of one service call
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutcome {
    /// The diff segments
    pub segments: Vec<DiffSegment>,

    /// The classifier signals for the pair
    pub analysis: ChangeAnalysis,

    /// The strategy the segments were produced with
    pub strategy: DiffStrategy,

    /// Whether the segments came from the cache
    pub cached: bool,
}

impl DiffOutcome {
    /// Summarize the segments
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_segments(&self.segments)
    }
}

/// Diffs text pairs through an injected cache
pub struct DiffService<C: DiffCache> {
    cache: C,
    config: DiffConfig,
}

impl<C: DiffCache> DiffService<C> {
    /// Create a new service around `cache`
    pub fn new(cache: C, config: DiffConfig) -> Self {
        Self { cache, config }
    }

    /// Get the cache
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Get the configuration
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff one pair of texts.
    ///
    /// Cache failures never fail the diff: a failed lookup counts as a miss
    /// and a failed store is only logged. A cached entry is only used if its
    /// segments reconstruct exactly `old_text` and `new_text`; the key joins
    /// the texts with a separator, so distinct pairs can share one.
    ///
    /// Only the segments are cached. A hit still runs the full change
    /// analysis, including the whole-text Levenshtein distance, so it saves
    /// the diff itself but not the O(n·m) similarity pass.
    pub fn diff(&self, old_text: &str, new_text: &str) -> Result<DiffOutcome, DiffError> {
        self.check_size(InputSide::Old, old_text)?;
        self.check_size(InputSide::New, new_text)?;

        let granularity = self.config.get_granularity();
        let key = Self::key_for(old_text, new_text, granularity);

        match self.cache.get(&key) {
            Ok(Some(segments))
                if reconstruct_old(&segments) == old_text
                    && reconstruct_new(&segments) == new_text =>
            {
                debug!("diff cache hit for {}", key);
                let analysis = analyze_text_changes(old_text, new_text);
                let strategy = SmartDiff::strategy_for(old_text, new_text, &analysis, granularity);
                return Ok(DiffOutcome {
                    segments,
                    analysis,
                    strategy,
                    cached: true,
                });
            }
            Ok(Some(_)) => warn!("cached diff under {} belongs to other texts, recomputing", key),
            Ok(None) => debug!("diff cache miss for {}", key),
            Err(e) => warn!("diff cache lookup failed, recomputing: {:#}", e),
        }

        let (segments, analysis, strategy) =
            SmartDiff::compute_with(old_text, new_text, granularity).into_parts();

        if let Err(e) = self
            .cache
            .set(&key, &segments, self.config.get_cache_ttl())
        {
            warn!("failed to store diff in cache: {:#}", e);
        }

        Ok(DiffOutcome {
            segments,
            analysis,
            strategy,
            cached: false,
        })
    }

    /// Classify the changes between two texts without diffing them
    pub fn analyze(&self, old_text: &str, new_text: &str) -> Result<ChangeAnalysis, DiffError> {
        self.check_size(InputSide::Old, old_text)?;
        self.check_size(InputSide::New, new_text)?;
        Ok(analyze_text_changes(old_text, new_text))
    }

    /// Diff many pairs in parallel; results keep the input order
    pub fn diff_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Result<DiffOutcome, DiffError>>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(old_text, new_text)| self.diff(old_text.as_ref(), new_text.as_ref()))
            .collect()
    }

    fn check_size(&self, side: InputSide, text: &str) -> Result<(), DiffError> {
        let Some(max) = self.config.get_max_input_chars() else {
            return Ok(());
        };

        // Byte length is an upper bound on the char count
        if text.len() <= max {
            return Ok(());
        }
        let len = text.chars().count();
        if len > max {
            warn!("rejecting {} of {} characters (limit {})", side, len, max);
            return Err(DiffError::InputTooLarge { side, len, max });
        }
        Ok(())
    }

    fn key_for(old_text: &str, new_text: &str, granularity: Granularity) -> String {
        let key = cache_key(old_text, new_text);
        match granularity {
            Granularity::Auto => key,
            forced => format!("{}:{}", key, forced),
        }
    }
}

#[cfg(feature = "serde")]
impl<C: DiffCache> DiffService<C> {
    /// Parse a JSON request body, validate it, and diff it
    pub fn handle_json(&self, body: &str) -> Result<crate::request::DiffResponse, DiffError> {
        let request = crate::request::DiffRequest::from_json(body)?;
        let outcome = self.diff(&request.old_text, &request.new_text)?;
        Ok(outcome.into())
    }
}
