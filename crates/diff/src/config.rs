use std::time::Duration;

use derive_more::Display;

/// How long cached diffs stay valid by default
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Default per-side input ceiling, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5_000;

/// Granularity the diff service runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Granularity {
    /// Let the change classifier decide
    #[default]
    #[display(fmt = "auto")]
    Auto,

    /// Always diff character by character
    #[display(fmt = "character")]
    Character,

    /// Always diff word by word
    #[display(fmt = "word")]
    Word,
}

/// Settings for a [`DiffService`](crate::DiffService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    granularity: Granularity,
    cache_ttl: Duration,
    max_input_chars: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Auto,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_input_chars: Some(DEFAULT_MAX_INPUT_CHARS),
        }
    }
}

impl DiffConfig {
    /// Set the diff granularity
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set how long cached results stay valid
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the per-side input ceiling; `None` accepts any size
    pub fn max_input_chars(mut self, max: Option<usize>) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn get_granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn get_cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn get_max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }
}
