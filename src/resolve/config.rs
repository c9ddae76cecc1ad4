//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::token::TokenError;

/// Default cache capacity: 1 MiB of cached literal bytes.
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 20;

/// Default maximum number of lookups in one reference chain.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Settings for a [`TokenResolver`](crate::TokenResolver).
///
/// Every field has a default, so a partial document is enough:
///
/// ```rust
/// use token_resolver::ResolverConfig;
///
/// let config = ResolverConfig::from_yaml("max_depth: 4").unwrap();
/// assert_eq!(config.max_depth, 4);
/// assert_eq!(config.cache_capacity, 1 << 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Total bytes of resolved literals the cache may hold. `0` disables caching.
    pub cache_capacity: usize,
    /// Maximum lookups in one chain before failing with `depth_exceeded`. `0` is treated as `1`.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverConfig {
    /// Sets the cache capacity in bytes.
    pub fn cache_capacity(mut self, bytes: usize) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Sets the maximum resolution depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// The depth limit actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.max(1)
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, TokenError> {
        serde_json::from_str(json).map_err(|e| TokenError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Parses a YAML configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self, TokenError> {
        serde_yaml::from_str(yaml).map_err(|e| TokenError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }
}
