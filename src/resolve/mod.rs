//! Reference resolution.
//!
//! This module provides:
//!
//! - [`TokenResolver`]: resolves references against a shared, replaceable store
//! - [`ResolutionCache`]: byte-bounded LRU of resolved literals
//! - [`CancellationToken`]: cooperative cancellation for in-flight resolutions
//! - [`ResolverConfig`]: cache capacity and depth limit

mod cache;
mod cancel;
mod config;
mod resolver;

pub use cache::{CacheStats, ResolutionCache};
pub use cancel::CancellationToken;
pub use config::{ResolverConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_DEPTH};
pub use resolver::{ResolvedToken, ResolverStats, TokenResolver};
