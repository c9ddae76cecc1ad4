//! Reference resolution over a shared token store.
//!
//! [`TokenResolver`] owns a validated [`TokenStore`] snapshot and a
//! [`ResolutionCache`]. Resolution follows a reference from path to path
//! until it reaches a literal:
//!
//! ```text
//! components.button.primary.background-color
//!   -> semantic.colors.primary
//!   -> primitives.colors.primary
//!   -> hsl(217, 91%, 60%)
//! ```
//!
//! # Cycle Detection
//!
//! Each top-level call keeps its own stack of the paths currently being
//! resolved. A path is pushed on entry and popped on return, so a path may
//! appear in several sibling branches (for example twice in one compound
//! value) but never beneath itself. Revisiting a path on the stack fails with
//! [`TokenError::CircularReference`]; a stack deeper than the configured
//! maximum fails with [`TokenError::DepthExceeded`].
//!
//! # Concurrency
//!
//! The store is held as `RwLock<Arc<TokenStore>>`. A call clones the `Arc`
//! once and walks that snapshot without holding the lock, so a concurrent
//! [`set_tokens`](TokenResolver::set_tokens) is seen entirely or not at all.
//! The snapshot and the cache generation are read under the same lock, and
//! `set_tokens` clears the cache under the write lock, so a value computed
//! against a replaced store is never cached.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::cache::{CacheStats, ResolutionCache};
use super::cancel::CancellationToken;
use super::config::ResolverConfig;
use crate::store::{Tier, TokenStore};
use crate::token::{TokenError, TokenReference};

/// The outcome of a traced resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    /// The reference as given, trimmed.
    pub reference: String,
    /// The terminal literal.
    pub value: String,
    /// Every path looked up, in order. Empty for a literal input.
    pub chain: Vec<String>,
    /// Number of lookups performed (`chain.len()`).
    pub depth: usize,
    /// True if the value came from the cache without walking the store.
    pub from_cache: bool,
}

/// Resolver counters and settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverStats {
    /// Cache counters.
    pub cache: CacheStats,
    /// Maximum lookups per chain.
    pub max_depth: usize,
    /// Leaf values in the current store.
    pub tokens: usize,
}

/// Resolves token references against a validated store.
///
/// A resolver is `Send + Sync`; share it by reference (or in an `Arc`) and
/// call it from as many threads as needed.
///
/// # Example
///
/// ```rust
/// use token_resolver::{CancellationToken, TokenResolver, TokenStore};
///
/// let store = TokenStore::new()
///     .primitive("colors", "primary", "hsl(217, 91%, 60%)")
///     .semantic("colors", "background", "primitives.colors.primary");
/// let resolver = TokenResolver::new(store).unwrap();
/// let ctx = CancellationToken::new();
///
/// assert_eq!(
///     resolver.resolve(&ctx, "semantic.colors.background").unwrap(),
///     "hsl(217, 91%, 60%)"
/// );
/// // Literals pass through unchanged
/// assert_eq!(resolver.resolve(&ctx, "1rem").unwrap(), "1rem");
/// ```
#[derive(Debug)]
pub struct TokenResolver {
    config: ResolverConfig,
    store: RwLock<Arc<TokenStore>>,
    cache: ResolutionCache,
}

impl TokenResolver {
    /// Creates a resolver with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the first structural error if `store` does not validate.
    pub fn new(store: TokenStore) -> Result<Self, TokenError> {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Creates a resolver with an explicit configuration.
    pub fn with_config(store: TokenStore, config: ResolverConfig) -> Result<Self, TokenError> {
        store.validate()?;
        log::debug!(
            "token resolver ready: {} tokens, cache {} bytes, max depth {}",
            store.len(),
            config.cache_capacity,
            config.effective_max_depth()
        );
        Ok(Self {
            config,
            store: RwLock::new(Arc::new(store)),
            cache: ResolutionCache::new(config.cache_capacity),
        })
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, Arc<TokenStore>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<TokenStore>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current store and the cache generation that belongs to it.
    fn snapshot(&self) -> (Arc<TokenStore>, u64) {
        let guard = self.read();
        (Arc::clone(&guard), self.cache.generation())
    }

    /// The current store.
    pub fn tokens(&self) -> Arc<TokenStore> {
        Arc::clone(&self.read())
    }

    /// Looks up the raw value at `path` without resolving it.
    pub fn get_token(&self, path: &str) -> Result<String, TokenError> {
        self.tokens().get_token(path).map(str::to_string)
    }

    /// Re-runs structural validation on the current store.
    pub fn validate(&self) -> Result<(), TokenError> {
        self.tokens().validate()
    }

    /// Resolves `reference` to a literal.
    ///
    /// A value that is not a reference is returned unchanged. Results for
    /// references are cached by their trimmed path.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Cancelled`] if `ctx` is cancelled before or during the walk
    /// - [`TokenError::NotFound`] naming the first missing segment
    /// - [`TokenError::CircularReference`] with the path trail
    /// - [`TokenError::DepthExceeded`] past the configured maximum
    /// - a path-shape error for a reference that cannot address a tier
    pub fn resolve(
        &self,
        ctx: &CancellationToken,
        reference: impl AsRef<str>,
    ) -> Result<String, TokenError> {
        self.resolve_traced(ctx, reference).map(|t| t.value)
    }

    /// Resolves `reference`, also reporting the chain of paths followed.
    pub fn resolve_traced(
        &self,
        ctx: &CancellationToken,
        reference: impl AsRef<str>,
    ) -> Result<ResolvedToken, TokenError> {
        if ctx.is_cancelled() {
            return Err(TokenError::Cancelled);
        }

        let reference = TokenReference::new(reference.as_ref());
        if !reference.is_reference() {
            return Ok(ResolvedToken {
                reference: reference.path().to_string(),
                value: reference.as_str().to_string(),
                chain: Vec::new(),
                depth: 0,
                from_cache: false,
            });
        }

        let path = reference.path();
        let (store, generation) = self.snapshot();

        if let Some(value) = self.cache.get(path) {
            log::trace!("cache hit {} -> {}", path, value);
            return Ok(ResolvedToken {
                reference: path.to_string(),
                value,
                chain: vec![path.to_string()],
                depth: 1,
                from_cache: true,
            });
        }
        log::trace!("cache miss {}", path);

        let mut walk = Walk::new(ctx, &store, self.config.effective_max_depth(), false);
        let value = walk.step(path)?;
        self.cache.insert(path, &value, generation);

        let depth = walk.chain.len();
        Ok(ResolvedToken {
            reference: path.to_string(),
            value,
            chain: walk.chain,
            depth,
            from_cache: false,
        })
    }

    /// Resolves every reference inside a possibly compound value.
    ///
    /// Whitespace-separated parts that are references are resolved (each in
    /// its own branch, so the same path may appear more than once) and the
    /// parts are re-joined with single spaces. Compound values reached
    /// through a reference are expanded the same way. A value with no
    /// reference parts is returned unchanged.
    ///
    /// ```rust
    /// use token_resolver::{CancellationToken, TokenResolver, TokenStore};
    ///
    /// let resolver = TokenResolver::new(TokenStore::defaults()).unwrap();
    /// let ctx = CancellationToken::new();
    /// assert_eq!(
    ///     resolver
    ///         .resolve_compound(&ctx, "1px solid semantic.colors.border")
    ///         .unwrap(),
    ///     "1px solid hsl(210, 14%, 89%)"
    /// );
    /// ```
    pub fn resolve_compound(
        &self,
        ctx: &CancellationToken,
        value: &str,
    ) -> Result<String, TokenError> {
        if ctx.is_cancelled() {
            return Err(TokenError::Cancelled);
        }
        let (store, _) = self.snapshot();
        Walk::new(ctx, &store, self.config.effective_max_depth(), true).expand(value)
    }

    /// Returns a copy of the store with every semantic and component value
    /// fully resolved, compound values included.
    ///
    /// Leaves are resolved one by one in key order (semantic before
    /// components) against a single snapshot. The first failing leaf aborts
    /// the batch; its error is wrapped with the leaf's path.
    pub fn resolve_all(&self, ctx: &CancellationToken) -> Result<TokenStore, TokenError> {
        if ctx.is_cancelled() {
            return Err(TokenError::Cancelled);
        }

        let (store, _) = self.snapshot();
        let max_depth = self.config.effective_max_depth();
        let mut resolved = TokenStore::clone(&store);
        let mut count = 0usize;

        for (category, tokens) in resolved.semantic.iter_mut() {
            for (key, value) in tokens.iter_mut() {
                *value = Walk::new(ctx, &store, max_depth, true)
                    .expand(value)
                    .map_err(|e| e.at(format!("{}.{}.{}", Tier::Semantic, category, key)))?;
                count += 1;
            }
        }

        for (component, variants) in resolved.components.iter_mut() {
            for (variant, properties) in variants.iter_mut() {
                for (property, value) in properties.iter_mut() {
                    *value = Walk::new(ctx, &store, max_depth, true)
                        .expand(value)
                        .map_err(|e| {
                            e.at(format!(
                                "{}.{}.{}.{}",
                                Tier::Components,
                                component,
                                variant,
                                property
                            ))
                        })?;
                    count += 1;
                }
            }
        }

        log::debug!("resolved {} tokens", count);
        Ok(resolved)
    }

    /// Drops every cached resolution.
    pub fn clear_cache(&self) {
        self.cache.clear();
        log::debug!("token cache cleared");
    }

    /// Replaces the store.
    ///
    /// The new store is validated under the exclusive lock; on failure the
    /// current store and cache are left untouched. On success the cache is
    /// cleared before the new store becomes visible.
    pub fn set_tokens(&self, store: TokenStore) -> Result<(), TokenError> {
        let mut guard = self.write();
        store.validate()?;
        self.cache.clear();
        log::debug!("token store replaced: {} tokens", store.len());
        *guard = Arc::new(store);
        Ok(())
    }

    /// Current counters and settings.
    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            cache: self.cache.stats(),
            max_depth: self.config.effective_max_depth(),
            tokens: self.tokens().len(),
        }
    }
}

/// Per-call resolution state.
struct Walk<'a> {
    ctx: &'a CancellationToken,
    store: &'a TokenStore,
    max_depth: usize,
    expand_compound: bool,
    // paths currently being resolved, innermost last
    stack: Vec<String>,
    // every path looked up, in order
    chain: Vec<String>,
}

impl<'a> Walk<'a> {
    fn new(
        ctx: &'a CancellationToken,
        store: &'a TokenStore,
        max_depth: usize,
        expand_compound: bool,
    ) -> Self {
        Self {
            ctx,
            store,
            max_depth,
            expand_compound,
            stack: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Resolves one path, pushing it for the duration of the call.
    fn step(&mut self, path: &str) -> Result<String, TokenError> {
        if self.ctx.is_cancelled() {
            return Err(TokenError::Cancelled);
        }
        if self.stack.iter().any(|p| p == path) {
            let mut trail = self.stack.clone();
            trail.push(path.to_string());
            return Err(TokenError::CircularReference {
                path: path.to_string(),
                trail,
            });
        }
        if self.stack.len() >= self.max_depth {
            return Err(TokenError::DepthExceeded {
                path: path.to_string(),
                max_depth: self.max_depth,
            });
        }

        self.stack.push(path.to_string());
        self.chain.push(path.to_string());
        let result = self.follow(path);
        self.stack.pop();
        result
    }

    fn follow(&mut self, path: &str) -> Result<String, TokenError> {
        let store = self.store;
        let raw = store.get_token(path)?;
        let next = TokenReference::new(raw);

        if next.is_reference() {
            log::trace!("{} -> {}", path, next.path());
            return self.step(next.path());
        }
        if self.expand_compound {
            return self.expand(raw);
        }
        Ok(raw.to_string())
    }

    /// Resolves a single reference, or each reference part of a compound value.
    fn expand(&mut self, value: &str) -> Result<String, TokenError> {
        let whole = TokenReference::new(value);
        if whole.is_reference() {
            return self.step(whole.path());
        }

        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() < 2 || !parts.iter().any(|part| crate::token::is_reference(part)) {
            return Ok(value.to_string());
        }

        let mut resolved = Vec::with_capacity(parts.len());
        for part in parts {
            if crate::token::is_reference(part) {
                resolved.push(self.step(part)?);
            } else {
                resolved.push(part.to_string());
            }
        }
        Ok(resolved.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ErrorKind, NotFoundKind};

    fn store() -> TokenStore {
        TokenStore::new()
            .primitive("colors", "primary", "hsl(217, 91%, 60%)")
            .primitive("colors", "white", "#fff")
            .primitive("spacing", "sm", "0.5rem")
            .primitive("spacing", "md", "1rem")
            .semantic("colors", "primary", "primitives.colors.primary")
            .semantic("colors", "background", "primitives.colors.white")
            .semantic("spacing", "inset", "primitives.spacing.sm primitives.spacing.md")
            .component("button", "primary", "background-color", "semantic.colors.primary")
            .component("button", "primary", "padding", "semantic.spacing.inset")
            .component(
                "button",
                "primary",
                "margin",
                "primitives.spacing.sm primitives.spacing.sm",
            )
    }

    fn resolver() -> TokenResolver {
        TokenResolver::new(store()).unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_rejects_invalid_store() {
        let bad = store().primitive("colors", "alias", "primitives.colors.white");
        let err = TokenResolver::new(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PrimitiveReference);
    }

    #[test]
    fn test_get_token_is_raw() {
        let resolver = resolver();
        assert_eq!(
            resolver
                .get_token("components.button.primary.background-color")
                .unwrap(),
            "semantic.colors.primary"
        );
        assert!(resolver.validate().is_ok());
    }

    // =========================================================================
    // Resolve
    // =========================================================================

    #[test]
    fn test_resolve_two_hops() {
        let ctx = CancellationToken::new();
        let traced = resolver()
            .resolve_traced(&ctx, "components.button.primary.background-color")
            .unwrap();
        assert_eq!(traced.value, "hsl(217, 91%, 60%)");
        assert_eq!(
            traced.chain,
            vec![
                "components.button.primary.background-color",
                "semantic.colors.primary",
                "primitives.colors.primary",
            ]
        );
        assert_eq!(traced.depth, 3);
        assert!(!traced.from_cache);
    }

    #[test]
    fn test_resolve_literal_unchanged() {
        let ctx = CancellationToken::new();
        let resolver = resolver();
        for literal in ["1rem", "#fff", " 1px solid red ", "hsl(0, 0%, 0%)", ""] {
            assert_eq!(resolver.resolve(&ctx, literal).unwrap(), literal);
        }
        assert!(resolver.cache.is_empty());
    }

    #[test]
    fn test_resolve_trims_reference() {
        let ctx = CancellationToken::new();
        assert_eq!(
            resolver()
                .resolve(&ctx, "  semantic.colors.background ")
                .unwrap(),
            "#fff"
        );
    }

    #[test]
    fn test_resolve_not_found_names_segment() {
        let ctx = CancellationToken::new();
        let err = resolver()
            .resolve(&ctx, "primitives.spacing.xyz")
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::NotFound {
                kind: NotFoundKind::Token,
                segment: "xyz".to_string(),
                path: "primitives.spacing.xyz".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_unknown_tier() {
        let ctx = CancellationToken::new();
        let err = resolver().resolve(&ctx, "theme.colors.primary").unwrap_err();
        assert!(matches!(
            err,
            TokenError::NotFound {
                kind: NotFoundKind::Tier,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_compound_terminal_is_literal() {
        let ctx = CancellationToken::new();
        assert_eq!(
            resolver()
                .resolve(&ctx, "components.button.primary.padding")
                .unwrap(),
            "primitives.spacing.sm primitives.spacing.md"
        );
    }

    // =========================================================================
    // Cycles and depth
    // =========================================================================

    #[test]
    fn test_cycle_reports_trail() {
        let store = TokenStore::new()
            .semantic("colors", "a", "semantic.colors.b")
            .semantic("colors", "b", "semantic.colors.c")
            .semantic("colors", "c", "semantic.colors.a");
        let resolver = TokenResolver::new(store).unwrap();
        let ctx = CancellationToken::new();

        let err = resolver.resolve(&ctx, "semantic.colors.a").unwrap_err();
        assert_eq!(
            err,
            TokenError::CircularReference {
                path: "semantic.colors.a".to_string(),
                trail: vec![
                    "semantic.colors.a".to_string(),
                    "semantic.colors.b".to_string(),
                    "semantic.colors.c".to_string(),
                    "semantic.colors.a".to_string(),
                ],
            }
        );
        // failures are not cached
        assert!(resolver.cache.is_empty());
    }

    #[test]
    fn test_self_reference() {
        let store = TokenStore::new().semantic("colors", "a", "semantic.colors.a");
        let resolver = TokenResolver::new(store).unwrap();
        let err = resolver
            .resolve(&CancellationToken::new(), "semantic.colors.a")
            .unwrap_err();
        assert!(err.is_circular());
    }

    #[test]
    fn test_depth_exceeded() {
        let mut store = TokenStore::new().primitive("colors", "end", "#000");
        for i in 0..5 {
            store = store.semantic("chain", &format!("t{}", i), format!("semantic.chain.t{}", i + 1));
        }
        store = store.semantic("chain", "t5", "primitives.colors.end");

        let ctx = CancellationToken::new();
        let deep = TokenResolver::with_config(store.clone(), ResolverConfig::default()).unwrap();
        assert_eq!(deep.resolve(&ctx, "semantic.chain.t0").unwrap(), "#000");

        let shallow =
            TokenResolver::with_config(store, ResolverConfig::default().max_depth(4)).unwrap();
        let err = shallow.resolve(&ctx, "semantic.chain.t0").unwrap_err();
        assert_eq!(
            err,
            TokenError::DepthExceeded {
                path: "semantic.chain.t4".to_string(),
                max_depth: 4,
            }
        );
    }

    #[test]
    fn test_repeated_path_in_compound_is_not_a_cycle() {
        let ctx = CancellationToken::new();
        assert_eq!(
            resolver()
                .resolve_compound(&ctx, "primitives.spacing.sm primitives.spacing.sm")
                .unwrap(),
            "0.5rem 0.5rem"
        );
    }

    #[test]
    fn test_cycle_through_compound_is_detected() {
        let store = TokenStore::new()
            .primitive("spacing", "sm", "0.5rem")
            .semantic("spacing", "a", "primitives.spacing.sm semantic.spacing.b")
            .semantic("spacing", "b", "semantic.spacing.a");
        let resolver = TokenResolver::new(store).unwrap();
        let ctx = CancellationToken::new();

        // plain resolve stops at the compound literal
        assert_eq!(
            resolver.resolve(&ctx, "semantic.spacing.b").unwrap(),
            "primitives.spacing.sm semantic.spacing.b"
        );
        let err = resolver
            .resolve_compound(&ctx, "semantic.spacing.b")
            .unwrap_err();
        assert!(err.is_circular());
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    #[test]
    fn test_cancelled_before_resolve() {
        let ctx = CancellationToken::new();
        ctx.cancel();
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&ctx, "semantic.colors.primary"),
            Err(TokenError::Cancelled)
        );
        // literals are not exempt
        assert_eq!(resolver.resolve(&ctx, "1rem"), Err(TokenError::Cancelled));
        assert_eq!(
            resolver.resolve_all(&ctx).unwrap_err(),
            TokenError::Cancelled
        );
        assert_eq!(
            resolver.resolve_compound(&ctx, "1rem 2rem").unwrap_err(),
            TokenError::Cancelled
        );
    }

    #[test]
    fn test_walk_checks_cancellation_at_each_step() {
        let mut store = TokenStore::new().primitive("colors", "end", "#000");
        for i in 0..3 {
            store = store.semantic("chain", &format!("t{}", i), format!("semantic.chain.t{}", i + 1));
        }
        store = store.semantic("chain", "t3", "primitives.colors.end");

        let ctx = CancellationToken::new();
        let mut walk = Walk::new(&ctx, &store, 16, false);
        assert_eq!(walk.step("semantic.chain.t0").unwrap(), "#000");
        assert_eq!(walk.chain.len(), 5);

        // cancelled after the walk started, with no public entry check in between
        ctx.cancel();
        assert_eq!(walk.step("semantic.chain.t0"), Err(TokenError::Cancelled));
        assert_eq!(walk.chain.len(), 5);
        assert!(walk.stack.is_empty());

        let mut fresh = Walk::new(&ctx, &store, 16, true);
        assert_eq!(fresh.expand("semantic.chain.t2"), Err(TokenError::Cancelled));
        assert!(fresh.chain.is_empty());
    }

    // =========================================================================
    // Cache
    // =========================================================================

    #[test]
    fn test_second_resolve_hits_cache() {
        let ctx = CancellationToken::new();
        let resolver = resolver();
        resolver.resolve(&ctx, "semantic.colors.primary").unwrap();
        let traced = resolver
            .resolve_traced(&ctx, "semantic.colors.primary")
            .unwrap();
        assert!(traced.from_cache);
        assert_eq!(traced.value, "hsl(217, 91%, 60%)");

        let stats = resolver.stats();
        assert_eq!(stats.cache.hits, 1);
        assert_eq!(stats.cache.entries, 1);
        assert_eq!(stats.max_depth, 16);
        assert_eq!(stats.tokens, store().len());
    }

    #[test]
    fn test_clear_cache() {
        let ctx = CancellationToken::new();
        let resolver = resolver();
        resolver.resolve(&ctx, "semantic.colors.primary").unwrap();
        resolver.clear_cache();
        assert!(resolver.cache.is_empty());
        assert_eq!(
            resolver.resolve(&ctx, "semantic.colors.primary").unwrap(),
            "hsl(217, 91%, 60%)"
        );
    }

    #[test]
    fn test_zero_capacity_never_caches() {
        let ctx = CancellationToken::new();
        let resolver =
            TokenResolver::with_config(store(), ResolverConfig::default().cache_capacity(0))
                .unwrap();
        resolver.resolve(&ctx, "semantic.colors.primary").unwrap();
        let traced = resolver
            .resolve_traced(&ctx, "semantic.colors.primary")
            .unwrap();
        assert!(!traced.from_cache);
    }

    // =========================================================================
    // Store replacement
    // =========================================================================

    #[test]
    fn test_set_tokens_invalidates_cache() {
        let ctx = CancellationToken::new();
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&ctx, "semantic.colors.primary").unwrap(),
            "hsl(217, 91%, 60%)"
        );

        let replacement = store().primitive("colors", "primary", "#123456");
        resolver.set_tokens(replacement).unwrap();
        assert_eq!(
            resolver.resolve(&ctx, "semantic.colors.primary").unwrap(),
            "#123456"
        );
    }

    #[test]
    fn test_set_tokens_rejects_invalid_and_keeps_old() {
        let ctx = CancellationToken::new();
        let resolver = resolver();
        resolver.resolve(&ctx, "semantic.colors.primary").unwrap();

        let bad = store().primitive("colors", "primary", "semantic.colors.primary");
        assert!(resolver.set_tokens(bad).is_err());
        assert_eq!(
            resolver.get_token("primitives.colors.primary").unwrap(),
            "hsl(217, 91%, 60%)"
        );
        assert_eq!(resolver.stats().cache.entries, 1);
    }

    // =========================================================================
    // Batch
    // =========================================================================

    #[test]
    fn test_resolve_all_produces_literals() {
        let ctx = CancellationToken::new();
        let resolved = resolver().resolve_all(&ctx).unwrap();

        assert_eq!(
            resolved.get_token("semantic.colors.primary").unwrap(),
            "hsl(217, 91%, 60%)"
        );
        assert_eq!(
            resolved.get_token("semantic.spacing.inset").unwrap(),
            "0.5rem 1rem"
        );
        assert_eq!(
            resolved
                .get_token("components.button.primary.padding")
                .unwrap(),
            "0.5rem 1rem"
        );
        assert_eq!(
            resolved
                .get_token("components.button.primary.margin")
                .unwrap(),
            "0.5rem 0.5rem"
        );
        for (path, value) in resolved.leaves() {
            assert!(!crate::token::is_reference(value), "{} = {}", path, value);
        }
    }

    #[test]
    fn test_resolve_all_first_error_wins() {
        let store = TokenStore::new()
            .primitive("colors", "white", "#fff")
            .semantic("colors", "a-missing", "primitives.colors.nope")
            .semantic("colors", "b-missing", "primitives.colors.gone")
            .component("button", "base", "color", "semantic.colors.nope");
        let resolver = TokenResolver::new(store).unwrap();

        let err = resolver.resolve_all(&CancellationToken::new()).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("semantic.colors.a-missing:"));
    }

    #[test]
    fn test_resolve_all_leaves_original_untouched() {
        let resolver = resolver();
        resolver.resolve_all(&CancellationToken::new()).unwrap();
        assert_eq!(
            resolver.get_token("semantic.colors.primary").unwrap(),
            "primitives.colors.primary"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn resolver() -> TokenResolver {
        TokenResolver::new(TokenStore::defaults()).unwrap()
    }

    proptest! {
        #[test]
        fn literals_resolve_to_themselves(value in "[#0-9a-z(),% ]{0,24}") {
            prop_assume!(!crate::token::is_reference(&value));
            let ctx = CancellationToken::new();
            prop_assert_eq!(resolver().resolve(&ctx, &value).unwrap(), value);
        }

        #[test]
        fn resolution_is_stable_across_cache_clears(index in 0usize..64) {
            let resolver = resolver();
            let paths: Vec<String> = resolver
                .tokens()
                .leaves()
                .map(|(path, _)| path)
                .filter(|path| !path.starts_with("primitives."))
                .collect();
            let path = &paths[index % paths.len()];
            let ctx = CancellationToken::new();

            let first = resolver.resolve(&ctx, path).unwrap();
            let cached = resolver.resolve(&ctx, path).unwrap();
            resolver.clear_cache();
            let fresh = resolver.resolve(&ctx, path).unwrap();
            prop_assert_eq!(&first, &cached);
            prop_assert_eq!(&first, &fresh);
        }
    }
}
