//! Layered design tokens with reference resolution.
//!
//! A token store holds named design values in three tiers:
//!
//! - **Primitives**: raw literals (`hsl(217, 91%, 60%)`, `1rem`, `150ms`)
//! - **Semantic**: purpose-named values that reference primitives
//!   (`semantic.colors.primary` = `primitives.colors.primary`)
//! - **Components**: per-variant properties that reference either tier below
//!   (`components.button.primary.background-color` = `semantic.colors.primary`)
//!
//! A [`TokenResolver`] follows references to their terminal literal, rejects
//! cycles with the offending path trail, and caches results under a byte
//! budget. The store is validated before any resolution and can only be
//! updated by replacing it wholesale.
//!
//! # Quick Start
//!
//! ```rust
//! use token_resolver::{CancellationToken, TokenResolver, TokenStore};
//!
//! let store = TokenStore::new()
//!     .primitive("colors", "blue-500", "hsl(217, 91%, 60%)")
//!     .semantic("colors", "primary", "primitives.colors.blue-500")
//!     .component("button", "primary", "background-color", "semantic.colors.primary");
//!
//! let resolver = TokenResolver::new(store).unwrap();
//! let ctx = CancellationToken::new();
//!
//! let color = resolver
//!     .resolve(&ctx, "components.button.primary.background-color")
//!     .unwrap();
//! assert_eq!(color, "hsl(217, 91%, 60%)");
//! ```
//!
//! # Literals and References
//!
//! [`is_reference`] decides whether a value is a path or a literal. Hex
//! colors, CSS function calls, numbers with units and anything containing
//! whitespace are literals; a dotted path of `[a-zA-Z0-9_-]` segments is a
//! reference. Resolving a literal returns it unchanged.
//!
//! Compound values such as `1px solid semantic.colors.border` are literals to
//! [`TokenResolver::resolve`]. Use [`TokenResolver::resolve_compound`] or
//! [`TokenResolver::resolve_all`] to resolve the references inside them.
//!
//! # Loading and Exporting
//!
//! Stores are exchanged as documents with the top-level keys `primitives`,
//! `semantic` and `components`:
//!
//! ```rust
//! use token_resolver::TokenStore;
//!
//! let store = TokenStore::from_json(r#"{
//!     "primitives": { "spacing": { "md": "1rem" } },
//!     "semantic": { "spacing": { "gap": "primitives.spacing.md" } }
//! }"#).unwrap();
//!
//! let yaml = store.to_yaml().unwrap();
//! assert_eq!(TokenStore::from_yaml(&yaml).unwrap(), store);
//! ```
//!
//! # Overrides
//!
//! [`TokenStore::merge`] and [`TokenStore::with_overrides`] build a new store
//! from an existing one; hand it to [`TokenResolver::set_tokens`] to swap it
//! in. Replacement re-validates and clears the cache.

pub mod resolve;
pub mod store;
pub mod token;

pub use resolve::{
    CacheStats, CancellationToken, ResolutionCache, ResolvedToken, ResolverConfig, ResolverStats,
    TokenResolver,
};
pub use store::{default_tokens, validate, validate_all, Tier, TokenPath, TokenStore};
pub use token::{is_reference, ErrorKind, NotFoundKind, TokenError, TokenReference};
