//! Token storage and structural validation.
//!
//! - [`TokenStore`]: the three-tier store (primitives, semantic, components)
//! - [`Tier`] / [`TokenPath`]: typed addressing into the store
//! - [`validate`] / [`validate_all`]: structural checks run before resolution
//! - [`default_tokens`]: the built-in design system
//!
//! Primitives hold literals only. Semantic tokens name a purpose and usually
//! point at primitives. Component tokens describe one property of one variant
//! of a component and point at either tier below.

mod defaults;
mod tokens;
mod validator;

pub use defaults::default_tokens;
pub use tokens::{
    CategoryMap, ComponentMap, PropertyMap, Tier, TokenMap, TokenPath, TokenStore, VariantMap,
};
pub use validator::{validate, validate_all, validate_value};
