//! The three-tier token store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::token::{NotFoundKind, TokenError};

/// `key -> value` within one category.
pub type TokenMap = BTreeMap<String, String>;

/// `category -> key -> value`, the shape of the primitives and semantic tiers.
pub type CategoryMap = BTreeMap<String, TokenMap>;

/// `property -> value` for one component variant.
pub type PropertyMap = BTreeMap<String, String>;

/// `variant -> property -> value` for one component.
pub type VariantMap = BTreeMap<String, PropertyMap>;

/// `component -> variant -> property -> value`.
pub type ComponentMap = BTreeMap<String, VariantMap>;

/// One of the three layers of the token store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Raw literals; the base case of resolution.
    Primitives,
    /// Purpose-named tokens, usually referencing primitives.
    Semantic,
    /// Per-component variant properties.
    Components,
}

impl Tier {
    /// The first path segment that addresses this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Primitives => "primitives",
            Tier::Semantic => "semantic",
            Tier::Components => "components",
        }
    }

    /// Number of path segments after the tier name.
    pub fn depth(self) -> usize {
        match self {
            Tier::Primitives | Tier::Semantic => 2,
            Tier::Components => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primitives" => Ok(Tier::Primitives),
            "semantic" => Ok(Tier::Semantic),
            "components" => Ok(Tier::Components),
            other => Err(TokenError::NotFound {
                kind: NotFoundKind::Tier,
                segment: other.to_string(),
                path: other.to_string(),
            }),
        }
    }
}

/// A fully-qualified token address, split by tier.
///
/// # Example
///
/// ```rust
/// use token_resolver::{Tier, TokenPath};
///
/// let path = TokenPath::parse("components.button.primary.color").unwrap();
/// assert_eq!(path.tier(), Tier::Components);
/// assert_eq!(path.to_string(), "components.button.primary.color");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenPath<'a> {
    Primitive {
        category: &'a str,
        key: &'a str,
    },
    Semantic {
        category: &'a str,
        key: &'a str,
    },
    Component {
        component: &'a str,
        variant: &'a str,
        property: &'a str,
    },
}

impl<'a> TokenPath<'a> {
    /// Parses `tier.category.key` or `components.component.variant.property`.
    ///
    /// # Errors
    ///
    /// - [`TokenError::EmptyReference`] for an empty path
    /// - [`TokenError::NotFound`] with [`NotFoundKind::Tier`] for an unknown tier
    /// - [`TokenError::InvalidTokenPath`] when the segment count does not fit the tier
    pub fn parse(path: &'a str) -> Result<Self, TokenError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(TokenError::EmptyReference);
        }

        let segments: Vec<&'a str> = path.split('.').collect();
        let tier: Tier = segments[0].parse().map_err(|_| TokenError::NotFound {
            kind: NotFoundKind::Tier,
            segment: segments[0].to_string(),
            path: path.to_string(),
        })?;

        let rest = &segments[1..];
        if rest.len() != tier.depth() {
            let shape = match tier {
                Tier::Components => "components.component.variant.property",
                _ => "tier.category.key",
            };
            return Err(TokenError::InvalidTokenPath {
                path: path.to_string(),
                reason: format!(
                    "{} paths need {} segments after the tier ({})",
                    tier,
                    tier.depth(),
                    shape
                ),
            });
        }

        Ok(match tier {
            Tier::Primitives => TokenPath::Primitive {
                category: rest[0],
                key: rest[1],
            },
            Tier::Semantic => TokenPath::Semantic {
                category: rest[0],
                key: rest[1],
            },
            Tier::Components => TokenPath::Component {
                component: rest[0],
                variant: rest[1],
                property: rest[2],
            },
        })
    }

    /// The tier this path addresses.
    pub fn tier(&self) -> Tier {
        match self {
            TokenPath::Primitive { .. } => Tier::Primitives,
            TokenPath::Semantic { .. } => Tier::Semantic,
            TokenPath::Component { .. } => Tier::Components,
        }
    }
}

impl fmt::Display for TokenPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPath::Primitive { category, key } => write!(f, "primitives.{}.{}", category, key),
            TokenPath::Semantic { category, key } => write!(f, "semantic.{}.{}", category, key),
            TokenPath::Component {
                component,
                variant,
                property,
            } => write!(f, "components.{}.{}.{}", component, variant, property),
        }
    }
}

/// A layered store of design tokens.
///
/// The store is plain data: it does no resolution and no caching. Build it
/// with the fluent methods, or parse it from a JSON/YAML document with
/// exactly the keys `primitives`, `semantic` and `components`.
///
/// # Example
///
/// ```rust
/// use token_resolver::TokenStore;
///
/// let store = TokenStore::new()
///     // Primitives - literals only
///     .primitive("colors", "blue-500", "hsl(217, 91%, 60%)")
///     // Semantic - references into primitives
///     .semantic("colors", "primary", "primitives.colors.blue-500")
///     // Components - references into semantic or primitives
///     .component("button", "primary", "background-color", "semantic.colors.primary");
///
/// assert!(store.validate().is_ok());
/// assert_eq!(
///     store.get_token("semantic.colors.primary").unwrap(),
///     "primitives.colors.blue-500"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenStore {
    #[serde(default)]
    pub(crate) primitives: CategoryMap,
    #[serde(default)]
    pub(crate) semantic: CategoryMap,
    #[serde(default)]
    pub(crate) components: ComponentMap,
}

impl TokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already-built tier maps.
    pub fn from_parts(
        primitives: CategoryMap,
        semantic: CategoryMap,
        components: ComponentMap,
    ) -> Self {
        Self {
            primitives,
            semantic,
            components,
        }
    }

    /// Adds a primitive token, returning the updated store for chaining.
    pub fn primitive(mut self, category: &str, key: &str, value: impl Into<String>) -> Self {
        self.primitives
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Adds a semantic token, returning the updated store for chaining.
    pub fn semantic(mut self, category: &str, key: &str, value: impl Into<String>) -> Self {
        self.semantic
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Adds a component property, returning the updated store for chaining.
    pub fn component(
        mut self,
        component: &str,
        variant: &str,
        property: &str,
        value: impl Into<String>,
    ) -> Self {
        self.components
            .entry(component.to_string())
            .or_default()
            .entry(variant.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
        self
    }

    /// The primitives tier.
    pub fn primitives(&self) -> &CategoryMap {
        &self.primitives
    }

    /// The semantic tier.
    pub fn semantic_tokens(&self) -> &CategoryMap {
        &self.semantic
    }

    /// The components tier.
    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Total number of leaf values across all tiers.
    pub fn len(&self) -> usize {
        let flat = |tier: &CategoryMap| tier.values().map(BTreeMap::len).sum::<usize>();
        let components: usize = self
            .components
            .values()
            .flat_map(|variants| variants.values())
            .map(BTreeMap::len)
            .sum();
        flat(&self.primitives) + flat(&self.semantic) + components
    }

    /// Returns true if no tier holds any value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every leaf as `(full path, raw value)`, tier by tier in key order.
    pub fn leaves(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        let primitives = self.primitives.iter().flat_map(|(category, tokens)| {
            tokens.iter().map(move |(key, value)| {
                (format!("primitives.{}.{}", category, key), value.as_str())
            })
        });
        let semantic = self.semantic.iter().flat_map(|(category, tokens)| {
            tokens.iter().map(move |(key, value)| {
                (format!("semantic.{}.{}", category, key), value.as_str())
            })
        });
        let components = self.components.iter().flat_map(|(component, variants)| {
            variants.iter().flat_map(move |(variant, props)| {
                props.iter().map(move |(property, value)| {
                    (
                        format!("components.{}.{}.{}", component, variant, property),
                        value.as_str(),
                    )
                })
            })
        });
        primitives.chain(semantic).chain(components)
    }

    /// Looks up the raw value at `path` without resolving it.
    ///
    /// The value may itself be a reference. Use a
    /// [`TokenResolver`](crate::TokenResolver) to follow it to a literal.
    ///
    /// # Errors
    ///
    /// Returns a path-shape error from [`TokenPath::parse`], or a
    /// [`TokenError::NotFound`] naming the first missing segment.
    pub fn get_token(&self, path: &str) -> Result<&str, TokenError> {
        let parsed = TokenPath::parse(path)?;
        self.lookup(&parsed)
    }

    /// Looks up an already-parsed path.
    pub fn lookup(&self, path: &TokenPath<'_>) -> Result<&str, TokenError> {
        let not_found = |kind: NotFoundKind, segment: &str| TokenError::NotFound {
            kind,
            segment: segment.to_string(),
            path: path.to_string(),
        };

        match *path {
            TokenPath::Primitive { category, key } => {
                lookup_category(&self.primitives, category, key, not_found)
            }
            TokenPath::Semantic { category, key } => {
                lookup_category(&self.semantic, category, key, not_found)
            }
            TokenPath::Component {
                component,
                variant,
                property,
            } => {
                let variants = self
                    .components
                    .get(component)
                    .ok_or_else(|| not_found(NotFoundKind::Component, component))?;
                let props = variants
                    .get(variant)
                    .ok_or_else(|| not_found(NotFoundKind::Variant, variant))?;
                props
                    .get(property)
                    .map(String::as_str)
                    .ok_or_else(|| not_found(NotFoundKind::Property, property))
            }
        }
    }

    /// Returns true if `path` names a stored value.
    pub fn contains(&self, path: &str) -> bool {
        self.get_token(path).is_ok()
    }

    /// Overlays `overrides` on top of this store, leaf by leaf.
    ///
    /// Values present in `overrides` win; everything else is kept. The result
    /// is a new store, typically handed to
    /// [`TokenResolver::set_tokens`](crate::TokenResolver::set_tokens).
    ///
    /// # Example
    ///
    /// ```rust
    /// use token_resolver::TokenStore;
    ///
    /// let light = TokenStore::new()
    ///     .primitive("colors", "white", "#fff")
    ///     .primitive("colors", "black", "#000")
    ///     .semantic("colors", "background", "primitives.colors.white");
    /// let dark = TokenStore::new().semantic("colors", "background", "primitives.colors.black");
    ///
    /// let merged = light.merge(&dark);
    /// assert_eq!(
    ///     merged.get_token("semantic.colors.background").unwrap(),
    ///     "primitives.colors.black"
    /// );
    /// ```
    pub fn merge(&self, overrides: &TokenStore) -> TokenStore {
        let mut merged = self.clone();
        merge_categories(&mut merged.primitives, &overrides.primitives);
        merge_categories(&mut merged.semantic, &overrides.semantic);
        for (component, variants) in &overrides.components {
            let target = merged.components.entry(component.clone()).or_default();
            for (variant, props) in variants {
                target
                    .entry(variant.clone())
                    .or_default()
                    .extend(props.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        merged
    }

    /// Applies flat `path -> value` overrides, creating missing maps as needed.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first path that is not a valid
    /// tier-qualified address.
    pub fn with_overrides<I, K, V>(&self, overrides: I) -> Result<TokenStore, TokenError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut updated = self.clone();
        for (path, value) in overrides {
            let path = path.as_ref();
            let value = value.into();
            match TokenPath::parse(path).map_err(|e| e.at(path))? {
                TokenPath::Primitive { category, key } => {
                    updated = updated.primitive(category, key, value);
                }
                TokenPath::Semantic { category, key } => {
                    updated = updated.semantic(category, key, value);
                }
                TokenPath::Component {
                    component,
                    variant,
                    property,
                } => {
                    updated = updated.component(component, variant, property, value);
                }
            }
        }
        Ok(updated)
    }

    /// Validates the structure of the store.
    ///
    /// See [`validate`](crate::store::validate).
    pub fn validate(&self) -> Result<(), TokenError> {
        super::validator::validate(self)
    }

    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self, TokenError> {
        let store: TokenStore = serde_json::from_str(json).map_err(|e| TokenError::Parse {
            format: "JSON",
            message: e.to_string(),
        })?;
        store.validate()?;
        Ok(store)
    }

    /// Serializes the store to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TokenError> {
        serde_json::to_string_pretty(self).map_err(|e| TokenError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Parses a YAML document and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, TokenError> {
        let store: TokenStore = serde_yaml::from_str(yaml).map_err(|e| TokenError::Parse {
            format: "YAML",
            message: e.to_string(),
        })?;
        store.validate()?;
        Ok(store)
    }

    /// Serializes the store to YAML.
    pub fn to_yaml(&self) -> Result<String, TokenError> {
        serde_yaml::to_string(self).map_err(|e| TokenError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }
}

fn lookup_category<'s, F>(
    tier: &'s CategoryMap,
    category: &str,
    key: &str,
    not_found: F,
) -> Result<&'s str, TokenError>
where
    F: Fn(NotFoundKind, &str) -> TokenError,
{
    let tokens = tier
        .get(category)
        .ok_or_else(|| not_found(NotFoundKind::Category, category))?;
    tokens
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| not_found(NotFoundKind::Token, key))
}

fn merge_categories(base: &mut CategoryMap, overrides: &CategoryMap) {
    for (category, tokens) in overrides {
        base.entry(category.clone())
            .or_default()
            .extend(tokens.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
