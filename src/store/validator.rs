//! Structural validation of a token store.
//!
//! Validation is a read-only pass over every tier:
//!
//! - **Primitives**: categories must be non-empty and every value must be a
//!   well-formed literal. A value that classifies as a reference is a
//!   [`TokenError::PrimitiveReference`].
//! - **Semantic**: every value must be non-empty, and every reference in it
//!   must be well-formed.
//! - **Components**: names must be non-empty, every component needs at least
//!   one variant and every variant at least one property; values follow the
//!   semantic rules.
//!
//! Values containing whitespace are *compound* (`1px solid semantic.colors.border`)
//! and are checked part by part, except a value with a single parenthesised
//! group (`0 1px 2px rgba(0, 0, 0, 0.1)`), which is checked as one unit.
//!
//! Errors carry the tier path of the offending leaf via [`TokenError::Context`].

use super::tokens::{CategoryMap, Tier, TokenStore};
use crate::token::{TokenError, TokenReference};

/// Validates `store`, returning the first structural error in key order.
pub fn validate(store: &TokenStore) -> Result<(), TokenError> {
    let mut first = None;
    visit(store, &mut |err| {
        first = Some(err);
        false
    });
    match first {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validates `store`, collecting every structural error in key order.
///
/// The first element, if any, is the error [`validate`] returns.
pub fn validate_all(store: &TokenStore) -> Vec<TokenError> {
    let mut errors = Vec::new();
    visit(store, &mut |err| {
        errors.push(err);
        true
    });
    errors
}

/// Walks the store, reporting each error to `report`. Stops when it returns false.
fn visit(store: &TokenStore, report: &mut dyn FnMut(TokenError) -> bool) {
    if !visit_primitives(&store.primitives, report) {
        return;
    }
    if !visit_semantic(&store.semantic, report) {
        return;
    }
    visit_components(store, report);
}

fn visit_primitives(
    primitives: &CategoryMap,
    report: &mut dyn FnMut(TokenError) -> bool,
) -> bool {
    for (category, tokens) in primitives {
        let location = format!("{}.{}", Tier::Primitives, category);
        if category.is_empty() || tokens.is_empty() {
            let err = TokenError::EmptyCategory {
                category: category.clone(),
            };
            if !report(err.at(location)) {
                return false;
            }
            continue;
        }

        for (key, value) in tokens {
            if let Err(err) = check_primitive(category, key, value) {
                if !report(err.at(format!("{}.{}", location, key))) {
                    return false;
                }
            }
        }
    }
    true
}

fn check_primitive(category: &str, key: &str, value: &str) -> Result<(), TokenError> {
    let reference = TokenReference::new(value);
    if reference.is_reference() {
        return Err(TokenError::PrimitiveReference {
            category: category.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    reference.validate()
}

fn visit_semantic(semantic: &CategoryMap, report: &mut dyn FnMut(TokenError) -> bool) -> bool {
    for (category, tokens) in semantic {
        for (key, value) in tokens {
            if let Err(err) = validate_value(value) {
                let location = format!("{}.{}.{}", Tier::Semantic, category, key);
                if !report(err.at(location)) {
                    return false;
                }
            }
        }
    }
    true
}

fn visit_components(store: &TokenStore, report: &mut dyn FnMut(TokenError) -> bool) -> bool {
    for (component, variants) in &store.components {
        let location = format!("{}.{}", Tier::Components, component);

        if component.is_empty() {
            let err = TokenError::InvalidComponent {
                reason: "component name cannot be empty".to_string(),
            };
            if !report(err.at(location)) {
                return false;
            }
            continue;
        }
        if variants.is_empty() {
            let err = TokenError::InvalidComponent {
                reason: format!("component '{}' has no variants", component),
            };
            if !report(err.at(location)) {
                return false;
            }
            continue;
        }

        for (variant, properties) in variants {
            let location = format!("{}.{}", location, variant);

            if variant.is_empty() {
                let err = TokenError::InvalidComponent {
                    reason: format!("variant name cannot be empty in component '{}'", component),
                };
                if !report(err.at(location)) {
                    return false;
                }
                continue;
            }
            if properties.is_empty() {
                let err = TokenError::InvalidComponent {
                    reason: format!("variant '{}.{}' has no properties", component, variant),
                };
                if !report(err.at(location)) {
                    return false;
                }
                continue;
            }

            for (property, value) in properties {
                let location = format!("{}.{}", location, property);
                let result = if property.is_empty() {
                    Err(TokenError::InvalidComponent {
                        reason: format!(
                            "property name cannot be empty in '{}.{}'",
                            component, variant
                        ),
                    })
                } else if value.trim().is_empty() {
                    Err(TokenError::InvalidComponent {
                        reason: format!(
                            "empty value for property '{}.{}.{}'",
                            component, variant, property
                        ),
                    })
                } else {
                    validate_value(value)
                };

                if let Err(err) = result {
                    if !report(err.at(location)) {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Checks a semantic or component value, splitting compound values.
///
/// # Errors
///
/// [`TokenError::EmptyReference`] for a blank value, otherwise the error of
/// the first malformed part.
pub fn validate_value(value: &str) -> Result<(), TokenError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TokenError::EmptyReference);
    }

    if !trimmed.contains(char::is_whitespace) || is_single_group(trimmed) {
        return TokenReference::new(trimmed).validate();
    }

    for part in trimmed.split_whitespace() {
        TokenReference::new(part).validate()?;
    }
    Ok(())
}

/// Exactly one `(` and one `)`: a single CSS function call with inner spaces.
fn is_single_group(value: &str) -> bool {
    value.matches('(').count() == 1 && value.matches(')').count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ErrorKind;

    fn base() -> TokenStore {
        TokenStore::new()
            .primitive("colors", "primary", "hsl(217, 91%, 60%)")
            .primitive("colors", "border", "#e5e7eb")
            .primitive("spacing", "sm", "0.5rem")
            .primitive("spacing", "md", "1rem")
            .semantic("colors", "primary", "primitives.colors.primary")
            .semantic("spacing", "inset", "primitives.spacing.sm primitives.spacing.md")
            .component("button", "primary", "background-color", "semantic.colors.primary")
            .component("button", "primary", "border", "1px solid primitives.colors.border")
            .component("card", "base", "shadow", "0 1px 2px rgba(0, 0, 0, 0.05)")
    }

    // =========================================================================
    // Valid stores
    // =========================================================================

    #[test]
    fn test_valid_store() {
        assert_eq!(validate(&base()), Ok(()));
        assert!(validate_all(&base()).is_empty());
    }

    #[test]
    fn test_empty_store_is_valid() {
        assert_eq!(validate(&TokenStore::new()), Ok(()));
    }

    #[test]
    fn test_multi_function_shadow_is_valid() {
        let store = base().component(
            "card",
            "raised",
            "shadow",
            "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
        );
        assert_eq!(validate(&store), Ok(()));
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    #[test]
    fn test_primitive_reference_rejected() {
        let store = base().primitive("colors", "alias", "primitives.colors.primary");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PrimitiveReference);
        assert_eq!(
            err.root(),
            &TokenError::PrimitiveReference {
                category: "colors".to_string(),
                key: "alias".to_string(),
                value: "primitives.colors.primary".to_string(),
            }
        );
        assert!(err.to_string().starts_with("primitives.colors.alias:"));
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut store = base();
        store.primitives.insert("shadows".to_string(), Default::default());
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCategory);
    }

    #[test]
    fn test_primitive_uppercase_unit_is_literal() {
        let store = base()
            .primitive("spacing", "lg", "1.5REM")
            .primitive("spacing", "xs", "0.5Px");
        assert_eq!(validate(&store), Ok(()));
    }

    #[test]
    fn test_primitive_malformed_literal_rejected() {
        let store = base().primitive("colors", "typo", "colors.");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenSegment);
    }

    // =========================================================================
    // Semantic
    // =========================================================================

    #[test]
    fn test_semantic_malformed_reference() {
        let store = base().semantic("colors", "broken", "semantic..primary");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenSegment);
        assert!(err.to_string().starts_with("semantic.colors.broken:"));
    }

    #[test]
    fn test_semantic_illegal_character_rejected() {
        let store = base().semantic("colors", "typo", "primitives.colors.primary!");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenSegment);
        assert!(err.to_string().starts_with("semantic.colors.typo:"));
        assert!(matches!(
            err.root(),
            TokenError::InvalidTokenSegment { position: 2, .. }
        ));
    }

    #[test]
    fn test_semantic_empty_value() {
        let store = base().semantic("colors", "blank", "  ");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyReference);
    }

    #[test]
    fn test_compound_part_is_validated() {
        let store = base().semantic("spacing", "bad", "primitives.spacing.sm spacing.");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenSegment);
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[test]
    fn test_component_without_variants() {
        let mut store = base();
        store.components.insert("chip".to_string(), Default::default());
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidComponent);
    }

    #[test]
    fn test_variant_without_properties() {
        let mut store = base();
        store
            .components
            .entry("button".to_string())
            .or_default()
            .insert("ghost".to_string(), Default::default());
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidComponent);
        assert!(err.to_string().contains("button.ghost"));
    }

    #[test]
    fn test_empty_property_name_and_value() {
        let store = base().component("button", "primary", "", "1rem");
        assert_eq!(validate(&store).unwrap_err().kind(), ErrorKind::InvalidComponent);

        let store = base().component("button", "primary", "padding", "");
        assert_eq!(validate(&store).unwrap_err().kind(), ErrorKind::InvalidComponent);
    }

    #[test]
    fn test_component_illegal_character_rejected() {
        let store = base().component("link", "default", "color", "semantic.colors.prim@ry");
        let err = validate(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenSegment);
        assert!(err.to_string().contains("link.default.color"));
        assert!(matches!(
            err.root(),
            TokenError::InvalidTokenSegment { segment, .. } if segment == "prim@ry"
        ));
    }

    #[test]
    fn test_empty_component_name() {
        let store = base().component("", "primary", "color", "#fff");
        assert_eq!(validate(&store).unwrap_err().kind(), ErrorKind::InvalidComponent);
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    #[test]
    fn test_validate_all_collects_in_order() {
        let store = base()
            .primitive("colors", "alias", "semantic.colors.primary")
            .semantic("colors", "broken", "colors..x")
            .component("button", "primary", "color", "");

        let errors = validate_all(&store);
        let kinds: Vec<ErrorKind> = errors.iter().map(TokenError::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::PrimitiveReference,
                ErrorKind::InvalidTokenSegment,
                ErrorKind::InvalidComponent,
            ]
        );
        assert_eq!(validate(&store), Err(errors[0].clone()));
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value("semantic.colors.primary").is_ok());
        assert!(validate_value("all 150ms cubic-bezier(0.4, 0, 0.2, 1)").is_ok());
        assert!(validate_value("1px solid semantic.colors.border").is_ok());
        assert_eq!(validate_value(""), Err(TokenError::EmptyReference));
    }
}
