//! Built-in design token set.
//!
//! A complete default system: a color palette with grays and feedback
//! colors, spacing, radius, typography, borders, shadows, effects, animation,
//! z-index and breakpoints as primitives; purpose-named semantic colors,
//! spacing, typography and interactive tokens; and button, input, badge,
//! alert, card and modal components.
//!
//! The set validates and every leaf resolves to a literal.

use super::tokens::{CategoryMap, ComponentMap, TokenMap, TokenStore};

type Entries = &'static [(&'static str, &'static str)];

const PRIMITIVE_COLORS: Entries = &[
    ("primary", "hsl(217, 91%, 60%)"),
    ("secondary", "hsl(270, 50%, 60%)"),
    ("accent", "hsl(190, 90%, 56%)"),
    ("white", "hsl(0, 0%, 100%)"),
    ("black", "hsl(0, 0%, 0%)"),
    ("gray-50", "hsl(210, 20%, 98%)"),
    ("gray-100", "hsl(210, 20%, 95%)"),
    ("gray-200", "hsl(210, 16%, 93%)"),
    ("gray-300", "hsl(210, 14%, 89%)"),
    ("gray-400", "hsl(210, 12%, 78%)"),
    ("gray-500", "hsl(210, 10%, 64%)"),
    ("gray-600", "hsl(210, 10%, 48%)"),
    ("gray-700", "hsl(210, 12%, 36%)"),
    ("gray-800", "hsl(210, 16%, 24%)"),
    ("gray-900", "hsl(210, 20%, 14%)"),
    ("success", "hsl(142, 71%, 45%)"),
    ("warning", "hsl(45, 93%, 47%)"),
    ("error", "hsl(0, 84%, 60%)"),
    ("info", "hsl(200, 100%, 56%)"),
];

const PRIMITIVE_SPACING: Entries = &[
    ("xs", "0.5rem"),
    ("sm", "0.75rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
    ("2xl", "3rem"),
    ("3xl", "4rem"),
];

const PRIMITIVE_RADIUS: Entries = &[
    ("none", "0"),
    ("sm", "0.25rem"),
    ("md", "0.5rem"),
    ("lg", "0.75rem"),
    ("xl", "1rem"),
    ("full", "9999px"),
];

const PRIMITIVE_TYPOGRAPHY: Entries = &[
    ("font-size-xs", "0.75rem"),
    ("font-size-sm", "0.875rem"),
    ("font-size-base", "1rem"),
    ("font-size-lg", "1.125rem"),
    ("font-size-xl", "1.25rem"),
    ("font-size-2xl", "1.5rem"),
    ("font-size-3xl", "1.875rem"),
    ("font-size-4xl", "2.25rem"),
    ("font-weight-normal", "400"),
    ("font-weight-medium", "500"),
    ("font-weight-semibold", "600"),
    ("font-weight-bold", "700"),
    ("font-weight-extrabold", "800"),
    ("line-height-none", "1"),
    ("line-height-tight", "1.25"),
    ("line-height-snug", "1.375"),
    ("line-height-normal", "1.5"),
    ("line-height-relaxed", "1.75"),
    ("line-height-loose", "2"),
    (
        "font-family-sans",
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif",
    ),
    (
        "font-family-serif",
        "Georgia, Cambria, 'Times New Roman', Times, serif",
    ),
    (
        "font-family-mono",
        "'SF Mono', Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace",
    ),
    ("letter-spacing-tighter", "-0.05em"),
    ("letter-spacing-tight", "-0.025em"),
    ("letter-spacing-normal", "0em"),
    ("letter-spacing-wide", "0.025em"),
    ("letter-spacing-wider", "0.05em"),
];

const PRIMITIVE_BORDERS: Entries = &[
    ("border-width-none", "0"),
    ("border-width-thin", "1px"),
    ("border-width-medium", "2px"),
    ("border-width-thick", "4px"),
    ("border-style-solid", "solid"),
    ("border-style-dashed", "dashed"),
    ("border-style-dotted", "dotted"),
    ("border-style-double", "double"),
    ("border-style-none", "none"),
];

const PRIMITIVE_SHADOWS: Entries = &[
    ("none", "none"),
    ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    (
        "md",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    ),
    ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)"),
];

const PRIMITIVE_EFFECTS: Entries = &[
    ("opacity-0", "0"),
    ("opacity-25", "0.25"),
    ("opacity-50", "0.5"),
    ("opacity-75", "0.75"),
    ("opacity-100", "1"),
    ("blur-none", "0"),
    ("blur-sm", "4px"),
    ("blur-md", "8px"),
    ("blur-lg", "12px"),
    ("blur-xl", "16px"),
];

const PRIMITIVE_ANIMATION: Entries = &[
    ("duration-fast", "150ms"),
    ("duration-normal", "200ms"),
    ("duration-slow", "300ms"),
    ("duration-slower", "500ms"),
    ("easing-linear", "linear"),
    ("easing-in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("easing-out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("easing-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("easing-sharp", "cubic-bezier(0.4, 0, 0.6, 1)"),
    ("easing-emphasized", "cubic-bezier(0.2, 0, 0, 1)"),
];

const PRIMITIVE_Z_INDEX: Entries = &[
    ("base", "1"),
    ("dropdown", "10"),
    ("sticky", "20"),
    ("fixed", "30"),
    ("modal", "40"),
    ("popover", "50"),
    ("tooltip", "60"),
];

const PRIMITIVE_BREAKPOINTS: Entries = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

const SEMANTIC_COLORS: Entries = &[
    ("background", "primitives.colors.white"),
    ("background-subtle", "primitives.colors.gray-50"),
    ("background-muted", "primitives.colors.gray-100"),
    ("background-emphasis", "primitives.colors.gray-200"),
    ("foreground", "primitives.colors.gray-900"),
    ("foreground-subtle", "primitives.colors.gray-600"),
    ("foreground-muted", "primitives.colors.gray-500"),
    ("foreground-emphasis", "primitives.colors.black"),
    ("primary", "primitives.colors.primary"),
    ("primary-foreground", "primitives.colors.white"),
    ("secondary", "primitives.colors.gray-100"),
    ("secondary-foreground", "primitives.colors.gray-900"),
    ("accent", "primitives.colors.accent"),
    ("accent-foreground", "primitives.colors.white"),
    ("border", "primitives.colors.gray-300"),
    ("border-subtle", "primitives.colors.gray-200"),
    ("border-emphasis", "primitives.colors.gray-400"),
    ("ring", "primitives.colors.primary"),
    ("selection", "primitives.colors.primary"),
    ("success", "primitives.colors.success"),
    ("success-foreground", "primitives.colors.white"),
    ("warning", "primitives.colors.warning"),
    ("warning-foreground", "primitives.colors.white"),
    ("error", "primitives.colors.error"),
    ("error-foreground", "primitives.colors.white"),
    ("info", "primitives.colors.info"),
    ("info-foreground", "primitives.colors.white"),
];

const SEMANTIC_SPACING: Entries = &[
    ("component-tight", "primitives.spacing.xs"),
    ("component-default", "primitives.spacing.sm"),
    ("component-loose", "primitives.spacing.md"),
    ("layout-section", "primitives.spacing.2xl"),
    ("layout-page", "primitives.spacing.3xl"),
    ("stack-tight", "primitives.spacing.xs"),
    ("stack-default", "primitives.spacing.md"),
    ("stack-loose", "primitives.spacing.lg"),
];

const SEMANTIC_TYPOGRAPHY: Entries = &[
    ("heading-font-size", "primitives.typography.font-size-2xl"),
    ("heading-font-weight", "primitives.typography.font-weight-bold"),
    ("heading-line-height", "primitives.typography.line-height-tight"),
    ("body-font-size", "primitives.typography.font-size-base"),
    ("body-font-weight", "primitives.typography.font-weight-normal"),
    ("body-line-height", "primitives.typography.line-height-normal"),
    ("body-font-family", "primitives.typography.font-family-sans"),
    ("label-font-size", "primitives.typography.font-size-sm"),
    ("label-font-weight", "primitives.typography.font-weight-medium"),
    ("caption-font-size", "primitives.typography.font-size-xs"),
    ("caption-font-weight", "primitives.typography.font-weight-normal"),
    ("code-font-size", "primitives.typography.font-size-sm"),
    ("code-font-family", "primitives.typography.font-family-mono"),
];

const SEMANTIC_INTERACTIVE: Entries = &[
    ("border-radius-sm", "primitives.radius.sm"),
    ("border-radius-md", "primitives.radius.md"),
    ("border-radius-lg", "primitives.radius.lg"),
    ("shadow-sm", "primitives.shadows.sm"),
    ("shadow-md", "primitives.shadows.md"),
    ("shadow-lg", "primitives.shadows.lg"),
    ("transition-fast", "primitives.animation.duration-fast"),
    ("transition-normal", "primitives.animation.duration-normal"),
    ("transition-slow", "primitives.animation.duration-slow"),
];

const BUTTON_TEXT: Entries = &[
    ("border-radius", "semantic.interactive.border-radius-md"),
    ("padding", "primitives.spacing.sm primitives.spacing.md"),
    ("font-size", "semantic.typography.body-font-size"),
    ("font-weight", "primitives.typography.font-weight-medium"),
];

const BUTTON_PRIMARY: Entries = &[
    ("background-color", "semantic.colors.primary"),
    ("color", "semantic.colors.primary-foreground"),
    ("border", "none"),
    ("box-shadow", "none"),
    (
        "transition",
        "all semantic.interactive.transition-fast primitives.animation.easing-in-out",
    ),
];

const BUTTON_SECONDARY: Entries = &[
    ("background-color", "semantic.colors.secondary"),
    ("color", "semantic.colors.secondary-foreground"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.border",
    ),
];

const BUTTON_OUTLINE: Entries = &[
    ("background-color", "transparent"),
    ("color", "semantic.colors.primary"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.primary",
    ),
];

const BUTTON_GHOST: Entries = &[
    ("background-color", "transparent"),
    ("color", "semantic.colors.primary"),
    ("border", "none"),
];

const INPUT_BASE: Entries = &[
    ("background-color", "semantic.colors.background"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.border",
    ),
    ("border-radius", "semantic.interactive.border-radius-md"),
    ("padding", "primitives.spacing.sm primitives.spacing.sm"),
    ("color", "semantic.colors.foreground"),
    ("font-size", "semantic.typography.body-font-size"),
];

const INPUT_FOCUS: Entries = &[
    ("border-color", "semantic.colors.ring"),
    ("outline", "2px solid semantic.colors.ring"),
    ("outline-offset", "2px"),
];

const INPUT_ERROR: Entries = &[("border-color", "semantic.colors.error")];

const BADGE_DEFAULT: Entries = &[
    ("background-color", "semantic.colors.background-muted"),
    ("color", "semantic.colors.foreground-muted"),
    ("padding", "0.125rem primitives.spacing.xs"),
    ("border-radius", "primitives.radius.sm"),
    ("font-size", "semantic.typography.caption-font-size"),
    ("font-weight", "primitives.typography.font-weight-medium"),
];

const ALERT_BASE: Entries = &[
    ("padding", "primitives.spacing.md"),
    ("border-radius", "semantic.interactive.border-radius-md"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.border",
    ),
];

/// Alert tints as `(variant, hue and saturation)`.
const ALERT_TINTS: &[(&str, &str)] = &[
    ("success", "142, 71%"),
    ("warning", "45, 93%"),
    ("error", "0, 84%"),
    ("info", "200, 100%"),
];

const CARD_BASE: Entries = &[
    ("background-color", "semantic.colors.background"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.border",
    ),
    ("border-radius", "semantic.interactive.border-radius-lg"),
    ("padding", "primitives.spacing.lg"),
    ("box-shadow", "semantic.interactive.shadow-sm"),
];

const MODAL_BASE: Entries = &[
    ("background-color", "semantic.colors.background"),
    (
        "border",
        "primitives.borders.border-width-thin solid semantic.colors.border",
    ),
    ("border-radius", "semantic.interactive.border-radius-lg"),
    ("padding", "primitives.spacing.xl"),
    ("box-shadow", "semantic.interactive.shadow-lg"),
];

const MODAL_OVERLAY: Entries = &[("background-color", "rgba(0, 0, 0, 0.5)")];

fn map(entries: &[Entries]) -> TokenMap {
    entries
        .iter()
        .flat_map(|group| group.iter())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn categories(groups: &[(&str, Entries)]) -> CategoryMap {
    groups
        .iter()
        .map(|(name, entries)| (name.to_string(), map(&[*entries])))
        .collect()
}

fn components() -> ComponentMap {
    let mut components = ComponentMap::new();

    let button = components.entry("button".to_string()).or_default();
    for (variant, entries) in [
        ("primary", BUTTON_PRIMARY),
        ("secondary", BUTTON_SECONDARY),
        ("outline", BUTTON_OUTLINE),
        ("ghost", BUTTON_GHOST),
    ] {
        button.insert(variant.to_string(), map(&[entries, BUTTON_TEXT]));
    }

    let input = components.entry("input".to_string()).or_default();
    input.insert("base".to_string(), map(&[INPUT_BASE]));
    input.insert("focus".to_string(), map(&[INPUT_FOCUS]));
    input.insert("error".to_string(), map(&[INPUT_ERROR]));

    let badge = components.entry("badge".to_string()).or_default();
    badge.insert("default".to_string(), map(&[BADGE_DEFAULT]));
    for feedback in ["success", "warning", "error", "info"] {
        let mut props = TokenMap::new();
        props.insert(
            "background-color".to_string(),
            format!("semantic.colors.{}", feedback),
        );
        props.insert(
            "color".to_string(),
            format!("semantic.colors.{}-foreground", feedback),
        );
        badge.insert(feedback.to_string(), props);
    }

    let alert = components.entry("alert".to_string()).or_default();
    alert.insert("base".to_string(), map(&[ALERT_BASE]));
    for (variant, tint) in ALERT_TINTS {
        let mut props = TokenMap::new();
        props.insert("background-color".to_string(), format!("hsl({}, 97%)", tint));
        props.insert("border-color".to_string(), format!("hsl({}, 85%)", tint));
        props.insert("color".to_string(), format!("hsl({}, 25%)", tint));
        alert.insert(variant.to_string(), props);
    }

    let card = components.entry("card".to_string()).or_default();
    card.insert("base".to_string(), map(&[CARD_BASE]));

    let modal = components.entry("modal".to_string()).or_default();
    modal.insert("base".to_string(), map(&[MODAL_BASE]));
    modal.insert("overlay".to_string(), map(&[MODAL_OVERLAY]));

    components
}

/// Returns the built-in token set.
pub fn default_tokens() -> TokenStore {
    let primitives = categories(&[
        ("colors", PRIMITIVE_COLORS),
        ("spacing", PRIMITIVE_SPACING),
        ("radius", PRIMITIVE_RADIUS),
        ("typography", PRIMITIVE_TYPOGRAPHY),
        ("borders", PRIMITIVE_BORDERS),
        ("shadows", PRIMITIVE_SHADOWS),
        ("effects", PRIMITIVE_EFFECTS),
        ("animation", PRIMITIVE_ANIMATION),
        ("z-index", PRIMITIVE_Z_INDEX),
        ("breakpoints", PRIMITIVE_BREAKPOINTS),
    ]);
    let semantic = categories(&[
        ("colors", SEMANTIC_COLORS),
        ("spacing", SEMANTIC_SPACING),
        ("typography", SEMANTIC_TYPOGRAPHY),
        ("interactive", SEMANTIC_INTERACTIVE),
    ]);

    TokenStore::from_parts(primitives, semantic, components())
}

impl TokenStore {
    /// The built-in design system. See [`default_tokens`].
    pub fn defaults() -> Self {
        default_tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let store = default_tokens();
        assert_eq!(store.validate(), Ok(()));
        assert!(crate::store::validate_all(&store).is_empty());
    }

    #[test]
    fn test_defaults_shape() {
        let store = TokenStore::defaults();
        assert_eq!(store.primitives().len(), 10);
        assert_eq!(store.semantic_tokens().len(), 4);
        let names: Vec<&str> = store.components().keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["alert", "badge", "button", "card", "input", "modal"]
        );
        assert_eq!(store.components()["button"].len(), 4);
    }

    #[test]
    fn test_defaults_sample_values() {
        let store = default_tokens();
        assert_eq!(
            store.get_token("primitives.colors.primary").unwrap(),
            "hsl(217, 91%, 60%)"
        );
        assert_eq!(
            store.get_token("components.button.ghost.padding").unwrap(),
            "primitives.spacing.sm primitives.spacing.md"
        );
        assert_eq!(
            store.get_token("components.alert.info.color").unwrap(),
            "hsl(200, 100%, 25%)"
        );
        assert_eq!(
            store.get_token("components.badge.error.color").unwrap(),
            "semantic.colors.error-foreground"
        );
    }
}
