//! Classification of token values into literals and path references.
//!
//! A token value is either a *literal* that can be used as-is (a hex color,
//! a CSS function call, a number with a unit, a keyword, or a compound value
//! with whitespace), or a *reference*: a dot-separated path such as
//! `semantic.colors.primary` that names another token.
//!
//! Classification is a pure function of the string. The rules are applied in
//! order and the first match wins:
//!
//! | # | Rule | Result |
//! |---|------|--------|
//! | 1 | empty (after trimming) | literal |
//! | 2 | contains whitespace | literal |
//! | 3 | starts with `#` | literal |
//! | 4 | starts with a CSS function (`calc(`, `rgb(`, `hsl(`, gradients, ...) | literal |
//! | 5 | signed number with an optional CSS unit | literal |
//! | 6 | no `.` | literal |
//! | 7 | every `.`-separated segment is non-empty and `[a-zA-Z0-9_-]` | reference |
//!
//! [`TokenReference::validate`] is stricter than classification: a value that
//! classifies as a literal but is shaped like an attempted path (for example
//! `colors.` or `colors..primary`) is checked as a path, so typos surface as
//! errors instead of being passed through as CSS.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::TokenError;

/// CSS function prefixes whose values are always literals.
pub const CSS_FUNCTION_PREFIXES: &[&str] = &[
    "calc(",
    "var(",
    "url(",
    "rgb(",
    "rgba(",
    "hsl(",
    "hsla(",
    "linear-gradient(",
    "radial-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
    "conic-gradient(",
];

/// Units accepted after a number.
pub const CSS_UNITS: &[&str] = &[
    "rem", "px", "em", "%", "vh", "vw", "vmin", "vmax", "pt", "cm", "mm", "in", "pc", "ex", "ch",
    "fr", "deg", "rad", "grad", "turn", "s", "ms", "dpi", "dpcm", "dppx",
];

/// Bare CSS keywords that never look like a mistyped path.
const CSS_KEYWORDS: &[&str] = &[
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "revert",
    "auto",
    "none",
    "normal",
    "bold",
    "bolder",
    "lighter",
    "italic",
    "oblique",
    "solid",
    "dashed",
    "dotted",
    "double",
    "groove",
    "ridge",
    "inset",
    "outset",
    "hidden",
    "visible",
    "collapse",
    "block",
    "inline",
    "inline-block",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "flow-root",
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "relative",
    "absolute",
    "fixed",
    "sticky",
    "static",
    "fit-content",
    "max-content",
    "min-content",
    "left",
    "right",
    "center",
    "justify",
];

static NUMBER_WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    let units = CSS_UNITS
        .iter()
        .map(|u| regex::escape(u))
        .collect::<Vec<_>>()
        .join("|");
    // units are case-insensitive in CSS
    let pattern = format!(r"(?i)^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:{})?$", units);
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid number pattern {pattern}: {e}"))
});

/// Returns true if `value` is a path reference rather than a literal.
///
/// # Example
///
/// ```rust
/// use token_resolver::is_reference;
///
/// assert!(is_reference("semantic.colors.primary"));
/// assert!(!is_reference("hsl(217, 91%, 60%)"));
/// assert!(!is_reference("0.5rem"));
/// assert!(!is_reference("1px solid semantic.colors.border"));
/// ```
pub fn is_reference(value: &str) -> bool {
    let value = value.trim();

    if value.is_empty() {
        return false;
    }
    if value.contains(char::is_whitespace) {
        return false;
    }
    if is_css_literal(value) {
        return false;
    }
    if !value.contains('.') {
        return false;
    }

    value
        .split('.')
        .all(|segment| !segment.is_empty() && is_valid_segment(segment))
}

/// Returns true if a path segment only uses `[a-zA-Z0-9_-]`.
pub fn is_valid_segment(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Rules 3-5: hex colors, CSS functions and numbers.
fn is_css_literal(value: &str) -> bool {
    value.starts_with('#')
        || CSS_FUNCTION_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
        || NUMBER_WITH_UNIT.is_match(value)
}

/// Values that are clearly CSS even though they were not matched by a rule.
fn has_css_indicator(value: &str) -> bool {
    if is_css_literal(value) {
        return true;
    }
    if value.contains('(') && value.contains(')') {
        return true;
    }
    let lower = value.to_ascii_lowercase();
    CSS_KEYWORDS.iter().any(|keyword| *keyword == lower)
}

/// True if every char could appear in a path (segments plus the `.` delimiter).
fn is_path_shaped(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// A token value, interpreted as either a literal or a path reference.
///
/// `TokenReference` is a thin wrapper over the raw string. It never changes
/// the value; [`path`](Self::path) only trims surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenReference(String);

impl TokenReference {
    /// Wraps a raw token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the trimmed value, which is the lookup path for references.
    pub fn path(&self) -> &str {
        self.0.trim()
    }

    /// See [`is_reference`].
    pub fn is_reference(&self) -> bool {
        is_reference(&self.0)
    }

    /// Splits a reference into its segments.
    ///
    /// Returns `None` for literals.
    pub fn segments(&self) -> Option<Vec<&str>> {
        if self.is_reference() {
            Some(self.path().split('.').collect())
        } else {
            None
        }
    }

    /// Checks that the value is well-formed.
    ///
    /// References must have at least two non-empty segments made only of
    /// `[a-zA-Z0-9_-]`. Literals pass, unless they look like a mistyped path
    /// (see [`is_likely_malformed`](Self::is_likely_malformed)), in which case
    /// the same path checks apply.
    ///
    /// # Errors
    ///
    /// - [`TokenError::EmptyReference`] for an empty or blank value
    /// - [`TokenError::InvalidTokenPath`] for a wrong segment count
    /// - [`TokenError::InvalidTokenSegment`] for an empty or illegal segment
    pub fn validate(&self) -> Result<(), TokenError> {
        let value = self.path();
        if value.is_empty() {
            return Err(TokenError::EmptyReference);
        }

        if self.is_reference() || self.is_likely_malformed() {
            return validate_path(value);
        }

        Ok(())
    }

    /// Returns true if a literal looks like an attempted path.
    ///
    /// That is: it contains a dot and at least one letter, has no CSS
    /// indicator (hex, function call, number with unit, keyword), and is
    /// longer than two characters. Illegal characters do not exempt a value,
    /// so `semantic.colors.primary!` is flagged. With whitespace, the first
    /// word is checked instead and must use only path characters, so
    /// `colors.primary color` is flagged while `0.5rem 1rem` is not.
    pub fn is_likely_malformed(&self) -> bool {
        let value = self.path();
        if value.is_empty() || self.is_reference() {
            return false;
        }
        if value.contains('(') && value.contains(')') {
            return false;
        }

        if value.contains(char::is_whitespace) {
            let first = value.split_whitespace().next().unwrap_or_default();
            return first.contains('.')
                && !has_css_indicator(first)
                && is_path_shaped(first)
                && first.split('.').filter(|s| !s.is_empty()).count() >= 2;
        }

        value.len() > 2
            && value.contains('.')
            && !has_css_indicator(value)
            && value.chars().any(|c| c.is_ascii_alphabetic())
    }
}

/// Checks a string as a dotted path, regardless of how it classifies.
pub fn validate_path(path: &str) -> Result<(), TokenError> {
    if !path.contains('.') {
        return Err(TokenError::InvalidTokenPath {
            path: path.to_string(),
            reason: "path must contain at least one dot".to_string(),
        });
    }

    let segments: Vec<&str> = path.split('.').collect();
    if segments.len() < 2 {
        return Err(TokenError::InvalidTokenPath {
            path: path.to_string(),
            reason: "path must have at least 2 segments".to_string(),
        });
    }

    for (position, segment) in segments.iter().enumerate() {
        if segment.is_empty() || !is_valid_segment(segment) {
            return Err(TokenError::InvalidTokenSegment {
                path: path.to_string(),
                segment: segment.to_string(),
                position,
            });
        }
    }

    Ok(())
}

impl std::fmt::Display for TokenReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TokenReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for TokenReference {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl AsRef<str> for TokenReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
