//! Token errors.

use std::fmt;

/// Which segment of a token path could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundKind {
    /// The first segment is not one of `primitives`, `semantic`, `components`.
    Tier,
    /// The category map does not exist in the tier.
    Category,
    /// The key does not exist in the category.
    Token,
    /// No component with this name.
    Component,
    /// The component has no such variant.
    Variant,
    /// The variant has no such property.
    Property,
}

impl NotFoundKind {
    /// Returns a human-readable name for this sub-kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundKind::Tier => "tier",
            NotFoundKind::Category => "category",
            NotFoundKind::Token => "token",
            NotFoundKind::Component => "component",
            NotFoundKind::Variant => "variant",
            NotFoundKind::Property => "property",
        }
    }
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable machine-readable error codes.
///
/// Several [`TokenError`] variants can share a kind, and a
/// [`TokenError::Context`] wrapper reports the kind of the error it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyReference,
    InvalidTokenPath,
    InvalidTokenSegment,
    PrimitiveReference,
    EmptyCategory,
    InvalidComponent,
    TokenNotFound,
    CircularReference,
    DepthExceeded,
    Cancelled,
    Parse,
}

impl ErrorKind {
    /// Returns the snake_case code for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyReference => "empty_reference",
            ErrorKind::InvalidTokenPath => "invalid_token_path",
            ErrorKind::InvalidTokenSegment => "invalid_token_segment",
            ErrorKind::PrimitiveReference => "primitive_reference",
            ErrorKind::EmptyCategory => "empty_category",
            ErrorKind::InvalidComponent => "invalid_component",
            ErrorKind::TokenNotFound => "token_not_found",
            ErrorKind::CircularReference => "circular_reference",
            ErrorKind::DepthExceeded => "depth_exceeded",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned by classification, validation, lookup and resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// An empty string was given where a reference was required.
    #[error("token reference cannot be empty")]
    EmptyReference,

    /// The path has the wrong shape (no dot, too few or too many segments).
    #[error("invalid token path '{path}': {reason}")]
    InvalidTokenPath { path: String, reason: String },

    /// A path segment is empty or contains a character outside `[a-zA-Z0-9_-]`.
    #[error("invalid segment '{segment}' at position {position} in path '{path}'")]
    InvalidTokenSegment {
        path: String,
        segment: String,
        position: usize,
    },

    /// A primitive value classified as a reference.
    #[error("primitive token {category}.{key} contains reference '{value}' (primitives must be literals)")]
    PrimitiveReference {
        category: String,
        key: String,
        value: String,
    },

    /// A primitive category map exists but holds no tokens.
    #[error("primitive category '{category}' cannot be empty")]
    EmptyCategory { category: String },

    /// A component, variant or property is structurally incomplete.
    #[error("invalid component token: {reason}")]
    InvalidComponent { reason: String },

    /// A syntactically valid path that does not name a stored value.
    #[error("{kind} not found: '{segment}' (path: {path})")]
    NotFound {
        kind: NotFoundKind,
        segment: String,
        path: String,
    },

    /// A path was revisited while it was still being resolved.
    #[error("circular token reference detected at '{path}' (trail: {})", .trail.join(" -> "))]
    CircularReference { path: String, trail: Vec<String> },

    /// The reference chain is longer than the configured maximum.
    #[error("maximum resolution depth ({max_depth}) exceeded at '{path}'")]
    DepthExceeded { path: String, max_depth: usize },

    /// The cancellation token fired before or during resolution.
    #[error("token resolution cancelled")]
    Cancelled,

    /// A token document could not be parsed.
    #[error("failed to parse {format} token document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// An error located at a specific token path.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TokenError>,
    },
}

impl TokenError {
    /// Wraps this error with the location it occurred at.
    pub fn at(self, context: impl Into<String>) -> Self {
        TokenError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any [`TokenError::Context`] layers.
    pub fn root(&self) -> &TokenError {
        match self {
            TokenError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the machine-readable kind of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::EmptyReference => ErrorKind::EmptyReference,
            TokenError::InvalidTokenPath { .. } => ErrorKind::InvalidTokenPath,
            TokenError::InvalidTokenSegment { .. } => ErrorKind::InvalidTokenSegment,
            TokenError::PrimitiveReference { .. } => ErrorKind::PrimitiveReference,
            TokenError::EmptyCategory { .. } => ErrorKind::EmptyCategory,
            TokenError::InvalidComponent { .. } => ErrorKind::InvalidComponent,
            TokenError::NotFound { .. } => ErrorKind::TokenNotFound,
            TokenError::CircularReference { .. } => ErrorKind::CircularReference,
            TokenError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            TokenError::Cancelled => ErrorKind::Cancelled,
            TokenError::Parse { .. } => ErrorKind::Parse,
            TokenError::Context { source, .. } => source.kind(),
        }
    }

    /// Returns true for every `token_not_found` sub-kind.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::TokenNotFound
    }

    /// Returns true if this is (or wraps) a circular reference.
    pub fn is_circular(&self) -> bool {
        self.kind() == ErrorKind::CircularReference
    }

    /// Returns true for errors raised by the structural validator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyReference
                | ErrorKind::InvalidTokenPath
                | ErrorKind::InvalidTokenSegment
                | ErrorKind::PrimitiveReference
                | ErrorKind::EmptyCategory
                | ErrorKind::InvalidComponent
        )
    }
}
