//! Property values carried through resolution.

use std::fmt;

/// The value assigned to a style property.
///
/// Theme tokens are opaque to the resolver: they pass through resolution
/// unchanged and are substituted by a downstream renderer (see
/// [`ResolvedStyleSet::substitute_tokens`](crate::resolve::ResolvedStyleSet::substitute_tokens)).
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::style::PropertyValue;
///
/// assert_eq!(PropertyValue::parse("40px"), PropertyValue::literal("40px"));
/// assert_eq!(PropertyValue::parse("{colors.primary}"), PropertyValue::token("colors.primary"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// A concrete value such as `40px` or `none`.
    Literal(String),
    /// A reference to a theme token such as `colors.primary`.
    Token(String),
}

impl PropertyValue {
    /// Create a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a theme token reference.
    pub fn token(name: impl Into<String>) -> Self {
        Self::Token(name.into())
    }

    /// Parse a raw value, treating `{name}` as a token reference.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(name) if !name.is_empty() && !name.contains(['{', '}']) => {
                Self::Token(name.trim().to_string())
            }
            _ => Self::Literal(raw.to_string()),
        }
    }

    /// The literal text or token name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) | Self::Token(value) => value,
        }
    }

    /// Get the literal text, if this is not a token.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Token(_) => None,
        }
    }

    /// Get the token name, if this is a token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(name) => Some(name),
            Self::Literal(_) => None,
        }
    }

    /// Check whether this value references a theme token.
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(value),
            Self::Token(name) => write!(f, "{{{name}}}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}
