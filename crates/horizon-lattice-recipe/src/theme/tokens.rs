//! Theme token lookup.

use std::collections::HashMap;

/// Source of concrete values for theme tokens.
///
/// Implemented by whatever theming layer the renderer uses. The resolver
/// never consults a token source; see
/// [`ResolvedStyleSet::substitute_tokens`](crate::resolve::ResolvedStyleSet::substitute_tokens).
pub trait TokenSource {
    /// Look up the concrete value of a token.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl TokenSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A simple in-memory token table.
///
/// Names may be written with a leading `--` (CSS custom-property style);
/// it is stripped on both insert and lookup.
#[derive(Debug, Clone, Default)]
pub struct ThemeTokens {
    tokens: HashMap<String, String>,
}

impl ThemeTokens {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.tokens.insert(name, value.into());
    }

    /// Set a token, returning the table for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a token value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.tokens.get(name).map(|s| s.as_str())
    }

    /// Check if a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over all tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TokenSource for ThemeTokens {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tokens = Self::new();
        for (name, value) in iter {
            tokens.set(name, value);
        }
        tokens
    }
}
