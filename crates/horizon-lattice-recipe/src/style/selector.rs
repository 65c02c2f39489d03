//! Selector paths accumulated from nested style blocks.

use std::fmt;

/// The nesting path a declaration lives under.
///
/// The root path addresses the styled element itself. Each nested block
/// (pseudo-state, descendant, pseudo-element) appends its selector string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SelectorPath {
    segments: Vec<String>,
}

impl SelectorPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from its selector segments, outermost first.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend this path with a nested selector.
    pub fn child(&self, selector: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(selector.into());
        Self { segments }
    }

    /// Check whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The selector segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Nesting depth (0 for the root).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for SelectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("&");
        }
        f.write_str(&self.segments.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_without_mutating() {
        let root = SelectorPath::root();
        let hover = root.child("&:hover");
        let nested = hover.child("& svg");

        assert!(root.is_root());
        assert!(root.segments().is_empty());
        assert_eq!(hover.depth(), 1);
        assert_eq!(nested.segments(), ["&:hover", "& svg"]);
        assert_eq!(nested, SelectorPath::new(["&:hover", "& svg"]));
    }

    #[test]
    fn display() {
        assert_eq!(SelectorPath::root().to_string(), "&");
        assert_eq!(
            SelectorPath::new(["&:hover", "&::after"]).to_string(),
            "&:hover &::after"
        );
    }
}
