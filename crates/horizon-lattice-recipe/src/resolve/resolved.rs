//! The output of variant resolution.

use crate::style::{PropertyValue, SelectorPath};
use crate::theme::TokenSource;

/// One final `(selector path, property, value)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleDeclaration {
    /// Where the declaration applies.
    pub selector: SelectorPath,
    /// Property name as written in the recipe (e.g. `marginBottom`).
    pub property: String,
    /// Final value after all overrides.
    pub value: PropertyValue,
}

/// The ordered declarations produced by resolving a recipe.
///
/// Root declarations come first, followed by nested selectors in the order
/// they were first encountered. Theme tokens are left unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyleSet {
    declarations: Vec<StyleDeclaration>,
}

impl ResolvedStyleSet {
    pub(crate) fn from_declarations(declarations: Vec<StyleDeclaration>) -> Self {
        Self { declarations }
    }

    /// Get the value of a property under a selector path.
    pub fn get(&self, selector: &SelectorPath, property: &str) -> Option<&PropertyValue> {
        self.declarations
            .iter()
            .find(|d| d.selector == *selector && d.property == property)
            .map(|d| &d.value)
    }

    /// Get the raw value of a root-level property.
    pub fn root_value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.selector.is_root() && d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Iterate over the declarations applied to the element itself.
    pub fn root(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter().filter(|d| d.selector.is_root())
    }

    /// Iterate over the declarations under one selector path.
    pub fn declarations_for<'a>(
        &'a self,
        selector: &'a SelectorPath,
    ) -> impl Iterator<Item = &'a StyleDeclaration> + 'a {
        self.declarations
            .iter()
            .filter(move |d| d.selector == *selector)
    }

    /// Distinct selector paths, in output order.
    pub fn selectors(&self) -> Vec<&SelectorPath> {
        let mut selectors: Vec<&SelectorPath> = vec![];
        for declaration in &self.declarations {
            if !selectors.contains(&&declaration.selector) {
                selectors.push(&declaration.selector);
            }
        }
        selectors
    }

    /// Iterate over all declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check whether nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Token names still referenced by this set, in first-use order.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = vec![];
        for name in self.declarations.iter().filter_map(|d| d.value.as_token()) {
            if !tokens.contains(&name) {
                tokens.push(name);
            }
        }
        tokens
    }

    /// Replace theme tokens with concrete values from `source`.
    ///
    /// Tokens the source does not know stay as tokens. The resolver itself
    /// never calls this; it is the hook for a downstream renderer.
    pub fn substitute_tokens(&self, source: &dyn TokenSource) -> Self {
        let declarations = self
            .declarations
            .iter()
            .map(|d| {
                let value = match &d.value {
                    PropertyValue::Token(name) => source
                        .lookup(name)
                        .map(PropertyValue::literal)
                        .unwrap_or_else(|| d.value.clone()),
                    literal => literal.clone(),
                };
                StyleDeclaration {
                    selector: d.selector.clone(),
                    property: d.property.clone(),
                    value,
                }
            })
            .collect();
        Self { declarations }
    }
}

impl<'a> IntoIterator for &'a ResolvedStyleSet {
    type Item = &'a StyleDeclaration;
    type IntoIter = std::slice::Iter<'a, StyleDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeTokens;

    fn sample() -> ResolvedStyleSet {
        let hover = SelectorPath::root().child("&:hover");
        ResolvedStyleSet::from_declarations(vec![
            StyleDeclaration {
                selector: SelectorPath::root(),
                property: "background".into(),
                value: PropertyValue::token("colors.surface"),
            },
            StyleDeclaration {
                selector: SelectorPath::root(),
                property: "width".into(),
                value: PropertyValue::literal("40px"),
            },
            StyleDeclaration {
                selector: hover,
                property: "color".into(),
                value: PropertyValue::token("colors.accent"),
            },
        ])
    }

    #[test]
    fn lookups() {
        let set = sample();
        assert_eq!(set.len(), 3);
        assert_eq!(set.root_value("width"), Some("40px"));
        assert_eq!(set.root().count(), 2);
        assert_eq!(set.selectors().len(), 2);

        let hover = SelectorPath::root().child("&:hover");
        assert_eq!(set.declarations_for(&hover).count(), 1);
        assert!(set.get(&hover, "width").is_none());
    }

    #[test]
    fn substitute_known_tokens_only() {
        let mut tokens = ThemeTokens::new();
        tokens.set("colors.surface", "#1F2937");

        let set = sample();
        assert_eq!(set.tokens(), vec!["colors.surface", "colors.accent"]);

        let rendered = set.substitute_tokens(&tokens);
        assert_eq!(rendered.root_value("background"), Some("#1F2937"));
        assert_eq!(rendered.tokens(), vec!["colors.accent"]);
        // The original set is untouched.
        assert_eq!(set.tokens().len(), 2);
    }
}
