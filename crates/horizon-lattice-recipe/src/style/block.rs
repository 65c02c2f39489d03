//! Recursive style blocks.

use super::PropertyValue;

/// An ordered set of property assignments plus nested selector blocks.
///
/// Properties keep the position of their first assignment; assigning the
/// same property again replaces the value in place. Nesting the same
/// selector twice merges into the existing child.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::style::StyleBlock;
///
/// let block = StyleBlock::new()
///     .set("width", "40px")
///     .token("background", "colors.surface")
///     .nest("&:hover", StyleBlock::new().set("transform", "scale(1.05)"));
///
/// assert_eq!(block.get("width").map(|v| v.as_str()), Some("40px"));
/// assert!(block.nested("&:hover").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    properties: Vec<(String, PropertyValue)>,
    children: Vec<(String, StyleBlock)>,
}

impl StyleBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a property, returning the block for chaining.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Assign a theme token to a property, returning the block for chaining.
    pub fn token(self, property: impl Into<String>, token: impl Into<String>) -> Self {
        self.set(property, PropertyValue::token(token))
    }

    /// Add a nested selector block, returning the block for chaining.
    pub fn nest(mut self, selector: impl Into<String>, block: StyleBlock) -> Self {
        self.insert_nested(selector, block);
        self
    }

    /// Assign a property in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<PropertyValue>) {
        let property = property.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((property, value)),
        }
    }

    /// Add a nested selector block in place.
    pub fn insert_nested(&mut self, selector: impl Into<String>, block: StyleBlock) {
        let selector = selector.into();
        match self.children.iter_mut().find(|(name, _)| *name == selector) {
            Some((_, existing)) => existing.merge_from(&block),
            None => self.children.push((selector, block)),
        }
    }

    /// Overlay another block onto this one, recursing into children.
    pub fn merge_from(&mut self, other: &StyleBlock) {
        for (property, value) in &other.properties {
            self.insert(property.clone(), value.clone());
        }
        for (selector, child) in &other.children {
            self.insert_nested(selector.clone(), child.clone());
        }
    }

    /// Get a property value at this level.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Get a nested block by selector.
    pub fn nested(&self, selector: &str) -> Option<&StyleBlock> {
        self.children
            .iter()
            .find(|(name, _)| name == selector)
            .map(|(_, block)| block)
    }

    /// Iterate over properties at this level, in order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over nested blocks, in order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.children
            .iter()
            .map(|(selector, block)| (selector.as_str(), block))
    }

    /// Check whether the block and all its children are empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.iter().all(|(_, child)| child.is_empty())
    }

    /// Total number of property assignments, including nested blocks.
    pub fn declaration_count(&self) -> usize {
        self.properties.len()
            + self
                .children
                .iter()
                .map(|(_, child)| child.declaration_count())
                .sum::<usize>()
    }
}
