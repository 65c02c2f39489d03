//! Recipe definitions before validation.

use super::selection::{EffectiveSelection, VariantSelection, VariantValue};
use crate::style::StyleBlock;

/// One named dimension of visual choice and its style table.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::recipe::VariantAxis;
/// use horizon_lattice_recipe::style::StyleBlock;
///
/// let size = VariantAxis::new("size")
///     .value("sm", StyleBlock::new().set("width", "32px"))
///     .value("md", StyleBlock::new().set("width", "40px"));
///
/// assert!(size.declares("sm"));
/// assert!(!size.is_boolean());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VariantAxis {
    name: String,
    values: Vec<(String, StyleBlock)>,
}

impl VariantAxis {
    /// Create an axis with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![],
        }
    }

    /// Declare a value and its style block, returning the axis for chaining.
    ///
    /// Booleans are stored under their `"true"`/`"false"` keys.
    pub fn value(mut self, value: impl Into<VariantValue>, block: StyleBlock) -> Self {
        let value: VariantValue = value.into();
        self.values.push((value.as_key().into_owned(), block));
        self
    }

    /// The axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate over declared values and their blocks, in order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.values
            .iter()
            .map(|(value, block)| (value.as_str(), block))
    }

    /// Get the block for a declared value.
    pub fn block(&self, value: &str) -> Option<&StyleBlock> {
        self.values
            .iter()
            .find(|(name, _)| name == value)
            .map(|(_, block)| block)
    }

    /// Check whether a value is explicitly declared.
    pub fn declares(&self, value: &str) -> bool {
        self.block(value).is_some()
    }

    /// Check whether every declared value is `"true"` or `"false"`.
    pub fn is_boolean(&self) -> bool {
        !self.values.is_empty()
            && self
                .values
                .iter()
                .all(|(value, _)| value == "true" || value == "false")
    }

    /// Check whether a value is legal on this axis.
    ///
    /// Boolean axes accept both literals even when only one is declared;
    /// the undeclared one contributes no style.
    pub fn accepts(&self, value: &VariantValue) -> bool {
        self.declares(&value.as_key()) || (self.is_boolean() && value.as_bool().is_some())
    }

    pub(crate) fn raw_values(&self) -> &[(String, StyleBlock)] {
        &self.values
    }
}

/// A style block applied only when several axes hold specific values.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::recipe::CompoundVariant;
/// use horizon_lattice_recipe::style::StyleBlock;
///
/// let rule = CompoundVariant::new()
///     .when("hasArrow", false)
///     .when("position", "top")
///     .style(StyleBlock::new().set("marginBottom", "5px"));
///
/// assert_eq!(rule.conditions().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundVariant {
    conditions: Vec<(String, VariantValue)>,
    style: StyleBlock,
}

impl CompoundVariant {
    /// Create a rule with no conditions and an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an `axis = value` condition.
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.conditions.push((axis.into(), value.into()));
        self
    }

    /// Set the style block applied when all conditions hold.
    pub fn style(mut self, block: StyleBlock) -> Self {
        self.style = block;
        self
    }

    /// Iterate over the conditions, in order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.conditions
            .iter()
            .map(|(axis, value)| (axis.as_str(), value))
    }

    /// The block applied on match.
    pub fn block(&self) -> &StyleBlock {
        &self.style
    }

    /// Check whether every condition equals the effective selection.
    ///
    /// An axis that is unset never satisfies a condition.
    pub fn matches(&self, effective: &EffectiveSelection) -> bool {
        self.conditions.iter().all(|(axis, expected)| {
            effective
                .get(axis)
                .is_some_and(|actual| actual == expected.as_key())
        })
    }
}

/// The unvalidated description of a recipe.
///
/// Pass it to [`define_recipe`](super::define_recipe) to check its
/// invariants and obtain an immutable [`Recipe`](super::Recipe).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDefinition {
    name: String,
    base: StyleBlock,
    variants: Vec<VariantAxis>,
    compound_variants: Vec<CompoundVariant>,
    default_variants: VariantSelection,
}

impl RecipeDefinition {
    /// Start a definition with the given recipe name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the base block.
    pub fn base(mut self, block: StyleBlock) -> Self {
        self.base = block;
        self
    }

    /// Append a variant axis.
    pub fn variant(mut self, axis: VariantAxis) -> Self {
        self.variants.push(axis);
        self
    }

    /// Append a compound variant rule.
    pub fn compound(mut self, rule: CompoundVariant) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Set the default value for an axis.
    pub fn default_variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<VariantValue>,
    ) -> Self {
        self.default_variants.set(axis, value);
        self
    }

    /// The recipe name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base block.
    pub fn base_block(&self) -> &StyleBlock {
        &self.base
    }

    /// Variant axes in declaration order.
    pub fn variants(&self) -> &[VariantAxis] {
        &self.variants
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.variants.iter().find(|axis| axis.name() == name)
    }

    /// Compound variant rules in declaration order.
    pub fn compound_variants(&self) -> &[CompoundVariant] {
        &self.compound_variants
    }

    /// Default values for omitted axes.
    pub fn default_variants(&self) -> &VariantSelection {
        &self.default_variants
    }
}
