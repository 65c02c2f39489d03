//! Validated, immutable recipes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::definition::{RecipeDefinition, VariantAxis};
use super::selection::{EffectiveSelection, VariantSelection};
use super::validate::validate_definition;
use super::variants::Variants;
use crate::error::{ConfigurationError, SelectionError};
use crate::logging::targets;
use crate::resolve::{self, ResolvedStyleSet};

static NEXT_RECIPE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a defined recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(u64);

impl RecipeId {
    fn next() -> Self {
        Self(NEXT_RECIPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A validated recipe.
///
/// Recipes never change after definition. Clones share the same
/// definition and identity, so a recipe can be handed to any number of
/// threads and resolved concurrently.
#[derive(Debug, Clone)]
pub struct Recipe {
    id: RecipeId,
    definition: Arc<RecipeDefinition>,
}

impl Recipe {
    /// Validate a definition and freeze it into a recipe.
    pub fn define(definition: RecipeDefinition) -> Result<Self, ConfigurationError> {
        if let Err(err) = validate_definition(&definition) {
            tracing::warn!(
                target: targets::RECIPE,
                recipe = definition.name(),
                "Rejected recipe definition: {}",
                err
            );
            return Err(err);
        }

        let recipe = Self {
            id: RecipeId::next(),
            definition: Arc::new(definition),
        };
        tracing::debug!(
            target: targets::RECIPE,
            recipe = recipe.name(),
            id = recipe.id.0,
            axes = recipe.definition.variants().len(),
            compound_rules = recipe.definition.compound_variants().len(),
            "Defined recipe"
        );
        Ok(recipe)
    }

    /// The recipe identity.
    pub fn id(&self) -> RecipeId {
        self.id
    }

    /// The recipe name.
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// The underlying definition.
    pub fn definition(&self) -> &RecipeDefinition {
        &self.definition
    }

    /// Variant axes in declaration order.
    pub fn axes(&self) -> &[VariantAxis] {
        self.definition.variants()
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.definition.axis(name)
    }

    /// Default values for omitted axes.
    pub fn default_variants(&self) -> &VariantSelection {
        self.definition.default_variants()
    }

    /// Check the caller's selection and apply defaults.
    ///
    /// Every axis named in `selection` must exist and its value must be
    /// legal. The result holds one entry per axis in declaration order.
    pub fn effective_selection(
        &self,
        selection: &VariantSelection,
    ) -> Result<EffectiveSelection, SelectionError> {
        for (axis_name, value) in selection.iter() {
            let axis = self
                .axis(axis_name)
                .ok_or_else(|| SelectionError::UnknownAxis {
                    recipe: self.name().to_string(),
                    axis: axis_name.to_string(),
                })?;
            if axis.accepts(value) {
                continue;
            }
            return Err(if value.is_native_bool() {
                SelectionError::NotBoolean {
                    recipe: self.name().to_string(),
                    axis: axis_name.to_string(),
                }
            } else {
                SelectionError::UnknownValue {
                    recipe: self.name().to_string(),
                    axis: axis_name.to_string(),
                    value: value.to_string(),
                }
            });
        }

        let defaults = self.default_variants();
        let values = self
            .axes()
            .iter()
            .map(|axis| {
                let chosen = selection
                    .get(axis.name())
                    .or_else(|| defaults.get(axis.name()));
                (
                    axis.name().to_string(),
                    chosen.map(|value| value.as_key().into_owned()),
                )
            })
            .collect();
        Ok(EffectiveSelection::from_values(values))
    }

    /// Resolve a selection into the final style set.
    pub fn resolve(
        &self,
        selection: &VariantSelection,
    ) -> Result<ResolvedStyleSet, SelectionError> {
        resolve::resolve(self, selection)
    }

    /// Resolve a typed selection into the final style set.
    pub fn resolve_typed<V: Variants>(
        &self,
        variants: &V,
    ) -> Result<ResolvedStyleSet, SelectionError> {
        self.resolve(&variants.selection())
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

/// Validate a definition and freeze it into a [`Recipe`].
///
/// Fails with the first structural violation found; an invalid recipe is
/// never produced.
pub fn define_recipe(definition: RecipeDefinition) -> Result<Recipe, ConfigurationError> {
    Recipe::define(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{VariantAxis, VariantValue};
    use crate::style::StyleBlock;

    fn menu_button() -> Recipe {
        define_recipe(
            RecipeDefinition::new("menuButton")
                .variant(
                    VariantAxis::new("size")
                        .value("sm", StyleBlock::new())
                        .value("md", StyleBlock::new()),
                )
                .variant(VariantAxis::new("isOpen").value(true, StyleBlock::new()))
                .variant(VariantAxis::new("tone").value("warm", StyleBlock::new()))
                .default_variant("size", "md")
                .default_variant("isOpen", false),
        )
        .unwrap()
    }

    #[test]
    fn ids_are_unique_and_shared_by_clones() {
        let a = menu_button();
        let b = menu_button();
        assert_ne!(a.id(), b.id());
        assert!(b.id().as_u64() > a.id().as_u64());
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn effective_selection_applies_defaults_in_axis_order() {
        let recipe = menu_button();
        let effective = recipe
            .effective_selection(&VariantSelection::new().with("size", "sm"))
            .unwrap();

        let values: Vec<_> = effective.iter().collect();
        assert_eq!(
            values,
            vec![("size", Some("sm")), ("isOpen", Some("false")), ("tone", None)]
        );
    }

    #[test]
    fn selection_errors() {
        let recipe = menu_button();

        let err = recipe
            .effective_selection(&VariantSelection::new().with("shape", "round"))
            .unwrap_err();
        assert!(matches!(err, SelectionError::UnknownAxis { .. }));

        let err = recipe
            .effective_selection(&VariantSelection::new().with("size", "xl"))
            .unwrap_err();
        assert!(matches!(err, SelectionError::UnknownValue { ref value, .. } if value == "xl"));

        let err = recipe
            .effective_selection(&VariantSelection::new().with("size", true))
            .unwrap_err();
        assert!(matches!(err, SelectionError::NotBoolean { .. }));
    }

    #[test]
    fn boolean_axis_accepts_native_and_string_literals() {
        let recipe = menu_button();
        for value in [
            VariantValue::Bool(false),
            VariantValue::from("false"),
            VariantValue::Bool(true),
        ] {
            let selection = VariantSelection::new().with("isOpen", value);
            assert!(recipe.effective_selection(&selection).is_ok());
        }
    }
}
