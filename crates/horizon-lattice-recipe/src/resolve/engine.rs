//! Variant resolution.

use super::accumulator::StyleAccumulator;
use super::resolved::ResolvedStyleSet;
use crate::error::SelectionError;
use crate::logging::targets;
use crate::recipe::{EffectiveSelection, Recipe, VariantSelection};

/// Resolve a selection against a recipe.
///
/// This performs the full resolution:
/// 1. Validate the selection and apply default variants
/// 2. Merge the base block
/// 3. Merge each axis's selected block, in axis declaration order
/// 4. Merge every matching compound variant, in declaration order
/// 5. Flatten to ordered declarations
///
/// Later stages win per `(selector path, property)`. Resolution is pure:
/// the recipe is never modified and no state is kept between calls.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::prelude::*;
///
/// let recipe = define_recipe(
///     RecipeDefinition::new("menuButton")
///         .base(StyleBlock::new().set("width", "40px"))
///         .variant(VariantAxis::new("size").value("sm", StyleBlock::new().set("width", "32px")))
///         .default_variant("size", "sm"),
/// )?;
///
/// let styles = resolve(&recipe, &VariantSelection::new())?;
/// assert_eq!(styles.root_value("width"), Some("32px"));
/// # Ok::<(), horizon_lattice_recipe::Error>(())
/// ```
pub fn resolve(
    recipe: &Recipe,
    selection: &VariantSelection,
) -> Result<ResolvedStyleSet, SelectionError> {
    let effective = recipe.effective_selection(selection)?;
    Ok(resolve_effective(recipe, &effective))
}

/// Resolve an already-validated effective selection.
pub(crate) fn resolve_effective(
    recipe: &Recipe,
    effective: &EffectiveSelection,
) -> ResolvedStyleSet {
    let definition = recipe.definition();
    let mut accumulator = StyleAccumulator::new();

    accumulator.merge(definition.base_block());

    for axis in definition.variants() {
        let Some(value) = effective.get(axis.name()) else {
            continue;
        };
        // A boolean axis without an entry for this literal contributes nothing.
        if let Some(block) = axis.block(value) {
            tracing::trace!(
                target: targets::RESOLVE,
                recipe = recipe.name(),
                axis = axis.name(),
                value,
                "Applying variant"
            );
            accumulator.merge(block);
        }
    }

    for (index, rule) in definition.compound_variants().iter().enumerate() {
        if rule.matches(effective) {
            tracing::trace!(
                target: targets::RESOLVE,
                recipe = recipe.name(),
                index,
                "Applying compound variant"
            );
            accumulator.merge(rule.block());
        }
    }

    accumulator.finish()
}
