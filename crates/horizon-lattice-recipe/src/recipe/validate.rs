//! Structural validation run at registration time.

use std::collections::HashSet;

use super::definition::RecipeDefinition;
use crate::error::ConfigurationError;

/// Check every structural invariant, reporting the first violation.
///
/// Checks run in this order: name, axis uniqueness, value uniqueness per
/// axis, default variants, compound variant conditions.
pub(crate) fn validate_definition(def: &RecipeDefinition) -> Result<(), ConfigurationError> {
    let recipe = def.name();
    if recipe.trim().is_empty() {
        return Err(ConfigurationError::EmptyName);
    }

    let mut axes = HashSet::new();
    for axis in def.variants() {
        if !axes.insert(axis.name()) {
            return Err(ConfigurationError::DuplicateAxis {
                recipe: recipe.to_string(),
                axis: axis.name().to_string(),
            });
        }

        let mut values = HashSet::new();
        for (value, _) in axis.raw_values() {
            if !values.insert(value.as_str()) {
                return Err(ConfigurationError::DuplicateValue {
                    recipe: recipe.to_string(),
                    axis: axis.name().to_string(),
                    value: value.clone(),
                });
            }
        }
    }

    for (axis_name, value) in def.default_variants().iter() {
        let axis = def
            .axis(axis_name)
            .ok_or_else(|| ConfigurationError::UnknownDefaultAxis {
                recipe: recipe.to_string(),
                axis: axis_name.to_string(),
            })?;
        if !axis.accepts(value) {
            return Err(ConfigurationError::UnknownDefaultValue {
                recipe: recipe.to_string(),
                axis: axis_name.to_string(),
                value: value.to_string(),
            });
        }
    }

    for (index, rule) in def.compound_variants().iter().enumerate() {
        if rule.conditions().next().is_none() {
            return Err(ConfigurationError::EmptyCompoundRule {
                recipe: recipe.to_string(),
                index,
            });
        }

        let mut seen = HashSet::new();
        for (axis_name, value) in rule.conditions() {
            if !seen.insert(axis_name) {
                return Err(ConfigurationError::DuplicateCompoundAxis {
                    recipe: recipe.to_string(),
                    index,
                    axis: axis_name.to_string(),
                });
            }
            let axis = def
                .axis(axis_name)
                .ok_or_else(|| ConfigurationError::UnknownCompoundAxis {
                    recipe: recipe.to_string(),
                    index,
                    axis: axis_name.to_string(),
                })?;
            if !axis.accepts(value) {
                return Err(ConfigurationError::UnknownCompoundValue {
                    recipe: recipe.to_string(),
                    index,
                    axis: axis_name.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{CompoundVariant, VariantAxis};
    use crate::style::StyleBlock;

    fn sized(name: &str) -> RecipeDefinition {
        RecipeDefinition::new(name)
            .variant(
                VariantAxis::new("size")
                    .value("sm", StyleBlock::new())
                    .value("md", StyleBlock::new()),
            )
            .variant(VariantAxis::new("isOpen").value(true, StyleBlock::new()))
    }

    #[test]
    fn valid_definition_passes() {
        let def = sized("menuButton")
            .default_variant("size", "md")
            .default_variant("isOpen", false)
            .compound(CompoundVariant::new().when("size", "sm").when("isOpen", false));
        assert_eq!(validate_definition(&def), Ok(()));
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            validate_definition(&sized("  ")),
            Err(ConfigurationError::EmptyName)
        );
    }

    #[test]
    fn duplicate_axis_rejected() {
        let def = sized("menuButton").variant(VariantAxis::new("size"));
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DuplicateAxis { axis, .. }) if axis == "size"
        ));
    }

    #[test]
    fn duplicate_value_rejected() {
        let def = RecipeDefinition::new("tooltip").variant(
            VariantAxis::new("position")
                .value("top", StyleBlock::new())
                .value("top", StyleBlock::new()),
        );
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DuplicateValue { value, .. }) if value == "top"
        ));
    }

    #[test]
    fn undeclared_defaults_rejected() {
        let def = sized("menuButton").default_variant("tone", "warm");
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::UnknownDefaultAxis { axis, .. }) if axis == "tone"
        ));

        let def = sized("menuButton").default_variant("size", "xl");
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::UnknownDefaultValue { value, .. }) if value == "xl"
        ));
    }

    #[test]
    fn malformed_compound_rules_rejected() {
        let def = sized("menuButton").compound(CompoundVariant::new());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::EmptyCompoundRule { index: 0, .. })
        ));

        let def = sized("menuButton")
            .compound(CompoundVariant::new().when("size", "sm"))
            .compound(CompoundVariant::new().when("shape", "round"));
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::UnknownCompoundAxis { index: 1, axis, .. }) if axis == "shape"
        ));

        let def = sized("menuButton").compound(CompoundVariant::new().when("size", "huge"));
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::UnknownCompoundValue { value, .. }) if value == "huge"
        ));

        let def = sized("menuButton")
            .compound(CompoundVariant::new().when("size", "sm").when("size", "md"));
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DuplicateCompoundAxis { axis, .. }) if axis == "size"
        ));
    }
}
