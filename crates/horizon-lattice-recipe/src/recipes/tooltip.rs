//! Tooltip recipe.
//!
//! The arrow is drawn with the `&::after` pseudo-element. Placement sets
//! both the bubble offset and the arrow's border geometry; hiding the arrow
//! pulls the bubble closer to its anchor through the compound rules.

use crate::error::ConfigurationError;
use crate::recipe::{
    CompoundVariant, Recipe, RecipeDefinition, VariantAxis, VariantSelection, Variants,
    define_recipe,
};
use crate::style::StyleBlock;

/// Registered name of the tooltip recipe.
pub const NAME: &str = "tooltip";

const ARROW: &str = "&::after";

crate::variant_enum! {
    /// Tooltip color scheme.
    pub enum TooltipStyle {
        Dark => "dark",
        Light => "light",
        Glow => "glow",
    }
}

crate::variant_enum! {
    /// Side of the anchor the tooltip appears on.
    pub enum TooltipPosition {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

impl TooltipPosition {
    /// The margin property separating the bubble from its anchor.
    pub fn gap_property(&self) -> &'static str {
        match self {
            Self::Top => "marginBottom",
            Self::Bottom => "marginTop",
            Self::Left => "marginRight",
            Self::Right => "marginLeft",
        }
    }
}

/// Typed selection for the tooltip recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TooltipVariants {
    /// Color scheme.
    pub variant: Option<TooltipStyle>,
    /// Placement.
    pub position: Option<TooltipPosition>,
    /// Whether the arrow is drawn.
    pub has_arrow: Option<bool>,
}

impl TooltipVariants {
    /// Select nothing; every axis uses its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a color scheme.
    pub fn variant(mut self, variant: TooltipStyle) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Choose a placement.
    pub fn position(mut self, position: TooltipPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Show or hide the arrow.
    pub fn arrow(mut self, has_arrow: bool) -> Self {
        self.has_arrow = Some(has_arrow);
        self
    }
}

impl Variants for TooltipVariants {
    fn selection(&self) -> VariantSelection {
        let mut selection = VariantSelection::new();
        if let Some(variant) = self.variant {
            selection.set("variant", variant);
        }
        if let Some(position) = self.position {
            selection.set("position", position);
        }
        if let Some(has_arrow) = self.has_arrow {
            selection.set("hasArrow", has_arrow);
        }
        selection
    }
}

fn scheme(background: &str, text: &str, arrow: &str) -> StyleBlock {
    StyleBlock::new()
        .token("background", background)
        .token("color", text)
        .nest(ARROW, StyleBlock::new().token("borderColor", arrow))
}

fn placement(position: TooltipPosition) -> StyleBlock {
    let (bubble, arrow) = match position {
        TooltipPosition::Top => (
            StyleBlock::new()
                .set("bottom", "100%")
                .set("left", "50%")
                .set("transform", "translateX(-50%)"),
            StyleBlock::new()
                .set("top", "100%")
                .set("left", "50%")
                .set("marginLeft", "-5px")
                .set("borderWidth", "5px 5px 0 5px"),
        ),
        TooltipPosition::Bottom => (
            StyleBlock::new()
                .set("top", "100%")
                .set("left", "50%")
                .set("transform", "translateX(-50%)"),
            StyleBlock::new()
                .set("bottom", "100%")
                .set("left", "50%")
                .set("marginLeft", "-5px")
                .set("borderWidth", "0 5px 5px 5px"),
        ),
        TooltipPosition::Left => (
            StyleBlock::new()
                .set("right", "100%")
                .set("top", "50%")
                .set("transform", "translateY(-50%)"),
            StyleBlock::new()
                .set("left", "100%")
                .set("top", "50%")
                .set("marginTop", "-5px")
                .set("borderWidth", "5px 0 5px 5px"),
        ),
        TooltipPosition::Right => (
            StyleBlock::new()
                .set("left", "100%")
                .set("top", "50%")
                .set("transform", "translateY(-50%)"),
            StyleBlock::new()
                .set("right", "100%")
                .set("top", "50%")
                .set("marginTop", "-5px")
                .set("borderWidth", "5px 5px 5px 0"),
        ),
    };
    bubble.set(position.gap_property(), "8px").nest(ARROW, arrow)
}

/// The tooltip recipe definition.
pub fn definition() -> RecipeDefinition {
    let mut positions = VariantAxis::new("position");
    for &position in TooltipPosition::ALL {
        positions = positions.value(position, placement(position));
    }

    let mut definition = RecipeDefinition::new(NAME)
        .base(
            StyleBlock::new()
                .set("position", "absolute")
                .set("zIndex", "50")
                .set("padding", "6px 10px")
                .set("borderRadius", "6px")
                .set("fontSize", "12px")
                .set("lineHeight", "1.4")
                .set("whiteSpace", "nowrap")
                .set("pointerEvents", "none")
                .nest(
                    ARROW,
                    StyleBlock::new()
                        .set("content", "\"\"")
                        .set("position", "absolute")
                        .set("width", "0")
                        .set("height", "0")
                        .set("borderStyle", "solid")
                        .set("borderColor", "transparent"),
                ),
        )
        .variant(
            VariantAxis::new("variant")
                .value(
                    TooltipStyle::Dark,
                    scheme("colors.gray.900", "colors.white", "colors.gray.900"),
                )
                .value(
                    TooltipStyle::Light,
                    scheme("colors.white", "colors.gray.900", "colors.white")
                        .set("boxShadow", "0 2px 8px rgba(0, 0, 0, 0.15)"),
                )
                .value(
                    TooltipStyle::Glow,
                    scheme("colors.gray.900", "colors.white", "colors.primary")
                        .set("boxShadow", "0 0 10px rgba(99, 102, 241, 0.6)"),
                ),
        )
        .variant(positions)
        .variant(
            VariantAxis::new("hasArrow")
                .value(
                    true,
                    StyleBlock::new().nest(ARROW, StyleBlock::new().set("display", "block")),
                )
                .value(
                    false,
                    StyleBlock::new().nest(ARROW, StyleBlock::new().set("display", "none")),
                ),
        );

    for &position in TooltipPosition::ALL {
        definition = definition.compound(
            CompoundVariant::new()
                .when("hasArrow", false)
                .when("position", position)
                .style(StyleBlock::new().set(position.gap_property(), "5px")),
        );
    }

    definition
        .default_variant("variant", TooltipStyle::Dark)
        .default_variant("position", TooltipPosition::Top)
        .default_variant("hasArrow", true)
}

/// Define the tooltip recipe.
pub fn recipe() -> Result<Recipe, ConfigurationError> {
    define_recipe(definition())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_is_valid() {
        let recipe = recipe().unwrap();
        assert_eq!(recipe.name(), NAME);
        assert_eq!(recipe.definition().compound_variants().len(), 4);
    }

    #[test]
    fn gap_shrinks_without_arrow_on_every_side() {
        let recipe = recipe().unwrap();
        for &position in TooltipPosition::ALL {
            let with_arrow = recipe
                .resolve_typed(&TooltipVariants::new().position(position))
                .unwrap();
            let without = recipe
                .resolve_typed(&TooltipVariants::new().position(position).arrow(false))
                .unwrap();

            assert_eq!(with_arrow.root_value(position.gap_property()), Some("8px"));
            assert_eq!(without.root_value(position.gap_property()), Some("5px"));
        }
    }
}
