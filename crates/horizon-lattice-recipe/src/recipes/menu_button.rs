//! Circular menu button recipe.

use crate::error::ConfigurationError;
use crate::recipe::{
    CompoundVariant, Recipe, RecipeDefinition, VariantAxis, VariantSelection, Variants,
    define_recipe,
};
use crate::style::StyleBlock;

/// Registered name of the menu button recipe.
pub const NAME: &str = "menuButton";

crate::variant_enum! {
    /// Menu button diameter.
    pub enum MenuButtonSize {
        /// 32px.
        Small => "sm",
        /// 40px.
        Medium => "md",
        /// 48px.
        Large => "lg",
    }
}

crate::variant_enum! {
    /// Menu button visual style.
    pub enum MenuButtonStyle {
        /// Filled surface.
        Solid => "solid",
        /// Transparent until hovered.
        Ghost => "ghost",
        /// Accent-colored halo.
        Glow => "glow",
    }
}

/// Typed selection for the menu button recipe.
///
/// Fields left as `None` fall back to the recipe defaults
/// (`md`, `solid`, closed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuButtonVariants {
    /// Diameter.
    pub size: Option<MenuButtonSize>,
    /// Visual style.
    pub variant: Option<MenuButtonStyle>,
    /// Whether the attached menu is open.
    pub is_open: Option<bool>,
}

impl MenuButtonVariants {
    /// Select nothing; every axis uses its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a size.
    pub fn size(mut self, size: MenuButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Choose a visual style.
    pub fn variant(mut self, variant: MenuButtonStyle) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Choose the open state.
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }
}

impl Variants for MenuButtonVariants {
    fn selection(&self) -> VariantSelection {
        let mut selection = VariantSelection::new();
        if let Some(size) = self.size {
            selection.set("size", size);
        }
        if let Some(variant) = self.variant {
            selection.set("variant", variant);
        }
        if let Some(is_open) = self.is_open {
            selection.set("isOpen", is_open);
        }
        selection
    }
}

fn icon(size: &str) -> StyleBlock {
    StyleBlock::new().set("width", size).set("height", size)
}

/// The menu button recipe definition.
pub fn definition() -> RecipeDefinition {
    RecipeDefinition::new(NAME)
        .base(
            StyleBlock::new()
                .set("display", "inline-flex")
                .set("alignItems", "center")
                .set("justifyContent", "center")
                .set("width", "40px")
                .set("height", "40px")
                .set("borderRadius", "50%")
                .set("border", "none")
                .set("cursor", "pointer")
                .set("transition", "transform 0.2s ease, box-shadow 0.2s ease")
                .token("background", "colors.surface")
                .token("color", "colors.text")
                .nest("& svg", icon("20px"))
                .nest(
                    "&:focus-visible",
                    StyleBlock::new()
                        .set("outline", "2px solid")
                        .token("outlineColor", "colors.primary")
                        .set("outlineOffset", "2px"),
                )
                .nest(
                    "&:disabled",
                    StyleBlock::new()
                        .set("opacity", "0.5")
                        .set("cursor", "not-allowed"),
                ),
        )
        .variant(
            VariantAxis::new("size")
                .value(
                    MenuButtonSize::Small,
                    StyleBlock::new()
                        .set("width", "32px")
                        .set("height", "32px")
                        .nest("& svg", icon("16px")),
                )
                .value(
                    MenuButtonSize::Medium,
                    StyleBlock::new().set("width", "40px").set("height", "40px"),
                )
                .value(
                    MenuButtonSize::Large,
                    StyleBlock::new()
                        .set("width", "48px")
                        .set("height", "48px")
                        .nest("& svg", icon("24px")),
                ),
        )
        .variant(
            VariantAxis::new("variant")
                .value(
                    MenuButtonStyle::Solid,
                    StyleBlock::new()
                        .token("background", "colors.surface")
                        .nest(
                            "&:hover",
                            StyleBlock::new().token("background", "colors.surfaceHover"),
                        ),
                )
                .value(
                    MenuButtonStyle::Ghost,
                    StyleBlock::new()
                        .set("background", "transparent")
                        .nest(
                            "&:hover",
                            StyleBlock::new().token("background", "colors.surfaceHover"),
                        ),
                )
                .value(
                    MenuButtonStyle::Glow,
                    StyleBlock::new()
                        .token("background", "colors.surface")
                        .set("boxShadow", "0 0 8px rgba(99, 102, 241, 0.45)")
                        .nest(
                            "&:hover",
                            StyleBlock::new().set("boxShadow", "0 0 14px rgba(99, 102, 241, 0.65)"),
                        ),
                ),
        )
        .variant(
            VariantAxis::new("isOpen")
                .value(
                    true,
                    StyleBlock::new()
                        .set("transform", "rotate(90deg)")
                        .token("color", "colors.primary"),
                )
                .value(false, StyleBlock::new().set("transform", "rotate(0deg)")),
        )
        .compound(
            CompoundVariant::new()
                .when("variant", MenuButtonStyle::Glow)
                .when("isOpen", true)
                .style(
                    StyleBlock::new()
                        .set("boxShadow", "0 0 20px rgba(99, 102, 241, 0.8)")
                        .nest(
                            "&:hover",
                            StyleBlock::new().set("boxShadow", "0 0 24px rgba(99, 102, 241, 0.9)"),
                        ),
                ),
        )
        .compound(
            CompoundVariant::new()
                .when("variant", MenuButtonStyle::Ghost)
                .when("isOpen", true)
                .style(StyleBlock::new().token("background", "colors.surfaceHover")),
        )
        .default_variant("size", MenuButtonSize::Medium)
        .default_variant("variant", MenuButtonStyle::Solid)
        .default_variant("isOpen", false)
}

/// Define the menu button recipe.
pub fn recipe() -> Result<Recipe, ConfigurationError> {
    define_recipe(definition())
}
