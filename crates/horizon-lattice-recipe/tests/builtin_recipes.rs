//! Scenarios for the built-in menu button and tooltip recipes.

use horizon_lattice_recipe::prelude::*;
use horizon_lattice_recipe::recipes::{
    MenuButtonSize, MenuButtonStyle, MenuButtonVariants, TooltipPosition, TooltipVariants,
    menu_button, tooltip,
};

fn arrow() -> SelectorPath {
    SelectorPath::root().child("&::after")
}

#[test]
fn builtin_registry_holds_both_recipes() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec![menu_button::NAME, tooltip::NAME]);
}

#[test]
fn builtin_recipes_cannot_be_registered_twice() {
    let mut registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let err = registry.register_builtin_recipes().unwrap_err();
    assert!(matches!(err, ConfigurationError::DuplicateRecipe { .. }));
}

#[test]
fn menu_button_size_scenario() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();

    let default = registry.resolve(menu_button::NAME, &VariantSelection::new()).unwrap();
    assert_eq!(default.root_value("width"), Some("40px"));

    let small = registry
        .resolve(menu_button::NAME, &VariantSelection::new().with("size", "sm"))
        .unwrap();
    assert_eq!(small.root_value("width"), Some("32px"));
    assert_eq!(small.root_value("height"), Some("32px"));
}

#[test]
fn menu_button_open_glow_uses_compound_shadow() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let closed = registry
        .resolve_typed(
            menu_button::NAME,
            &MenuButtonVariants::new().variant(MenuButtonStyle::Glow),
        )
        .unwrap();
    let open = registry
        .resolve_typed(
            menu_button::NAME,
            &MenuButtonVariants::new().variant(MenuButtonStyle::Glow).open(true),
        )
        .unwrap();

    assert_eq!(closed.root_value("boxShadow"), Some("0 0 8px rgba(99, 102, 241, 0.45)"));
    assert_eq!(open.root_value("boxShadow"), Some("0 0 20px rgba(99, 102, 241, 0.8)"));
    assert_eq!(open.root_value("transform"), Some("rotate(90deg)"));
}

#[test]
fn menu_button_tokens_pass_through_until_substituted() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let styles = registry
        .resolve_typed(
            menu_button::NAME,
            &MenuButtonVariants::new().size(MenuButtonSize::Small).open(true),
        )
        .unwrap();

    assert_eq!(
        styles.get(&SelectorPath::root(), "color"),
        Some(&PropertyValue::token("colors.primary"))
    );

    let tokens = ThemeTokens::new()
        .with("colors.primary", "#6366F1")
        .with("colors.surface", "#1F2937");
    let rendered = styles.substitute_tokens(&tokens);
    assert_eq!(rendered.root_value("color"), Some("#6366F1"));
    assert_eq!(rendered.root_value("background"), Some("#1F2937"));
}

#[test]
fn tooltip_without_arrow_on_top() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let styles = registry
        .resolve(
            tooltip::NAME,
            &VariantSelection::new().with("hasArrow", false).with("position", "top"),
        )
        .unwrap();

    assert_eq!(styles.get(&arrow(), "display"), Some(&PropertyValue::literal("none")));
    assert_eq!(styles.root_value("marginBottom"), Some("5px"));
}

#[test]
fn tooltip_with_arrow_keeps_position_margin() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let styles = registry
        .resolve(
            tooltip::NAME,
            &VariantSelection::new().with("hasArrow", true).with("position", "top"),
        )
        .unwrap();

    assert_eq!(styles.get(&arrow(), "display"), Some(&PropertyValue::literal("block")));
    assert_eq!(styles.root_value("marginBottom"), Some("8px"));
}

#[test]
fn tooltip_string_and_native_booleans_agree() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let native = registry
        .resolve_typed(
            tooltip::NAME,
            &TooltipVariants::new().position(TooltipPosition::Left).arrow(false),
        )
        .unwrap();
    let string = registry
        .resolve(
            tooltip::NAME,
            &VariantSelection::new().with("position", "left").with("hasArrow", "false"),
        )
        .unwrap();

    assert_eq!(native, string);
    assert_eq!(native.root_value("marginRight"), Some("5px"));
}

#[test]
fn tooltip_rejects_unknown_position() {
    let registry = RecipeRegistry::with_builtin_recipes().unwrap();
    let err = registry
        .resolve(tooltip::NAME, &VariantSelection::new().with("position", "center"))
        .unwrap_err();
    assert!(err.is_selection());
}
