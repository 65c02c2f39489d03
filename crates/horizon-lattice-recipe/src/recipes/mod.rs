//! Built-in component recipes.
//!
//! - [`menu_button`]: circular icon button that opens a menu
//! - [`tooltip`]: positioned tooltip bubble with an optional arrow
//!
//! Property values that name theme tokens (`colors.surface`, ...) are left
//! for the renderer's theme to fill in.

pub mod menu_button;
pub mod tooltip;

pub use menu_button::{MenuButtonSize, MenuButtonStyle, MenuButtonVariants};
pub use tooltip::{TooltipPosition, TooltipStyle, TooltipVariants};

use crate::recipe::RecipeDefinition;

/// Definitions of every built-in recipe, in registration order.
pub fn builtin_definitions() -> Vec<RecipeDefinition> {
    vec![menu_button::definition(), tooltip::definition()]
}
