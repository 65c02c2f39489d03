//! Variant recipe resolution for Horizon Lattice.
//!
//! A recipe declares how one styleable component looks across a set of
//! named variant axes (size, visual style, open state, placement, ...):
//!
//! - **Base styles**: applied to every combination
//! - **Variants**: one style block per value of each axis
//! - **Compound variants**: blocks applied when several axes hold specific values
//! - **Default variants**: values used when the caller omits an axis
//!
//! Resolution turns a partial selection into an ordered list of
//! `(selector path, property, value)` declarations. Later stages always
//! win per `(selector path, property)`: base, then each axis in
//! declaration order, then matching compound variants in declaration
//! order. Theme tokens pass through unresolved.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_recipe::prelude::*;
//! use horizon_lattice_recipe::recipes::{TooltipPosition, TooltipVariants};
//!
//! let registry = RecipeRegistry::with_builtin_recipes()?;
//!
//! let styles = registry.resolve_typed(
//!     "tooltip",
//!     &TooltipVariants::new().position(TooltipPosition::Top).arrow(false),
//! )?;
//!
//! let arrow = SelectorPath::root().child("&::after");
//! assert_eq!(styles.get(&arrow, "display").map(|v| v.as_str()), Some("none"));
//! assert_eq!(styles.root_value("marginBottom"), Some("5px"));
//! # Ok::<(), horizon_lattice_recipe::Error>(())
//! ```

pub mod config;
pub mod loader;
pub mod logging;
pub mod recipe;
pub mod recipes;
pub mod registry;
pub mod resolve;
pub mod style;
pub mod theme;

mod error;

pub use error::{ConfigurationError, Error, LoadError, Result, SelectionError};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{CacheConfig, EngineConfig};
    pub use crate::recipe::{
        CompoundVariant, Recipe, RecipeDefinition, VariantAxis, VariantSelection, VariantValue,
        Variants, define_recipe,
    };
    pub use crate::registry::RecipeRegistry;
    pub use crate::resolve::{ResolvedStyleSet, StyleDeclaration, resolve};
    pub use crate::style::{PropertyValue, SelectorPath, StyleBlock};
    pub use crate::theme::{ThemeTokens, TokenSource};
    pub use crate::{ConfigurationError, Error, SelectionError};
}
