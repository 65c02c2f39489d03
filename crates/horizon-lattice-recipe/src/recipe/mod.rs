//! Recipe definitions, validation and selections.
//!
//! A recipe is a named bundle of base styles plus variant axes describing
//! one styleable component:
//!
//! - [`RecipeDefinition`]: builder for base, axes, compound rules, defaults
//! - [`define_recipe`]: validates a definition into an immutable [`Recipe`]
//! - [`VariantSelection`]: caller input, a partial axis → value mapping
//! - [`Variants`]: typed selections for recipes known at compile time

mod definition;
#[allow(clippy::module_inception)]
mod recipe;
mod selection;
mod validate;
mod variants;

pub use definition::{CompoundVariant, RecipeDefinition, VariantAxis};
pub use recipe::{Recipe, RecipeId, define_recipe};
pub use selection::{EffectiveSelection, VariantSelection, VariantValue};
pub use variants::Variants;
