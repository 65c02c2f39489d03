//! Named recipe registry with memoized resolution.

use std::collections::HashMap;
use std::path::Path;

use crate::config::EngineConfig;
use crate::error::{ConfigurationError, Error};
use crate::logging::targets;
use crate::recipe::{Recipe, RecipeDefinition, VariantSelection, Variants, define_recipe};
use crate::resolve::{
    CacheStats, ResolutionCache, ResolutionKey, ResolvedStyleSet, resolve_effective,
};
use crate::{Result, loader, recipes};

/// The recipe engine.
///
/// The registry holds every recipe defined at configuration load and
/// resolves selections against them by name. Registration takes `&mut
/// self`; resolution takes `&self` and may run from many threads at once,
/// sharing the optional resolution cache.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::prelude::*;
///
/// let registry = RecipeRegistry::with_builtin_recipes()?;
/// let styles = registry.resolve("menuButton", &VariantSelection::new().with("size", "sm"))?;
/// assert_eq!(styles.root_value("width"), Some("32px"));
/// # Ok::<(), horizon_lattice_recipe::Error>(())
/// ```
#[derive(Debug)]
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
    by_name: HashMap<String, usize>,
    cache: Option<ResolutionCache>,
}

impl RecipeRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::build(&EngineConfig::default())
    }

    /// Create an empty registry from a validated configuration.
    pub fn with_config(config: &EngineConfig) -> std::result::Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| ResolutionCache::with_capacity(config.cache.capacity));
        Self {
            recipes: vec![],
            by_name: HashMap::new(),
            cache,
        }
    }

    /// Create a registry holding the built-in menu button and tooltip recipes.
    pub fn with_builtin_recipes() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_builtin_recipes()?;
        Ok(registry)
    }

    /// Register the built-in menu button and tooltip recipes.
    pub fn register_builtin_recipes(&mut self) -> std::result::Result<(), ConfigurationError> {
        for definition in recipes::builtin_definitions() {
            self.register(definition)?;
        }
        Ok(())
    }

    /// Validate a definition and register the resulting recipe.
    pub fn register(
        &mut self,
        definition: RecipeDefinition,
    ) -> std::result::Result<Recipe, ConfigurationError> {
        if self.by_name.contains_key(definition.name()) {
            return Err(self.duplicate(definition.name()));
        }
        let recipe = define_recipe(definition)?;
        self.insert(recipe.clone())?;
        Ok(recipe)
    }

    /// Register an already-defined recipe.
    pub fn insert(&mut self, recipe: Recipe) -> std::result::Result<(), ConfigurationError> {
        if self.by_name.contains_key(recipe.name()) {
            return Err(self.duplicate(recipe.name()));
        }
        tracing::debug!(
            target: targets::REGISTRY,
            recipe = recipe.name(),
            "Registered recipe"
        );
        self.by_name.insert(recipe.name().to_string(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Load a recipe file and register it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Recipe> {
        let definition = loader::from_file(path)?;
        Ok(self.register(definition)?)
    }

    fn duplicate(&self, name: &str) -> ConfigurationError {
        tracing::warn!(target: targets::REGISTRY, recipe = name, "Duplicate recipe name");
        ConfigurationError::DuplicateRecipe {
            name: name.to_string(),
        }
    }

    /// Get a recipe by name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.by_name.get(name).map(|&index| &self.recipes[index])
    }

    /// Check whether a recipe is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered recipe names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(Recipe::name)
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Resolve a selection against a registered recipe.
    pub fn resolve(&self, name: &str, selection: &VariantSelection) -> Result<ResolvedStyleSet> {
        let recipe = self.get(name).ok_or_else(|| Error::unknown_recipe(name))?;
        let effective = recipe.effective_selection(selection)?;

        let Some(cache) = &self.cache else {
            return Ok(resolve_effective(recipe, &effective));
        };

        let key = ResolutionKey::new(recipe.id(), effective);
        if let Some(cached) = cache.get(&key) {
            tracing::trace!(target: targets::CACHE, recipe = name, "Resolution cache hit");
            return Ok(cached);
        }

        let resolved = resolve_effective(recipe, key.selection());
        cache.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Resolve a typed selection against a registered recipe.
    pub fn resolve_typed<V: Variants>(&self, name: &str, variants: &V) -> Result<ResolvedStyleSet> {
        self.resolve(name, &variants.selection())
    }

    /// Drop every memoized result.
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    /// Number of memoized results.
    pub fn cache_size(&self) -> usize {
        self.cache.as_ref().map_or(0, ResolutionCache::len)
    }

    /// Cache hit and miss counters, if caching is enabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResolutionCache::stats)
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
