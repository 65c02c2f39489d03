//! Memoization of resolved style sets.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::resolved::ResolvedStyleSet;
use crate::logging::targets;
use crate::recipe::{EffectiveSelection, RecipeId};

/// Cache key for resolved styles.
///
/// Keyed on the effective selection rather than the caller's, so that
/// `{}` and an explicit spelling of the defaults share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    recipe: RecipeId,
    selection: EffectiveSelection,
}

impl ResolutionKey {
    /// Create a new cache key.
    pub fn new(recipe: RecipeId, selection: EffectiveSelection) -> Self {
        Self { recipe, selection }
    }

    /// The recipe this key belongs to.
    pub fn recipe(&self) -> RecipeId {
        self.recipe
    }

    /// The effective selection this key was built from.
    pub fn selection(&self) -> &EffectiveSelection {
        &self.selection
    }
}

/// Hit and miss counters for a [`ResolutionCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
}

/// Thread-safe cache of resolved style sets.
///
/// Resolution is pure, so an entry never goes stale while its recipe is
/// registered. Readers share a lock; inserts take it exclusively.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<ResolutionKey, ResolvedStyleSet>>,
    max_size: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolutionCache {
    /// Create a new resolution cache.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a cache with specific capacity.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(max_size.min(1024))),
            max_size: max_size.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get a cached style set.
    pub fn get(&self, key: &ResolutionKey) -> Option<ResolvedStyleSet> {
        let found = self.entries.read().get(key).cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Insert a resolved style set into the cache.
    pub fn insert(&self, key: ResolutionKey, styles: ResolvedStyleSet) {
        let mut entries = self.entries.write();
        // Simple eviction: clear half when full
        if entries.len() >= self.max_size && !entries.contains_key(&key) {
            evict_half(&mut entries);
        }
        entries.insert(key, styles);
    }

    /// Drop every entry belonging to one recipe.
    pub fn invalidate(&self, recipe: RecipeId) {
        self.entries.write().retain(|key, _| key.recipe != recipe);
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.entries.write().clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// The configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Snapshot of hit and miss counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Evict half the entries (simple LRU approximation).
fn evict_half(entries: &mut HashMap<ResolutionKey, ResolvedStyleSet>) {
    let target = entries.len().div_ceil(2);
    let keys: Vec<_> = entries.keys().take(target).cloned().collect();
    for key in keys {
        entries.remove(&key);
    }
    tracing::debug!(target: targets::CACHE, evicted = target, "Evicted resolution cache entries");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Recipe, RecipeDefinition, VariantAxis, VariantSelection, define_recipe};
    use crate::style::StyleBlock;

    fn recipe() -> Recipe {
        define_recipe(
            RecipeDefinition::new("cached").variant(
                VariantAxis::new("size")
                    .value("sm", StyleBlock::new())
                    .value("md", StyleBlock::new())
                    .value("lg", StyleBlock::new()),
            ),
        )
        .unwrap()
    }

    fn key(recipe: &Recipe, size: &str) -> ResolutionKey {
        let effective = recipe
            .effective_selection(&VariantSelection::new().with("size", size))
            .unwrap();
        ResolutionKey::new(recipe.id(), effective)
    }

    #[test]
    fn cache_basic_operations() {
        let cache = ResolutionCache::new();
        let recipe = recipe();
        let key = key(&recipe, "sm");

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), ResolvedStyleSet::default());
        assert!(cache.get(&key).is_some());
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn cache_selection_differentiation() {
        let cache = ResolutionCache::new();
        let recipe = recipe();
        let small = key(&recipe, "sm");
        let large = key(&recipe, "lg");

        assert_ne!(small, large);
        cache.insert(small.clone(), ResolvedStyleSet::default());
        assert!(cache.get(&large).is_none());
    }

    #[test]
    fn cache_invalidation() {
        let cache = ResolutionCache::new();
        let first = recipe();
        let second = recipe();

        cache.insert(key(&first, "sm"), ResolvedStyleSet::default());
        cache.insert(key(&second, "sm"), ResolvedStyleSet::default());
        assert_eq!(cache.len(), 2);

        cache.invalidate(first.id());
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key(&second, "sm")).is_some());

        cache.invalidate_all();
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_evicts_when_full() {
        let cache = ResolutionCache::with_capacity(2);
        let recipe = recipe();
        assert_eq!(cache.capacity(), 2);
        assert_eq!(ResolutionCache::new().capacity(), 1024);

        cache.insert(key(&recipe, "sm"), ResolvedStyleSet::default());
        cache.insert(key(&recipe, "md"), ResolvedStyleSet::default());
        cache.insert(key(&recipe, "lg"), ResolvedStyleSet::default());

        assert!(cache.len() <= 2);
        assert!(cache.get(&key(&recipe, "lg")).is_some());
    }
}
