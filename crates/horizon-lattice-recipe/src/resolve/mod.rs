//! Variant resolution engine.

mod accumulator;
mod cache;
mod engine;
mod resolved;

pub use cache::{CacheStats, ResolutionCache, ResolutionKey};
pub use engine::resolve;
pub use resolved::{ResolvedStyleSet, StyleDeclaration};

pub(crate) use engine::resolve_effective;
