//! Logging facilities for the recipe system.
//!
//! Horizon Lattice uses the `tracing` crate for instrumentation. Recipe
//! registration and loading log at `debug`, per-stage resolution detail at
//! `trace`, and rejected recipes at `warn`. Install a subscriber to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_recipe::resolve=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Recipe definition and validation target.
    pub const RECIPE: &str = "horizon_lattice_recipe::recipe";
    /// Recipe registry target.
    pub const REGISTRY: &str = "horizon_lattice_recipe::registry";
    /// Variant resolution target.
    pub const RESOLVE: &str = "horizon_lattice_recipe::resolve";
    /// Resolution cache target.
    pub const CACHE: &str = "horizon_lattice_recipe::cache";
    /// Recipe and config loading target.
    pub const LOADER: &str = "horizon_lattice_recipe::loader";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn targets_share_crate_prefix() {
        for target in [
            targets::RECIPE,
            targets::REGISTRY,
            targets::RESOLVE,
            targets::CACHE,
            targets::LOADER,
        ] {
            assert!(target.starts_with("horizon_lattice_recipe::"));
        }
    }
}
