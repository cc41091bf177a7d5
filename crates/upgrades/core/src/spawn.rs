//! Enemy spawn state: active type tags and the global spawn scale.
//!
//! Upgrade effects call the mutating API here; spawn logic reads from it.
//! The scale composes multiplicatively on a raw factor, and the configured
//! floor is applied only on read, so an apply/remove pair (`×m` then `×1/m`)
//! is an exact inverse even if the effective value was floored in between.

use std::collections::BTreeSet;

/// Spawn pool membership and global spawn scale for the current run.
#[derive(Clone, Debug)]
pub struct SpawnPool {
    /// Raw multiplicative factor. 1.0 = baseline, 1.5 = 50% more enemies.
    raw_scale: f64,

    /// Minimum effective scale, applied on read only.
    floor: f64,

    active_types: BTreeSet<String>,
}

impl SpawnPool {
    /// Create a pool at baseline scale with the given read floor.
    pub fn new(floor: f64) -> Self {
        Self {
            raw_scale: 1.0,
            floor,
            active_types: BTreeSet::new(),
        }
    }

    /// Effective spawn scale: the raw factor clamped to the floor.
    pub fn scale(&self) -> f64 {
        self.raw_scale.max(self.floor)
    }

    /// Raw (unfloored) scale factor. Mainly useful for diagnostics and tests.
    pub fn raw_scale(&self) -> f64 {
        self.raw_scale
    }

    /// Multiply the spawn scale by `multiplier`.
    ///
    /// Removal of a spawn-scale effect applies the reciprocal. Non-positive
    /// or non-finite multipliers are configuration errors: reported, ignored.
    pub fn apply_multiplier(&mut self, multiplier: f64) {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            tracing::warn!(multiplier, "invalid spawn multiplier; ignored");
            return;
        }
        self.raw_scale *= multiplier;
        tracing::debug!(scale = self.scale(), "spawn scale changed");
    }

    /// Add an enemy type tag to the active pool.
    pub fn add_enemy_type(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        tracing::debug!(%tag, "enemy type added to spawn pool");
        self.active_types.insert(tag);
    }

    /// Remove an enemy type tag from the active pool.
    pub fn remove_enemy_type(&mut self, tag: &str) {
        if self.active_types.remove(tag) {
            tracing::debug!(%tag, "enemy type removed from spawn pool");
        }
    }

    /// Whether a tag is currently in the active pool.
    pub fn is_type_active(&self, tag: &str) -> bool {
        self.active_types.contains(tag)
    }

    /// All active tags, in sorted order.
    pub fn active_types(&self) -> impl Iterator<Item = &str> {
        self.active_types.iter().map(String::as_str)
    }

    /// Baseline scale, empty pool. Run-boundary operation.
    pub fn reset_to_base(&mut self) {
        self.raw_scale = 1.0;
        self.active_types.clear();
    }
}

impl Default for SpawnPool {
    fn default() -> Self {
        Self::new(crate::config::EngineConfig::DEFAULT_SPAWN_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn multipliers_compose_multiplicatively() {
        let mut pool = SpawnPool::default();
        pool.apply_multiplier(1.5);
        pool.apply_multiplier(2.0);
        assert!(close(pool.scale(), 3.0));
    }

    #[test]
    fn reciprocal_is_exact_inverse_through_floor() {
        let mut pool = SpawnPool::new(0.5);
        pool.apply_multiplier(0.1); // raw 0.1, effective floored to 0.5
        assert!(close(pool.scale(), 0.5));
        pool.apply_multiplier(1.0 / 0.1);
        assert!(close(pool.scale(), 1.0));
    }

    #[test]
    fn invalid_multiplier_ignored() {
        let mut pool = SpawnPool::default();
        pool.apply_multiplier(0.0);
        pool.apply_multiplier(-2.0);
        pool.apply_multiplier(f64::NAN);
        assert!(close(pool.scale(), 1.0));
    }

    #[test]
    fn tag_set_membership() {
        let mut pool = SpawnPool::default();
        pool.add_enemy_type("elite");
        pool.add_enemy_type("grunt");
        pool.remove_enemy_type("grunt");
        assert!(pool.is_type_active("elite"));
        assert!(!pool.is_type_active("grunt"));
        assert_eq!(pool.active_types().collect::<Vec<_>>(), vec!["elite"]);
    }

    #[test]
    fn reset_restores_baseline() {
        let mut pool = SpawnPool::default();
        pool.apply_multiplier(4.0);
        pool.add_enemy_type("elite");
        pool.reset_to_base();
        assert!(close(pool.scale(), 1.0));
        assert_eq!(pool.active_types().count(), 0);
    }
}
