//! Generic keyed stat collection.
//!
//! Both stat domains (player stats, game rules) are the same shape: a mapping
//! from a key enum to [`Stat`] values, keys fixed at construction. Effects
//! mutate the bonus layers through the store; game systems read computed
//! values. `reset_to_base` is used only at run boundaries.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::stat::Stat;

/// Marker bounds for a stat-key enum.
pub trait StatKey: Copy + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Copy + Eq + Hash + fmt::Debug + fmt::Display> StatKey for T {}

/// Keyed collection of [`Stat`]s. Keys are fixed at construction; there is no
/// dynamic key insertion. A key missing from the store is a configuration
/// error: it is reported and the operation is a no-op.
#[derive(Clone, Debug, Default)]
pub struct StatStore<K: StatKey> {
    stats: HashMap<K, Stat>,
}

impl<K: StatKey> StatStore<K> {
    /// Build a store from `(key, base value)` pairs.
    pub fn from_bases(bases: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self {
            stats: bases
                .into_iter()
                .map(|(key, base)| (key, Stat::new(base)))
                .collect(),
        }
    }

    /// Computed value for `key`, or 0.0 (reported) if the key is not present.
    pub fn get(&self, key: K) -> f64 {
        match self.stats.get(&key) {
            Some(stat) => stat.value(),
            None => {
                tracing::warn!(%key, "unknown stat key; returning 0");
                0.0
            }
        }
    }

    /// Computed value for `key` clamped to `[min, max]`.
    pub fn get_clamped(&self, key: K, min: f64, max: f64) -> f64 {
        self.get(key).clamp(min, max)
    }

    /// Borrow the underlying stat, if the key exists.
    pub fn stat(&self, key: K) -> Option<&Stat> {
        self.stats.get(&key)
    }

    /// Add a flat delta to `key`'s additive bonus pool.
    pub fn add_flat(&mut self, key: K, delta: f64) {
        match self.stats.get_mut(&key) {
            Some(stat) => stat.add_flat(delta),
            None => tracing::warn!(%key, delta, "unknown stat key; flat delta ignored"),
        }
    }

    /// Add a delta to `key`'s multiplier bonus pool.
    pub fn add_multiplier(&mut self, key: K, delta: f64) {
        match self.stats.get_mut(&key) {
            Some(stat) => stat.add_multiplier(delta),
            None => tracing::warn!(%key, delta, "unknown stat key; multiplier delta ignored"),
        }
    }

    /// Discard every bonus, restoring each stat to its configured base.
    ///
    /// Run-boundary operation; never called mid-run.
    pub fn reset_to_base(&mut self) {
        for stat in self.stats.values_mut() {
            stat.reset();
        }
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// True if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::keys::PlayerStatKind;

    fn store() -> StatStore<PlayerStatKind> {
        StatStore::from_bases([
            (PlayerStatKind::AttackDamage, 10.0),
            (PlayerStatKind::MoveSpeed, 5.0),
        ])
    }

    #[test]
    fn get_and_mutate() {
        let mut s = store();
        s.add_flat(PlayerStatKind::AttackDamage, 5.0);
        s.add_multiplier(PlayerStatKind::AttackDamage, 1.0);
        assert_eq!(s.get(PlayerStatKind::AttackDamage), 30.0);
        assert_eq!(s.get(PlayerStatKind::MoveSpeed), 5.0);
    }

    #[test]
    fn missing_key_is_reported_noop() {
        let mut s = store();
        // DashCount was never configured into this store
        s.add_flat(PlayerStatKind::DashCount, 3.0);
        assert_eq!(s.get(PlayerStatKind::DashCount), 0.0);
    }

    #[test]
    fn reset_restores_bases() {
        let mut s = store();
        s.add_flat(PlayerStatKind::AttackDamage, 99.0);
        s.add_multiplier(PlayerStatKind::MoveSpeed, -0.5);
        s.reset_to_base();
        assert_eq!(s.get(PlayerStatKind::AttackDamage), 10.0);
        assert_eq!(s.get(PlayerStatKind::MoveSpeed), 5.0);
    }
}
