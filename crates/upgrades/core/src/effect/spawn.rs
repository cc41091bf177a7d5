//! Spawn-state effects.

use super::fmt_num;
use crate::context::UpgradeContext;

/// Multiplies the global spawn scale.
///
/// 1.5 means 50% more enemies; 0.5 means half as many. Removal applies the
/// reciprocal, so pairs cancel exactly even through the read floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnMultiplierEffect {
    pub multiplier: f64,
}

impl SpawnMultiplierEffect {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        ctx.spawn.borrow_mut().apply_multiplier(self.multiplier);
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        ctx.spawn.borrow_mut().apply_multiplier(1.0 / self.multiplier);
    }

    pub fn describe(&self) -> String {
        format!("{}× enemy spawn rate", fmt_num(self.multiplier))
    }
}

/// Adds and/or removes enemy type tags in the active spawn pool.
///
/// Example: an "elites only" card that removes normal enemies and enables
/// elite variants. Removal reverses both lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnPoolModifierEffect {
    pub add_to_pool: Vec<String>,
    pub remove_from_pool: Vec<String>,
}

impl SpawnPoolModifierEffect {
    pub fn new(
        add_to_pool: impl IntoIterator<Item = impl Into<String>>,
        remove_from_pool: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            add_to_pool: add_to_pool.into_iter().map(Into::into).collect(),
            remove_from_pool: remove_from_pool.into_iter().map(Into::into).collect(),
        }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        let mut spawn = ctx.spawn.borrow_mut();
        for tag in &self.add_to_pool {
            spawn.add_enemy_type(tag.clone());
        }
        for tag in &self.remove_from_pool {
            spawn.remove_enemy_type(tag);
        }
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        // Reverse: restore what was removed, drop what was added.
        let mut spawn = ctx.spawn.borrow_mut();
        for tag in &self.remove_from_pool {
            spawn.add_enemy_type(tag.clone());
        }
        for tag in &self.add_to_pool {
            spawn.remove_enemy_type(tag);
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.add_to_pool.is_empty() {
            parts.push(format!("Adds {} to spawns", self.add_to_pool.join(", ")));
        }
        if !self.remove_from_pool.is_empty() {
            parts.push(format!(
                "Removes {} from spawns",
                self.remove_from_pool.join(", ")
            ));
        }
        parts.join(". ")
    }
}
