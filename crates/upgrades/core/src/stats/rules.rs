//! Global game-rule store.

use strum::IntoEnumIterator;

use super::keys::GameRuleKind;
use super::store::StatStore;
use crate::config::RuleBaseConfig;

/// Holds global rule values for the current run.
///
/// Upgrade effects modify these; game systems (spawner, level generator,
/// loot tables) read them. Same flat+multiplier model as [`PlayerStats`]
/// (super::PlayerStats).
#[derive(Clone, Debug)]
pub struct GameRules {
    store: StatStore<GameRuleKind>,
}

impl GameRules {
    /// Build the store with every rule key, using `config`'s base values.
    pub fn new(config: &RuleBaseConfig) -> Self {
        Self {
            store: StatStore::from_bases(
                GameRuleKind::iter().map(|kind| (kind, config.base_for(kind))),
            ),
        }
    }

    /// Computed value for a rule key.
    pub fn get(&self, kind: GameRuleKind) -> f64 {
        self.store.get(kind)
    }

    /// Add a flat delta to a rule.
    pub fn add_flat(&mut self, kind: GameRuleKind, delta: f64) {
        self.store.add_flat(kind, delta);
    }

    /// Add a multiplier delta to a rule (0.5 = +50%).
    pub fn add_multiplier(&mut self, kind: GameRuleKind, delta: f64) {
        self.store.add_multiplier(kind, delta);
    }

    /// Wipe all bonuses. Run-boundary operation.
    pub fn reset_to_base(&mut self) {
        self.store.reset_to_base();
    }

    pub fn xp_drop_rate(&self) -> f64 {
        self.store.get(GameRuleKind::XpDropRate)
    }

    pub fn room_count(&self) -> f64 {
        self.store.get(GameRuleKind::RoomCount)
    }

    pub fn elite_spawn_chance(&self) -> f64 {
        self.store.get_clamped(GameRuleKind::EliteSpawnChance, 0.0, 1.0)
    }

    pub fn elite_health_multiplier(&self) -> f64 {
        self.store.get(GameRuleKind::EliteHealthMultiplier)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(&RuleBaseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let rules = GameRules::default();
        assert_eq!(rules.room_count(), 10.0);
        assert_eq!(rules.xp_drop_rate(), 1.0);
    }

    #[test]
    fn multiplier_composes_with_flat() {
        let mut rules = GameRules::default();
        rules.add_flat(GameRuleKind::RoomCount, 2.0);
        rules.add_multiplier(GameRuleKind::RoomCount, 0.5);
        // (10 + 2) × 1.5
        assert_eq!(rules.room_count(), 18.0);
    }
}
