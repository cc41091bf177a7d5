//! Player stat store.

use strum::IntoEnumIterator;

use super::keys::PlayerStatKind;
use super::store::StatStore;
use crate::config::PlayerBaseConfig;

/// Central stat store for the player.
///
/// All values are computed through the layered [`Stat`](super::Stat) model,
/// so upgrades compose correctly regardless of application order. Upgrade
/// effects call `add_flat`/`add_multiplier`; game systems read the typed
/// accessors.
#[derive(Clone, Debug)]
pub struct PlayerStats {
    store: StatStore<PlayerStatKind>,
}

impl PlayerStats {
    /// Build the store with every stat key, using `config`'s base values.
    pub fn new(config: &PlayerBaseConfig) -> Self {
        Self {
            store: StatStore::from_bases(
                PlayerStatKind::iter().map(|kind| (kind, config.base_for(kind))),
            ),
        }
    }

    /// Computed value for a stat key.
    pub fn get(&self, kind: PlayerStatKind) -> f64 {
        self.store.get(kind)
    }

    /// Add a flat delta to a stat.
    pub fn add_flat(&mut self, kind: PlayerStatKind, delta: f64) {
        self.store.add_flat(kind, delta);
    }

    /// Add a multiplier delta to a stat (0.5 = +50%).
    pub fn add_multiplier(&mut self, kind: PlayerStatKind, delta: f64) {
        self.store.add_multiplier(kind, delta);
    }

    /// Wipe all bonuses. Run-boundary operation.
    pub fn reset_to_base(&mut self) {
        self.store.reset_to_base();
    }

    // Typed accessors. Game systems read these instead of raw keys; clamping
    // for stats with natural bounds happens here, after all composition.

    pub fn move_speed(&self) -> f64 {
        self.store.get(PlayerStatKind::MoveSpeed)
    }

    pub fn dash_speed(&self) -> f64 {
        self.store.get(PlayerStatKind::DashSpeed)
    }

    pub fn dash_count(&self) -> u32 {
        self.store.get(PlayerStatKind::DashCount).round().max(0.0) as u32
    }

    pub fn dash_cooldown(&self) -> f64 {
        self.store.get(PlayerStatKind::DashCooldown).max(0.05)
    }

    pub fn dash_distance(&self) -> f64 {
        self.store.get(PlayerStatKind::DashDistance)
    }

    pub fn attack_damage(&self) -> f64 {
        self.store.get(PlayerStatKind::AttackDamage)
    }

    pub fn attack_speed(&self) -> f64 {
        self.store.get(PlayerStatKind::AttackSpeed)
    }

    pub fn attack_range(&self) -> f64 {
        self.store.get(PlayerStatKind::AttackRange)
    }

    pub fn crit_chance(&self) -> f64 {
        self.store.get_clamped(PlayerStatKind::CritChance, 0.0, 1.0)
    }

    pub fn crit_multiplier(&self) -> f64 {
        self.store.get(PlayerStatKind::CritMultiplier)
    }

    pub fn max_health(&self) -> f64 {
        self.store.get(PlayerStatKind::MaxHealth)
    }

    pub fn armor(&self) -> f64 {
        self.store.get(PlayerStatKind::Armor)
    }

    pub fn dodge_chance(&self) -> f64 {
        self.store.get_clamped(PlayerStatKind::DodgeChance, 0.0, 1.0)
    }

    pub fn xp_multiplier(&self) -> f64 {
        self.store.get(PlayerStatKind::XpMultiplier)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(&PlayerBaseConfig::default())
    }
}
