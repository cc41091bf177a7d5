//! Engine configuration: base stat values, base rule values, spawn tuning.
//!
//! Defaults here are starting points, not balance targets. The content crate
//! can override any of them from a TOML file.

use crate::stats::{GameRuleKind, PlayerStatKind};

/// Base values for every player stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerBaseConfig {
    // Movement
    pub move_speed: f64,
    // Dash
    pub dash_speed: f64,
    pub dash_count: f64,
    pub dash_cooldown: f64,
    pub dash_distance: f64,
    // Combat
    pub attack_damage: f64,
    pub attack_speed: f64,
    pub attack_range: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    // Defence
    pub max_health: f64,
    pub armor: f64,
    pub dodge_chance: f64,
    // Economy
    pub xp_multiplier: f64,
}

impl PlayerBaseConfig {
    /// Base value for a specific stat key.
    pub fn base_for(&self, kind: PlayerStatKind) -> f64 {
        match kind {
            PlayerStatKind::MoveSpeed => self.move_speed,
            PlayerStatKind::DashSpeed => self.dash_speed,
            PlayerStatKind::DashCount => self.dash_count,
            PlayerStatKind::DashCooldown => self.dash_cooldown,
            PlayerStatKind::DashDistance => self.dash_distance,
            PlayerStatKind::AttackDamage => self.attack_damage,
            PlayerStatKind::AttackSpeed => self.attack_speed,
            PlayerStatKind::AttackRange => self.attack_range,
            PlayerStatKind::CritChance => self.crit_chance,
            PlayerStatKind::CritMultiplier => self.crit_multiplier,
            PlayerStatKind::MaxHealth => self.max_health,
            PlayerStatKind::Armor => self.armor,
            PlayerStatKind::DodgeChance => self.dodge_chance,
            PlayerStatKind::XpMultiplier => self.xp_multiplier,
        }
    }
}

impl Default for PlayerBaseConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            dash_speed: 15.0,
            dash_count: 1.0,
            dash_cooldown: 1.0,
            dash_distance: 3.0,
            attack_damage: 10.0,
            attack_speed: 1.0,
            attack_range: 1.5,
            crit_chance: 0.0,
            crit_multiplier: 2.0,
            max_health: 100.0,
            armor: 0.0,
            dodge_chance: 0.0,
            xp_multiplier: 1.0,
        }
    }
}

/// Base values for every global game rule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleBaseConfig {
    pub xp_drop_rate: f64,
    pub room_count: f64,
    pub elite_spawn_chance: f64,
    pub elite_health_multiplier: f64,
}

impl RuleBaseConfig {
    /// Base value for a specific rule key.
    pub fn base_for(&self, kind: GameRuleKind) -> f64 {
        match kind {
            GameRuleKind::XpDropRate => self.xp_drop_rate,
            GameRuleKind::RoomCount => self.room_count,
            GameRuleKind::EliteSpawnChance => self.elite_spawn_chance,
            GameRuleKind::EliteHealthMultiplier => self.elite_health_multiplier,
        }
    }
}

impl Default for RuleBaseConfig {
    fn default() -> Self {
        Self {
            xp_drop_rate: 1.0,
            room_count: 10.0,
            elite_spawn_chance: 0.1,
            elite_health_multiplier: 1.0,
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub player: PlayerBaseConfig,
    pub rules: RuleBaseConfig,

    /// Minimum effective spawn scale. The raw scale factor composes
    /// multiplicatively and is clamped to this floor only on read.
    pub spawn_floor: f64,
}

impl EngineConfig {
    pub const DEFAULT_SPAWN_FLOOR: f64 = 0.0;

    pub fn new() -> Self {
        Self {
            player: PlayerBaseConfig::default(),
            rules: RuleBaseConfig::default(),
            spawn_floor: Self::DEFAULT_SPAWN_FLOOR,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
