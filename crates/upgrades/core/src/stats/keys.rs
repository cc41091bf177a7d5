//! Stat-key enums for the two stat domains.
//!
//! Keys are closed enums rather than open strings: every key the engine can
//! address exists at compile time, and content files fail at parse time when
//! they name a stat that does not exist. `to_string` forms are the
//! human-readable names used on upgrade cards.

use strum::{Display, EnumIter, EnumString};

/// Keys into the player stat store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerStatKind {
    // Movement
    #[strum(serialize = "MoveSpeed", to_string = "Move Speed")]
    MoveSpeed,
    // Dash
    #[strum(serialize = "DashSpeed", to_string = "Dash Speed")]
    DashSpeed,
    #[strum(serialize = "DashCount", to_string = "Dash Count")]
    DashCount,
    #[strum(serialize = "DashCooldown", to_string = "Dash Cooldown")]
    DashCooldown,
    #[strum(serialize = "DashDistance", to_string = "Dash Distance")]
    DashDistance,
    // Combat
    #[strum(serialize = "AttackDamage", to_string = "Attack Damage")]
    AttackDamage,
    #[strum(serialize = "AttackSpeed", to_string = "Attack Speed")]
    AttackSpeed,
    #[strum(serialize = "AttackRange", to_string = "Attack Range")]
    AttackRange,
    #[strum(serialize = "CritChance", to_string = "Crit Chance")]
    CritChance,
    #[strum(serialize = "CritMultiplier", to_string = "Crit Multiplier")]
    CritMultiplier,
    // Defence
    #[strum(serialize = "MaxHealth", to_string = "Max Health")]
    MaxHealth,
    Armor,
    #[strum(serialize = "DodgeChance", to_string = "Dodge Chance")]
    DodgeChance,
    // Economy
    #[strum(serialize = "XpMultiplier", to_string = "XP Multiplier")]
    XpMultiplier,
}

/// Keys into the global game-rule store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameRuleKind {
    #[strum(serialize = "XpDropRate", to_string = "XP Drop Rate")]
    XpDropRate,
    #[strum(serialize = "RoomCount", to_string = "Room Count")]
    RoomCount,
    #[strum(serialize = "EliteSpawnChance", to_string = "Elite Spawn Chance")]
    EliteSpawnChance,
    #[strum(serialize = "EliteHealthMultiplier", to_string = "Elite HP Multiplier")]
    EliteHealthMultiplier,
}
