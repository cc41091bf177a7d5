//! Deterministic upgrade and stat composition engine.
//!
//! `upgrade-core` defines the canonical rules of the upgrade system: the
//! typed event buses gameplay code raises into, the layered stat stores,
//! the polymorphic effect bundles, and the manager that tracks stacks and
//! serves card selections. Everything is single-threaded and side-effect
//! free beyond the collaborators passed in; supporting crates depend on the
//! types re-exported here.
pub mod config;
pub mod context;
pub mod definition;
pub mod effect;
pub mod events;
pub mod health;
pub mod manager;
pub mod rng;
pub mod runner;
pub mod spawn;
pub mod stats;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::{EngineConfig, PlayerBaseConfig, RuleBaseConfig};
pub use context::{Collaborators, PlayerHandle, PlayerId, UpgradeContext};
pub use definition::{Category, Rarity, UpgradeDefinition, UpgradeDisplay};
pub use effect::{
    ConditionalEffect, GameRuleEffect, OnKillHealEffect, PostDashDamageBuffEffect, Predicate,
    SpawnMultiplierEffect, SpawnPoolModifierEffect, StatFlatEffect, StatMultiplierEffect,
    UpgradeEffect,
};
pub use events::{BusRegistry, EventBus, GameEvents, Position};
pub use health::HealthSource;
pub use manager::{UpgradeError, UpgradeManager};
pub use rng::{PcgRng, RngOracle};
pub use runner::ConditionalEffectRunner;
pub use spawn::SpawnPool;
pub use stats::{GameRuleKind, GameRules, PlayerStatKind, PlayerStats, Stat, StatStore};
