//! Layered stat model.
//!
//! A [`Stat`] is a single layered value (base + flat bonus + multiplier
//! bonus, recomputed on read). [`StatStore`] is a keyed collection of them,
//! and [`PlayerStats`]/[`GameRules`] are the two stat domains upgrades can
//! touch.

mod keys;
mod player;
mod rules;
mod stat;
mod store;

pub use keys::{GameRuleKind, PlayerStatKind};
pub use player::PlayerStats;
pub use rules::GameRules;
pub use stat::Stat;
pub use store::{StatKey, StatStore};
