//! Polymorphic upgrade effects.
//!
//! [`UpgradeEffect`] is a closed tagged union over the variant structs in the
//! submodules. Every variant upholds the same contract: `remove` is the exact
//! inverse of `apply`, so any apply/remove sequence that pairs up leaves the
//! collaborators untouched. Variants with runtime state (the triggers) keep a
//! per-application stack of that state so stacked acquisitions pair exactly.

mod conditional;
mod rule;
mod spawn;
mod stat;
mod trigger;

pub use conditional::{ConditionalEffect, ConditionalInner, Predicate};
pub use rule::GameRuleEffect;
pub use spawn::{SpawnMultiplierEffect, SpawnPoolModifierEffect};
pub use stat::{StatFlatEffect, StatMultiplierEffect};
pub use trigger::{OnKillHealEffect, PostDashDamageBuffEffect};

use crate::context::UpgradeContext;

/// One effect of an upgrade bundle.
#[derive(Debug)]
pub enum UpgradeEffect {
    /// Flat delta on a player stat.
    StatFlat(StatFlatEffect),
    /// Multiplier delta on a player stat.
    StatMultiplier(StatMultiplierEffect),
    /// Multiplies the global spawn scale.
    SpawnMultiplier(SpawnMultiplierEffect),
    /// Adds/removes enemy type tags in the spawn pool.
    SpawnPoolModifier(SpawnPoolModifierEffect),
    /// Flat and/or multiplier delta on a global game rule.
    GameRule(GameRuleEffect),
    /// Heals on every kill while applied.
    OnKillHeal(OnKillHealEffect),
    /// Temporary attack-damage buff armed by dashing.
    PostDashDamageBuff(PostDashDamageBuffEffect),
    /// Branch pair swapped by a predicate.
    Conditional(ConditionalEffect),
}

impl UpgradeEffect {
    /// Apply this effect against the context's collaborators.
    pub fn apply(&self, ctx: &UpgradeContext) {
        match self {
            Self::StatFlat(e) => e.apply(ctx),
            Self::StatMultiplier(e) => e.apply(ctx),
            Self::SpawnMultiplier(e) => e.apply(ctx),
            Self::SpawnPoolModifier(e) => e.apply(ctx),
            Self::GameRule(e) => e.apply(ctx),
            Self::OnKillHeal(e) => e.apply(ctx),
            Self::PostDashDamageBuff(e) => e.apply(ctx),
            Self::Conditional(e) => e.apply(ctx),
        }
    }

    /// Undo one prior [`apply`](Self::apply). Exact inverse per variant.
    pub fn remove(&self, ctx: &UpgradeContext) {
        match self {
            Self::StatFlat(e) => e.remove(ctx),
            Self::StatMultiplier(e) => e.remove(ctx),
            Self::SpawnMultiplier(e) => e.remove(ctx),
            Self::SpawnPoolModifier(e) => e.remove(ctx),
            Self::GameRule(e) => e.remove(ctx),
            Self::OnKillHeal(e) => e.remove(ctx),
            Self::PostDashDamageBuff(e) => e.remove(ctx),
            Self::Conditional(e) => e.remove(ctx),
        }
    }

    /// Whether this effect ever needs per-frame ticking.
    ///
    /// Static per variant. The dash buff reports true even while disarmed;
    /// its `tick` guards on the armed state itself. Deciding this from the
    /// runtime state instead would mean an effect applied while disarmed is
    /// never registered for ticking and the buff never expires.
    pub fn needs_tick(&self) -> bool {
        matches!(self, Self::PostDashDamageBuff(_))
    }

    /// Advance time-based state by `dt` seconds. No-op for non-ticking
    /// variants.
    pub fn tick(&self, ctx: &UpgradeContext, dt: f64) {
        if let Self::PostDashDamageBuff(e) = self {
            e.tick(ctx, dt);
        }
    }

    /// Human-readable one-line description. Pure.
    pub fn describe(&self) -> String {
        match self {
            Self::StatFlat(e) => e.describe(),
            Self::StatMultiplier(e) => e.describe(),
            Self::SpawnMultiplier(e) => e.describe(),
            Self::SpawnPoolModifier(e) => e.describe(),
            Self::GameRule(e) => e.describe(),
            Self::OnKillHeal(e) => e.describe(),
            Self::PostDashDamageBuff(e) => e.describe(),
            Self::Conditional(e) => e.describe(),
        }
    }
}

/// Format a number for card text: no trailing zeros, at most two decimals.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Signed variant of [`fmt_num`]: non-negative values get an explicit `+`.
pub(crate) fn fmt_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", fmt_num(value))
    } else {
        fmt_num(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(5.0), "5");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-2.0), "-2");
        assert_eq!(fmt_signed(5.0), "+5");
        assert_eq!(fmt_signed(-0.5), "-0.5");
    }
}
