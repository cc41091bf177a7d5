//! Player stat deltas, the bread-and-butter effects.

use super::{fmt_num, fmt_signed};
use crate::context::UpgradeContext;
use crate::stats::PlayerStatKind;

/// Adds a flat value to a single player stat.
///
/// Example: +2 dash count, +5 attack damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatFlatEffect {
    pub stat: PlayerStatKind,
    pub amount: f64,
}

impl StatFlatEffect {
    pub fn new(stat: PlayerStatKind, amount: f64) -> Self {
        Self { stat, amount }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        ctx.stats.borrow_mut().add_flat(self.stat, self.amount);
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        ctx.stats.borrow_mut().add_flat(self.stat, -self.amount);
    }

    pub fn describe(&self) -> String {
        format!("{} {}", fmt_signed(self.amount), self.stat)
    }
}

/// Adds a multiplier delta to a single player stat.
///
/// `percent` is additive in multiplier space: 1.0 doubles the stat,
/// -0.25 cuts it by a quarter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatMultiplierEffect {
    pub stat: PlayerStatKind,
    pub percent: f64,
}

impl StatMultiplierEffect {
    pub fn new(stat: PlayerStatKind, percent: f64) -> Self {
        Self { stat, percent }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        ctx.stats.borrow_mut().add_multiplier(self.stat, self.percent);
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        ctx.stats.borrow_mut().add_multiplier(self.stat, -self.percent);
    }

    pub fn describe(&self) -> String {
        format!("{}% {}", fmt_signed_pct(self.percent), self.stat)
    }
}

fn fmt_signed_pct(percent: f64) -> String {
    let pct = percent * 100.0;
    if pct >= 0.0 {
        format!("+{}", fmt_num(pct))
    } else {
        fmt_num(pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_context;

    #[test]
    fn flat_apply_remove_round_trip() {
        let (ctx, _collab) = test_context();
        let effect = StatFlatEffect::new(PlayerStatKind::AttackDamage, 5.0);
        let before = ctx.stats.borrow().attack_damage();

        effect.apply(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), before + 5.0);

        effect.remove(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), before);
    }

    #[test]
    fn multiplier_composes_with_flat() {
        let (ctx, _collab) = test_context();
        StatFlatEffect::new(PlayerStatKind::AttackDamage, 10.0).apply(&ctx);
        StatMultiplierEffect::new(PlayerStatKind::AttackDamage, 0.5).apply(&ctx);
        // (10 base + 10 flat) × 1.5
        assert_eq!(ctx.stats.borrow().attack_damage(), 30.0);
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            StatFlatEffect::new(PlayerStatKind::AttackDamage, 5.0).describe(),
            "+5 Attack Damage"
        );
        assert_eq!(
            StatMultiplierEffect::new(PlayerStatKind::MoveSpeed, -0.25).describe(),
            "-25% Move Speed"
        );
    }
}
