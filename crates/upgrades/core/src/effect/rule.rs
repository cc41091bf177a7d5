//! Global game-rule effects.

use super::{fmt_num, fmt_signed};
use crate::context::UpgradeContext;
use crate::stats::GameRuleKind;

/// Changes a global rule value (XP drop rate, room count, elite tuning).
///
/// Carries both a flat and a multiplier delta; zero deltas are skipped so a
/// flat-only or multiplier-only effect touches exactly one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameRuleEffect {
    pub rule: GameRuleKind,
    pub flat_delta: f64,
    pub multiplier_delta: f64,
}

impl GameRuleEffect {
    pub fn flat(rule: GameRuleKind, delta: f64) -> Self {
        Self {
            rule,
            flat_delta: delta,
            multiplier_delta: 0.0,
        }
    }

    pub fn multiplier(rule: GameRuleKind, delta: f64) -> Self {
        Self {
            rule,
            flat_delta: 0.0,
            multiplier_delta: delta,
        }
    }

    pub fn new(rule: GameRuleKind, flat_delta: f64, multiplier_delta: f64) -> Self {
        Self {
            rule,
            flat_delta,
            multiplier_delta,
        }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        let mut rules = ctx.rules.borrow_mut();
        if self.flat_delta != 0.0 {
            rules.add_flat(self.rule, self.flat_delta);
        }
        if self.multiplier_delta != 0.0 {
            rules.add_multiplier(self.rule, self.multiplier_delta);
        }
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        let mut rules = ctx.rules.borrow_mut();
        if self.flat_delta != 0.0 {
            rules.add_flat(self.rule, -self.flat_delta);
        }
        if self.multiplier_delta != 0.0 {
            rules.add_multiplier(self.rule, -self.multiplier_delta);
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.flat_delta != 0.0 {
            parts.push(format!("{} {}", fmt_signed(self.flat_delta), self.rule));
        }
        if self.multiplier_delta != 0.0 {
            let pct = self.multiplier_delta * 100.0;
            let signed = if pct >= 0.0 {
                format!("+{}", fmt_num(pct))
            } else {
                fmt_num(pct)
            };
            parts.push(format!("{signed}% {}", self.rule));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_context;

    #[test]
    fn both_layers_round_trip() {
        let (ctx, _collab) = test_context();
        let effect = GameRuleEffect::new(GameRuleKind::RoomCount, 2.0, 0.5);
        let before = ctx.rules.borrow().room_count();

        effect.apply(&ctx);
        // (10 + 2) × 1.5
        assert_eq!(ctx.rules.borrow().room_count(), 18.0);

        effect.remove(&ctx);
        assert_eq!(ctx.rules.borrow().room_count(), before);
    }

    #[test]
    fn describe_joins_nonzero_parts() {
        let effect = GameRuleEffect::new(GameRuleKind::XpDropRate, 0.0, 0.25);
        assert_eq!(effect.describe(), "+25% XP Drop Rate");

        let both = GameRuleEffect::new(GameRuleKind::RoomCount, 2.0, 0.5);
        assert_eq!(both.describe(), "+2 Room Count, +50% Room Count");
    }
}
