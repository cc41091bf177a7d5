//! Single layered stat value.
//!
//! Every numeric value that upgrades can touch is a [`Stat`]: a fixed base
//! plus an additive bonus pool and an additive multiplier pool. The final
//! value is recomputed on every read and never cached, so bonuses compose
//! correctly regardless of application order.
//!
//! `value = (base + flat) × (1 + multiplier)`

/// A layered numeric value: base, flat bonus, multiplier bonus.
///
/// Bonuses are only ever changed through paired `add_flat`/`add_multiplier`
/// calls whose net effect over an apply/remove pair is zero (removal applies
/// the additive inverse). A `Stat` is exclusively owned by its store and is
/// never shared between stores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    base: f64,
    flat_bonus: f64,
    multiplier_bonus: f64,
}

impl Stat {
    /// Create a stat with the given base value and no bonuses.
    pub fn new(base: f64) -> Self {
        Self {
            base,
            flat_bonus: 0.0,
            multiplier_bonus: 0.0,
        }
    }

    /// Final computed value: `(base + flat) × (1 + multiplier)`.
    pub fn value(&self) -> f64 {
        (self.base + self.flat_bonus) * (1.0 + self.multiplier_bonus)
    }

    /// Final value clamped to `[min, max]`.
    pub fn value_clamped(&self, min: f64, max: f64) -> f64 {
        self.value().clamp(min, max)
    }

    /// The configured base value (unaffected by bonuses).
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Add a flat delta to the additive bonus pool.
    pub fn add_flat(&mut self, delta: f64) {
        self.flat_bonus += delta;
    }

    /// Add a delta to the additive multiplier pool (0.5 = +50%).
    pub fn add_multiplier(&mut self, delta: f64) {
        self.multiplier_bonus += delta;
    }

    /// Discard all bonuses, restoring the configured base value.
    pub fn reset(&mut self) {
        self.flat_bonus = 0.0;
        self.multiplier_bonus = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_combines_layers() {
        let mut stat = Stat::new(10.0);
        stat.add_flat(5.0);
        stat.add_multiplier(0.5);
        // (10 + 5) × 1.5
        assert_eq!(stat.value(), 22.5);
    }

    #[test]
    fn paired_flat_deltas_cancel() {
        let mut stat = Stat::new(10.0);
        let before = stat.value();
        stat.add_flat(7.0);
        stat.add_multiplier(0.25);
        stat.add_flat(-7.0);
        stat.add_multiplier(-0.25);
        assert_eq!(stat.value(), before);
    }

    #[test]
    fn interleaved_pairs_are_order_independent() {
        let mut a = Stat::new(10.0);
        a.add_flat(3.0);
        a.add_multiplier(0.5);
        a.add_flat(2.0);

        let mut b = Stat::new(10.0);
        b.add_flat(2.0);
        b.add_flat(3.0);
        b.add_multiplier(0.5);

        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn reset_discards_bonuses() {
        let mut stat = Stat::new(4.0);
        stat.add_flat(10.0);
        stat.add_multiplier(1.0);
        stat.reset();
        assert_eq!(stat.value(), 4.0);
    }

    #[test]
    fn value_clamped_bounds() {
        let mut stat = Stat::new(1.0);
        stat.add_flat(100.0);
        assert_eq!(stat.value_clamped(0.0, 10.0), 10.0);
    }
}
