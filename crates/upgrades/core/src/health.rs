//! Health-component contract.
//!
//! The engine never owns player health; combat code does. Effects that heal
//! and predicates that compare HP go through this trait. When no source is
//! wired into the context, those paths report once and degrade to a no-op
//! (heals) or `false` (predicates).

/// Read/heal access to the tracked player's health.
pub trait HealthSource {
    /// Current hit points.
    fn current_hp(&self) -> f64;

    /// Maximum hit points.
    fn max_hp(&self) -> f64;

    /// Restore `amount` hit points, clamped to the maximum by the
    /// implementation.
    fn heal(&mut self, amount: f64);

    /// Current HP as a fraction of maximum, in `[0, 1]`.
    fn hp_fraction(&self) -> f64 {
        let max = self.max_hp();
        if max > 0.0 {
            (self.current_hp() / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
