//! Trigger effects: hook game events instead of mutating stats directly.
//!
//! Subscribe in `apply`, unsubscribe in `remove`, always paired. Runtime
//! state lives in per-application stacks behind interior mutability, so one
//! effect value supports stacked acquisitions and each `remove` undoes
//! exactly one of them (most recent first).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::fmt_num;
use crate::context::UpgradeContext;
use crate::events::{Binding, DashEvent, KillEvent, PlayerHealedEvent};
use crate::stats::PlayerStatKind;

/// Heals the player for a flat amount on each kill.
///
/// Goes through the context's health source; with none wired the heal is
/// reported and dropped. Each successful heal raises a
/// [`PlayerHealedEvent`].
#[derive(Debug)]
pub struct OnKillHealEffect {
    pub heal_amount: f64,
    bindings: RefCell<Vec<Binding>>,
}

impl OnKillHealEffect {
    pub fn new(heal_amount: f64) -> Self {
        Self {
            heal_amount,
            bindings: RefCell::new(Vec::new()),
        }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        let health = ctx.health.clone();
        let healed_bus = ctx.events.player_healed.clone();
        let amount = self.heal_amount;
        let binding = ctx.events.kills.register(move |_: &KillEvent| match &health {
            Some(health) => {
                let new_hp = {
                    let mut health = health.borrow_mut();
                    health.heal(amount);
                    health.current_hp()
                };
                healed_bus.raise(&PlayerHealedEvent { amount, new_hp });
            }
            None => {
                tracing::warn!(amount, "on-kill heal fired with no health source wired");
            }
        });
        self.bindings.borrow_mut().push(binding);
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        match self.bindings.borrow_mut().pop() {
            Some(binding) => ctx.events.kills.unsubscribe(&binding),
            None => tracing::warn!("on-kill heal removed more times than applied"),
        }
    }

    pub fn describe(&self) -> String {
        format!("Heal {} HP on kill", fmt_num(self.heal_amount))
    }
}

/// Per-application runtime state of the dash buff.
#[derive(Debug)]
struct BuffSlot {
    timer: Cell<f64>,
    active: Cell<bool>,
}

/// Flat attack-damage bonus for a few seconds after dashing.
///
/// Dashing while the buff is live refreshes the countdown without stacking
/// the bonus. The bonus comes off when the countdown expires or when the
/// effect itself is removed mid-buff.
#[derive(Debug)]
pub struct PostDashDamageBuffEffect {
    pub damage_bonus: f64,
    pub duration: f64,
    slots: RefCell<Vec<(Binding, Rc<BuffSlot>)>>,
}

impl PostDashDamageBuffEffect {
    pub fn new(damage_bonus: f64, duration: f64) -> Self {
        Self {
            damage_bonus,
            duration,
            slots: RefCell::new(Vec::new()),
        }
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        let slot = Rc::new(BuffSlot {
            timer: Cell::new(0.0),
            active: Cell::new(false),
        });
        let stats = Rc::clone(&ctx.stats);
        let bonus = self.damage_bonus;
        let duration = self.duration;
        let armed = Rc::clone(&slot);
        let binding = ctx.events.dashes.register(move |_: &DashEvent| {
            if !armed.active.get() {
                stats
                    .borrow_mut()
                    .add_flat(PlayerStatKind::AttackDamage, bonus);
                armed.active.set(true);
            }
            // Refresh on every dash, never stack.
            armed.timer.set(duration);
        });
        self.slots.borrow_mut().push((binding, slot));
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        match self.slots.borrow_mut().pop() {
            Some((binding, slot)) => {
                ctx.events.dashes.unsubscribe(&binding);
                if slot.active.get() {
                    ctx.stats
                        .borrow_mut()
                        .add_flat(PlayerStatKind::AttackDamage, -self.damage_bonus);
                    slot.active.set(false);
                }
            }
            None => tracing::warn!("dash buff removed more times than applied"),
        }
    }

    pub fn tick(&self, ctx: &UpgradeContext, dt: f64) {
        for (_, slot) in self.slots.borrow().iter() {
            if !slot.active.get() {
                continue;
            }
            let remaining = slot.timer.get() - dt;
            slot.timer.set(remaining);
            if remaining <= 0.0 {
                ctx.stats
                    .borrow_mut()
                    .add_flat(PlayerStatKind::AttackDamage, -self.damage_bonus);
                slot.active.set(false);
            }
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "+{} attack damage for {}s after dashing",
            fmt_num(self.damage_bonus),
            fmt_num(self.duration)
        )
    }
}
