//! Runtime for conditional effects.
//!
//! Holds one record per registered conditional and re-evaluates predicates on
//! every tick. When a predicate flips, the old branch is removed and the new
//! branch applied back-to-back, so observers never see both branches (or
//! neither) active at once.
//!
//! Register/unregister calls arriving while a tick is in flight are deferred
//! to the end of that tick. Branch effects may themselves be conditionals;
//! the runner is shared behind `Rc<RefCell<..>>` and the entry points take
//! the shared handle so nested registration re-borrows instead of
//! deadlocking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::context::UpgradeContext;
use crate::effect::ConditionalInner;

struct ConditionalRecord {
    inner: Rc<ConditionalInner>,
    ctx: UpgradeContext,
    last_state: Cell<bool>,
}

enum PendingOp {
    Register {
        inner: Rc<ConditionalInner>,
        ctx: UpgradeContext,
    },
    Unregister {
        inner: Rc<ConditionalInner>,
    },
}

/// Evaluates registered conditionals and swaps their branches on state flips.
#[derive(Default)]
pub struct ConditionalEffectRunner {
    records: Vec<Rc<ConditionalRecord>>,
    ticking: bool,
    pending: Vec<PendingOp>,
}

impl ConditionalEffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle for wiring into collaborators.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register a conditional and immediately apply the branch matching its
    /// current predicate state. Deferred to end-of-tick if called mid-tick.
    pub fn register(runner: &Rc<RefCell<Self>>, inner: Rc<ConditionalInner>, ctx: UpgradeContext) {
        {
            let mut this = runner.borrow_mut();
            if this.ticking {
                this.pending.push(PendingOp::Register { inner, ctx });
                return;
            }
        }
        Self::register_now(runner, inner, ctx);
    }

    /// Unregister the most recent registration of `inner` and remove
    /// whichever branch it currently has applied. Deferred to end-of-tick if
    /// called mid-tick.
    pub fn unregister(runner: &Rc<RefCell<Self>>, inner: &Rc<ConditionalInner>) {
        {
            let mut this = runner.borrow_mut();
            if this.ticking {
                this.pending.push(PendingOp::Unregister {
                    inner: Rc::clone(inner),
                });
                return;
            }
        }
        Self::unregister_now(runner, inner);
    }

    /// Re-evaluate every record and swap branches where the state flipped.
    ///
    /// Iterates a snapshot; registrations and unregistrations requested by
    /// branch effects during the tick apply after the last record.
    pub fn tick(runner: &Rc<RefCell<Self>>) {
        let snapshot: Vec<Rc<ConditionalRecord>> = {
            let mut this = runner.borrow_mut();
            if this.ticking {
                return;
            }
            this.ticking = true;
            this.records.clone()
        };

        for record in snapshot {
            let current = record.inner.predicate.evaluate(&record.ctx);
            if current == record.last_state.get() {
                continue;
            }
            remove_branch(&record.inner, &record.ctx, record.last_state.get());
            apply_branch(&record.inner, &record.ctx, current);
            record.last_state.set(current);
        }

        let pending = {
            let mut this = runner.borrow_mut();
            this.ticking = false;
            std::mem::take(&mut this.pending)
        };
        for op in pending {
            match op {
                PendingOp::Register { inner, ctx } => Self::register_now(runner, inner, ctx),
                PendingOp::Unregister { inner } => Self::unregister_now(runner, &inner),
            }
        }
    }

    /// Number of registered conditionals.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn register_now(runner: &Rc<RefCell<Self>>, inner: Rc<ConditionalInner>, ctx: UpgradeContext) {
        let state = inner.predicate.evaluate(&ctx);
        let record = Rc::new(ConditionalRecord {
            inner: Rc::clone(&inner),
            ctx: ctx.clone(),
            last_state: Cell::new(state),
        });
        runner.borrow_mut().records.push(record);
        // Outside the borrow: the branch may contain nested conditionals.
        apply_branch(&inner, &ctx, state);
    }

    fn unregister_now(runner: &Rc<RefCell<Self>>, inner: &Rc<ConditionalInner>) {
        let record = {
            let mut this = runner.borrow_mut();
            this.records
                .iter()
                .rposition(|record| Rc::ptr_eq(&record.inner, inner))
                .map(|pos| this.records.remove(pos))
        };
        match record {
            Some(record) => {
                remove_branch(&record.inner, &record.ctx, record.last_state.get());
            }
            None => tracing::warn!("conditional unregistered with no matching record"),
        }
    }
}

fn apply_branch(inner: &ConditionalInner, ctx: &UpgradeContext, state: bool) {
    let branch = if state {
        &inner.when_true
    } else {
        &inner.when_false
    };
    for effect in branch {
        effect.apply(ctx);
    }
}

fn remove_branch(inner: &ConditionalInner, ctx: &UpgradeContext, state: bool) {
    let branch = if state {
        &inner.when_true
    } else {
        &inner.when_false
    };
    for effect in branch {
        effect.remove(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{
        ConditionalEffect, Predicate, StatFlatEffect, StatMultiplierEffect, UpgradeEffect,
    };
    use crate::stats::PlayerStatKind;
    use crate::testutil::test_context;

    fn flag_predicate() -> (Rc<Cell<bool>>, Predicate) {
        let flag = Rc::new(Cell::new(false));
        let read = Rc::clone(&flag);
        (
            flag,
            Predicate::Custom(Rc::new(move |_: &UpgradeContext| read.get())),
        )
    }

    fn flat(amount: f64) -> UpgradeEffect {
        UpgradeEffect::StatFlat(StatFlatEffect::new(PlayerStatKind::AttackDamage, amount))
    }

    #[test]
    fn register_applies_matching_branch_immediately() {
        let (ctx, collab) = test_context();
        let (_flag, predicate) = flag_predicate();
        let conditional = ConditionalEffect::new(predicate, vec![flat(10.0)], vec![flat(-2.0)]);

        conditional.apply(&ctx);
        // Flag starts false, so the false branch is live.
        assert_eq!(ctx.stats.borrow().attack_damage(), 8.0);
        assert_eq!(collab.runner.borrow().len(), 1);
    }

    #[test]
    fn tick_swaps_branches_on_state_flip() {
        let (ctx, collab) = test_context();
        let (flag, predicate) = flag_predicate();
        let conditional = ConditionalEffect::new(predicate, vec![flat(10.0)], vec![flat(-2.0)]);
        conditional.apply(&ctx);

        flag.set(true);
        ConditionalEffectRunner::tick(&collab.runner);
        assert_eq!(ctx.stats.borrow().attack_damage(), 20.0);

        // No flip, no change.
        ConditionalEffectRunner::tick(&collab.runner);
        assert_eq!(ctx.stats.borrow().attack_damage(), 20.0);

        flag.set(false);
        ConditionalEffectRunner::tick(&collab.runner);
        assert_eq!(ctx.stats.borrow().attack_damage(), 8.0);
    }

    #[test]
    fn unregister_removes_active_branch() {
        let (ctx, collab) = test_context();
        let (flag, predicate) = flag_predicate();
        let conditional = ConditionalEffect::new(
            predicate,
            vec![UpgradeEffect::StatMultiplier(StatMultiplierEffect::new(
                PlayerStatKind::AttackDamage,
                0.5,
            ))],
            vec![],
        );
        conditional.apply(&ctx);
        flag.set(true);
        ConditionalEffectRunner::tick(&collab.runner);
        assert_eq!(ctx.stats.borrow().attack_damage(), 15.0);

        conditional.remove(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), 10.0);
        assert!(collab.runner.borrow().is_empty());
    }

    #[test]
    fn stacked_registrations_pair_by_identity() {
        let (ctx, collab) = test_context();
        let (_flag, predicate) = flag_predicate();
        let conditional = ConditionalEffect::new(predicate, vec![], vec![flat(-2.0)]);
        conditional.apply(&ctx);
        conditional.apply(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), 6.0);
        assert_eq!(collab.runner.borrow().len(), 2);

        conditional.remove(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), 8.0);
        assert_eq!(collab.runner.borrow().len(), 1);
    }

    #[test]
    fn nested_conditional_registers_during_tick() {
        // The true branch contains another conditional. The nested
        // registration lands mid-tick and must defer, then apply.
        let (ctx, collab) = test_context();
        let (outer_flag, outer_pred) = flag_predicate();
        let nested = ConditionalEffect::new(
            Predicate::Custom(Rc::new(|_: &UpgradeContext| true)),
            vec![flat(1.0)],
            vec![],
        );
        let outer = ConditionalEffect::new(
            outer_pred,
            vec![UpgradeEffect::Conditional(nested)],
            vec![],
        );
        outer.apply(&ctx);
        assert_eq!(ctx.stats.borrow().attack_damage(), 10.0);

        outer_flag.set(true);
        ConditionalEffectRunner::tick(&collab.runner);
        assert_eq!(ctx.stats.borrow().attack_damage(), 11.0);
        assert_eq!(collab.runner.borrow().len(), 2);
    }
}
