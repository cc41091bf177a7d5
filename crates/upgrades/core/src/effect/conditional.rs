//! Conditional branch effects.
//!
//! A conditional wraps two effect lists behind a predicate. It never applies
//! its branches itself: `apply` registers the effect with the session's
//! [`ConditionalEffectRunner`](crate::runner::ConditionalEffectRunner), which
//! owns branch application and state-flip swapping.

use std::fmt;
use std::rc::Rc;

use super::{UpgradeEffect, fmt_num};
use crate::context::UpgradeContext;
use crate::runner::ConditionalEffectRunner;

/// Branch condition, re-evaluated every runner tick.
#[derive(Clone)]
pub enum Predicate {
    /// Current HP strictly below the threshold.
    HealthBelow(f64),
    /// Current HP strictly above the threshold.
    HealthAbove(f64),
    /// Effective room-count rule strictly below the threshold.
    FloorBelow(f64),
    /// Effective room-count rule strictly above the threshold.
    FloorAbove(f64),
    /// Game-specific hook for conditions the enum does not cover.
    Custom(Rc<dyn Fn(&UpgradeContext) -> bool>),
}

impl Predicate {
    /// Evaluate against the live collaborators. Health predicates with no
    /// health source wired report and answer `false`.
    pub fn evaluate(&self, ctx: &UpgradeContext) -> bool {
        match self {
            Self::HealthBelow(threshold) => match &ctx.health {
                Some(health) => health.borrow().current_hp() < *threshold,
                None => {
                    tracing::warn!(threshold, "health predicate with no health source; false");
                    false
                }
            },
            Self::HealthAbove(threshold) => match &ctx.health {
                Some(health) => health.borrow().current_hp() > *threshold,
                None => {
                    tracing::warn!(threshold, "health predicate with no health source; false");
                    false
                }
            },
            Self::FloorBelow(threshold) => ctx.rules.borrow().room_count() < *threshold,
            Self::FloorAbove(threshold) => ctx.rules.borrow().room_count() > *threshold,
            Self::Custom(hook) => hook(ctx),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::HealthBelow(t) => format!("below {} HP", fmt_num(*t)),
            Self::HealthAbove(t) => format!("above {} HP", fmt_num(*t)),
            Self::FloorBelow(t) => format!("before floor {}", fmt_num(*t)),
            Self::FloorAbove(t) => format!("after floor {}", fmt_num(*t)),
            Self::Custom(_) => "custom condition".to_string(),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HealthBelow(t) => f.debug_tuple("HealthBelow").field(t).finish(),
            Self::HealthAbove(t) => f.debug_tuple("HealthAbove").field(t).finish(),
            Self::FloorBelow(t) => f.debug_tuple("FloorBelow").field(t).finish(),
            Self::FloorAbove(t) => f.debug_tuple("FloorAbove").field(t).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The shared body of a conditional: predicate plus both branches.
///
/// Stacked applications of the same conditional share one body; the runner
/// pairs registrations by the `Rc` identity of this value.
#[derive(Debug)]
pub struct ConditionalInner {
    pub predicate: Predicate,
    pub when_true: Vec<UpgradeEffect>,
    pub when_false: Vec<UpgradeEffect>,
}

/// Applies one branch while the predicate holds and the other while it does
/// not, swapping atomically on state flips.
#[derive(Clone, Debug)]
pub struct ConditionalEffect {
    inner: Rc<ConditionalInner>,
}

impl ConditionalEffect {
    pub fn new(
        predicate: Predicate,
        when_true: Vec<UpgradeEffect>,
        when_false: Vec<UpgradeEffect>,
    ) -> Self {
        Self {
            inner: Rc::new(ConditionalInner {
                predicate,
                when_true,
                when_false,
            }),
        }
    }

    pub(crate) fn inner(&self) -> &Rc<ConditionalInner> {
        &self.inner
    }

    pub fn apply(&self, ctx: &UpgradeContext) {
        match ctx.runner() {
            Some(runner) => {
                ConditionalEffectRunner::register(&runner, Rc::clone(&self.inner), ctx.clone());
            }
            None => tracing::error!("conditional applied with no runner alive; skipped"),
        }
    }

    pub fn remove(&self, ctx: &UpgradeContext) {
        match ctx.runner() {
            Some(runner) => ConditionalEffectRunner::unregister(&runner, &self.inner),
            None => tracing::error!("conditional removed with no runner alive; skipped"),
        }
    }

    pub fn describe(&self) -> String {
        let list = |branch: &[UpgradeEffect]| {
            branch
                .iter()
                .map(UpgradeEffect::describe)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut text = format!(
            "While {}: {}",
            self.inner.predicate.describe(),
            list(&self.inner.when_true)
        );
        if !self.inner.when_false.is_empty() {
            text.push_str(&format!("; otherwise: {}", list(&self.inner.when_false)));
        }
        text
    }
}
