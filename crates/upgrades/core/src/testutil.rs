//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::context::{Collaborators, PlayerHandle, PlayerId, UpgradeContext};
use crate::events::{BusRegistry, GameEvents};
use crate::health::HealthSource;
use crate::runner::ConditionalEffectRunner;
use crate::spawn::SpawnPool;
use crate::stats::{GameRules, PlayerStats};

/// Minimal health component: clamps heals to max, no damage path.
pub(crate) struct StubHealth {
    hp: f64,
    max: f64,
}

impl StubHealth {
    pub(crate) fn new(hp: f64, max: f64) -> Self {
        Self { hp, max }
    }
}

impl HealthSource for StubHealth {
    fn current_hp(&self) -> f64 {
        self.hp
    }

    fn max_hp(&self) -> f64 {
        self.max
    }

    fn heal(&mut self, amount: f64) {
        self.hp = (self.hp + amount).min(self.max);
    }
}

pub(crate) fn test_collaborators() -> Collaborators {
    let mut registry = BusRegistry::new();
    let events = GameEvents::new(&mut registry);
    // Registry dropped here; buses stay alive through their own handles.
    Collaborators::new(
        PlayerStats::default(),
        GameRules::default(),
        SpawnPool::default(),
        ConditionalEffectRunner::shared(),
        events,
    )
}

/// Default-config context plus the collaborators keeping it alive.
pub(crate) fn test_context() -> (UpgradeContext, Collaborators) {
    let collab = test_collaborators();
    let ctx = UpgradeContext::for_player(&collab, PlayerHandle::new(PlayerId(1)));
    (ctx, collab)
}

/// Like [`test_context`] with a health source wired in.
pub(crate) fn test_context_with_health(
    health: StubHealth,
) -> (UpgradeContext, Collaborators, Rc<RefCell<StubHealth>>) {
    let health = Rc::new(RefCell::new(health));
    let collab = test_collaborators().with_health(health.clone());
    let ctx = UpgradeContext::for_player(&collab, PlayerHandle::new(PlayerId(1)));
    (ctx, collab, health)
}
