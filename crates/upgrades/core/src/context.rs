//! The collaborator bundle passed to every effect.
//!
//! All mutable game state an effect may touch lives behind shared handles;
//! the context is a cheap-clone bundle of those handles plus the player it
//! was built for. Collaborators are constructed once at session start and
//! passed explicitly; there are no ambient globals.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::events::{GameEvents, Position};
use crate::health::HealthSource;
use crate::runner::ConditionalEffectRunner;
use crate::spawn::SpawnPool;
use crate::stats::{GameRules, PlayerStats};

/// Identity of a tracked player within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

/// Player locator: identity plus a live position slot the movement system
/// writes and effects read.
#[derive(Clone, Debug)]
pub struct PlayerHandle {
    id: PlayerId,
    position: Rc<Cell<Position>>,
}

impl PlayerHandle {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: Rc::new(Cell::new(Position::default())),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position.get()
    }

    /// Called by the movement system; effects only read.
    pub fn set_position(&self, position: Position) {
        self.position.set(position);
    }
}

/// Shared handles to the live collaborators the upgrade system mutates.
///
/// Built once at session start; the manager derives per-player
/// [`UpgradeContext`]s from it.
#[derive(Clone)]
pub struct Collaborators {
    pub stats: Rc<RefCell<PlayerStats>>,
    pub rules: Rc<RefCell<GameRules>>,
    pub spawn: Rc<RefCell<SpawnPool>>,
    pub runner: Rc<RefCell<ConditionalEffectRunner>>,
    pub events: GameEvents,
    pub health: Option<Rc<RefCell<dyn HealthSource>>>,
}

impl Collaborators {
    pub fn new(
        stats: PlayerStats,
        rules: GameRules,
        spawn: SpawnPool,
        runner: Rc<RefCell<ConditionalEffectRunner>>,
        events: GameEvents,
    ) -> Self {
        Self {
            stats: Rc::new(RefCell::new(stats)),
            rules: Rc::new(RefCell::new(rules)),
            spawn: Rc::new(RefCell::new(spawn)),
            runner,
            events,
            health: None,
        }
    }

    /// Wire a health component in. Without one, heal effects and HP
    /// predicates degrade (see [`HealthSource`]).
    pub fn with_health(mut self, health: Rc<RefCell<dyn HealthSource>>) -> Self {
        self.health = Some(health);
        self
    }
}

/// Passed to every effect on apply/remove/tick. Short-lived, non-owning:
/// clones share the same underlying collaborators.
///
/// The runner handle is weak to keep the runner's own records (which hold
/// contexts) from keeping it alive forever.
#[derive(Clone)]
pub struct UpgradeContext {
    pub player: PlayerHandle,
    pub stats: Rc<RefCell<PlayerStats>>,
    pub rules: Rc<RefCell<GameRules>>,
    pub spawn: Rc<RefCell<SpawnPool>>,
    pub events: GameEvents,
    pub health: Option<Rc<RefCell<dyn HealthSource>>>,
    runner: Weak<RefCell<ConditionalEffectRunner>>,
}

impl UpgradeContext {
    /// Build a context for `player` from the session collaborators.
    pub fn for_player(collab: &Collaborators, player: PlayerHandle) -> Self {
        Self {
            player,
            stats: Rc::clone(&collab.stats),
            rules: Rc::clone(&collab.rules),
            spawn: Rc::clone(&collab.spawn),
            events: collab.events.clone(),
            health: collab.health.clone(),
            runner: Rc::downgrade(&collab.runner),
        }
    }

    /// Upgrade the runner handle. `None` means the session's runner is gone,
    /// which is a configuration error for conditional effects.
    pub fn runner(&self) -> Option<Rc<RefCell<ConditionalEffectRunner>>> {
        self.runner.upgrade()
    }
}
