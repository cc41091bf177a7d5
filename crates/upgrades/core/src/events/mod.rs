//! Typed event bus and the game's event catalogue.
//!
//! [`EventBus`] is the generic channel; [`GameEvents`] bundles one bus per
//! payload shape and is what gets threaded through the upgrade context.

mod bus;
mod catalog;
mod registry;

pub use bus::{Binding, EventBus, Handler, handler};
pub use catalog::{
    ChunkCorruptedEvent, DamageEvent, DashEvent, EnemyDiedEvent, KillEvent, LevelCompletedEvent,
    LevelLoadedEvent, PauseToggledEvent, PlayerDiedEvent, PlayerHealedEvent, Position,
    RoomClearedEvent, UpgradeOfferedEvent, UpgradeSelectedEvent,
};
pub use registry::BusRegistry;

/// One bus per event payload shape, constructed against a [`BusRegistry`] so
/// a session-boundary `clear_all` resets every channel at once.
#[derive(Clone)]
pub struct GameEvents {
    pub kills: EventBus<KillEvent>,
    pub dashes: EventBus<DashEvent>,
    pub damage: EventBus<DamageEvent>,
    pub player_died: EventBus<PlayerDiedEvent>,
    pub player_healed: EventBus<PlayerHealedEvent>,
    pub enemy_died: EventBus<EnemyDiedEvent>,
    pub level_completed: EventBus<LevelCompletedEvent>,
    pub level_loaded: EventBus<LevelLoadedEvent>,
    pub room_cleared: EventBus<RoomClearedEvent>,
    pub upgrade_offered: EventBus<UpgradeOfferedEvent>,
    pub upgrade_selected: EventBus<UpgradeSelectedEvent>,
    pub pause_toggled: EventBus<PauseToggledEvent>,
    pub chunk_corrupted: EventBus<ChunkCorruptedEvent>,
}

impl GameEvents {
    pub fn new(registry: &mut BusRegistry) -> Self {
        Self {
            kills: EventBus::new(registry),
            dashes: EventBus::new(registry),
            damage: EventBus::new(registry),
            player_died: EventBus::new(registry),
            player_healed: EventBus::new(registry),
            enemy_died: EventBus::new(registry),
            level_completed: EventBus::new(registry),
            level_loaded: EventBus::new(registry),
            room_cleared: EventBus::new(registry),
            upgrade_offered: EventBus::new(registry),
            upgrade_selected: EventBus::new(registry),
            pause_toggled: EventBus::new(registry),
            chunk_corrupted: EventBus::new(registry),
        }
    }
}
