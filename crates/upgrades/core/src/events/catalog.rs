//! Event payload catalogue.
//!
//! The fixed set of structurally-typed records the engine consumes and
//! produces. Gameplay code raises the player/enemy events; the engine raises
//! the session-level events (upgrade offered/selected) but never consumes
//! them itself.

/// 2D world position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// Player events

/// Player killed an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillEvent {
    pub position: Position,
    pub enemy_type: String,
    pub total_kills_this_run: u32,
}

/// Player performed a dash.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashEvent {
    pub position: Position,
}

/// Player took damage from any source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEvent {
    pub amount: f64,
    pub remaining_hp: f64,
    pub hit_position: Position,
    /// "enemy", "corruption", "hazard", ...
    pub source: String,
}

/// Player HP dropped to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDiedEvent {
    pub position: Position,
    pub survived_for_seconds: f64,
}

/// Player was healed (on-kill heal, pickup, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerHealedEvent {
    pub amount: f64,
    pub new_hp: f64,
}

// Enemy events

/// An enemy died from any cause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDiedEvent {
    pub enemy_type: String,
    pub position: Position,
    pub killed_by_player: bool,
    pub total_active_enemies: u32,
}

// Session events

/// Player completed a level and is moving to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelCompletedEvent {
    pub level_length: u32,
    pub level_difficulty: u32,
    pub completion_time_seconds: f64,
}

/// A new level has been loaded and is ready to play.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelLoadedEvent {
    pub level_index: u32,
    pub is_first_level: bool,
}

/// All enemies in the current room have been cleared.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomClearedEvent {
    pub zone_id: String,
    pub clear_time_seconds: f64,
    pub enemies_killed: u32,
}

/// A set of upgrade cards was offered to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeOfferedEvent {
    pub offered_count: u32,
}

/// Player selected an upgrade card.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeSelectedEvent {
    pub upgrade_id: String,
    pub upgrade_name: String,
    pub new_stack_count: u32,
}

/// The game was paused or unpaused.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PauseToggledEvent {
    pub is_paused: bool,
    /// "menu", "corruption_warning", "cutscene", ...
    pub reason: String,
}

/// A map chunk was corrupted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkCorruptedEvent {
    pub chunk_index: u32,
}
