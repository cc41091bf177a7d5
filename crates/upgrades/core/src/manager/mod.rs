//! Central registry and runtime coordinator for the upgrade system.
//!
//! Responsibilities:
//!   1. Hold the definition/display registries built at startup.
//!   2. Apply and revoke upgrades against the per-player context.
//!   3. Drive per-frame ticking of active timed effects and the
//!      conditional runner.
//!   4. Serve deterministic rarity-weighted card selections.
//!   5. Track per-upgrade stack counts for the current run.

mod error;

pub use error::UpgradeError;

use std::collections::HashMap;
use std::rc::Rc;

use crate::context::{Collaborators, PlayerHandle, PlayerId, UpgradeContext};
use crate::definition::{UpgradeDefinition, UpgradeDisplay};
use crate::effect::UpgradeEffect;
use crate::events::{UpgradeOfferedEvent, UpgradeSelectedEvent};
use crate::rng::{PcgRng, RngOracle, selection_seed};
use crate::runner::ConditionalEffectRunner;

struct TickEntry {
    effect: Rc<UpgradeEffect>,
    ctx: UpgradeContext,
    /// Live stacks sharing this effect value. The effect holds one timer
    /// slot per stack and advances all of them in a single `tick` call, so
    /// it must appear in the ticking list exactly once.
    stacks: u32,
}

/// Owns the upgrade registries and all per-run upgrade state.
pub struct UpgradeManager {
    definitions: HashMap<String, Rc<UpgradeDefinition>>,
    displays: HashMap<String, UpgradeDisplay>,
    /// Registration order; drives the selection pool so draws are
    /// deterministic for a given seed.
    order: Vec<String>,

    stacks: HashMap<String, u32>,
    ticking: Vec<TickEntry>,

    collab: Collaborators,
    /// Context cache, rebuilt when the tracked player changes.
    cached: Option<(PlayerId, UpgradeContext)>,

    rng: Box<dyn RngOracle>,
    session_seed: u64,
    /// Bumped once per `random_choices` call.
    offer_nonce: u64,
}

impl UpgradeManager {
    pub fn new(collab: Collaborators, session_seed: u64) -> Self {
        Self {
            definitions: HashMap::new(),
            displays: HashMap::new(),
            order: Vec::new(),
            stacks: HashMap::new(),
            ticking: Vec::new(),
            collab,
            cached: None,
            rng: Box::new(PcgRng),
            session_seed,
            offer_nonce: 0,
        }
    }

    /// Swap the random oracle. Mostly for tests pinning selection behavior.
    pub fn with_rng(mut self, rng: Box<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    // Registration

    /// Register a definition/display pair. First registration of an id wins;
    /// duplicates and mismatched pairs are reported and dropped.
    pub fn register(&mut self, definition: UpgradeDefinition, display: UpgradeDisplay) {
        if definition.id != display.id {
            // Bound outside the macro; its expansion imports
            // `tracing::field::display`, which shadows the parameter.
            let display_id = display.id.as_str();
            tracing::warn!(
                definition = %definition.id,
                display = %display_id,
                "mismatched definition/display pair dropped"
            );
            return;
        }
        if self.definitions.contains_key(&definition.id) {
            tracing::warn!(id = %definition.id, "duplicate upgrade id dropped");
            return;
        }
        self.order.push(definition.id.clone());
        self.displays.insert(display.id.clone(), display);
        self.definitions
            .insert(definition.id.clone(), Rc::new(definition));
    }

    /// Number of registered upgrades.
    pub fn registered_count(&self) -> usize {
        self.definitions.len()
    }

    // Lookup

    pub fn definition(&self, id: &str) -> Option<&Rc<UpgradeDefinition>> {
        self.definitions.get(id)
    }

    pub fn display(&self, id: &str) -> Option<&UpgradeDisplay> {
        self.displays.get(id)
    }

    /// Times the player has acquired `id` this run.
    pub fn get_stack(&self, id: &str) -> u32 {
        self.stacks.get(id).copied().unwrap_or(0)
    }

    // Apply / revoke

    /// Apply an upgrade by id; call when the player picks a card.
    ///
    /// On success returns the new stack count, applies every effect, starts
    /// ticking any timed effects, and raises an [`UpgradeSelectedEvent`].
    pub fn apply_upgrade(
        &mut self,
        id: &str,
        player: &PlayerHandle,
    ) -> Result<u32, UpgradeError> {
        let definition = self
            .definitions
            .get(id)
            .cloned()
            .ok_or_else(|| UpgradeError::UnknownUpgrade(id.to_string()))?;

        let current = self.get_stack(id);
        if definition.at_cap(current) {
            let max = definition.max_stacks.unwrap_or(0);
            tracing::warn!(id, max, "upgrade already at max stacks");
            return Err(UpgradeError::MaxStacksReached {
                id: id.to_string(),
                max,
            });
        }

        let new_stack = current + 1;
        self.stacks.insert(id.to_string(), new_stack);

        let ctx = self.context_for(player);
        definition.apply(&ctx);

        for effect in &definition.effects {
            if !effect.needs_tick() {
                continue;
            }
            match self
                .ticking
                .iter_mut()
                .find(|entry| Rc::ptr_eq(&entry.effect, effect))
            {
                Some(entry) => entry.stacks += 1,
                None => self.ticking.push(TickEntry {
                    effect: Rc::clone(effect),
                    ctx: ctx.clone(),
                    stacks: 1,
                }),
            }
        }

        let name = self
            .displays
            .get(id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| id.to_string());
        tracing::info!(id, stack = new_stack, "upgrade applied");
        ctx.events.upgrade_selected.raise(&UpgradeSelectedEvent {
            upgrade_id: id.to_string(),
            upgrade_name: name,
            new_stack_count: new_stack,
        });

        Ok(new_stack)
    }

    /// Revoke one stack of an upgrade (debug tooling, curse-removal style
    /// mechanics). Returns the remaining stack count.
    pub fn revoke_upgrade(
        &mut self,
        id: &str,
        player: &PlayerHandle,
    ) -> Result<u32, UpgradeError> {
        let definition = self
            .definitions
            .get(id)
            .cloned()
            .ok_or_else(|| UpgradeError::UnknownUpgrade(id.to_string()))?;

        let current = self.get_stack(id);
        if current == 0 {
            return Err(UpgradeError::NothingToRevoke(id.to_string()));
        }

        let remaining = current - 1;
        if remaining == 0 {
            self.stacks.remove(id);
        } else {
            self.stacks.insert(id.to_string(), remaining);
        }

        let ctx = self.context_for(player);
        definition.remove(&ctx);

        // The entry only comes off once the last stack is gone, so the
        // remaining stacks keep ticking.
        for effect in &definition.effects {
            if !effect.needs_tick() {
                continue;
            }
            if let Some(pos) = self
                .ticking
                .iter()
                .position(|entry| Rc::ptr_eq(&entry.effect, effect))
            {
                self.ticking[pos].stacks -= 1;
                if self.ticking[pos].stacks == 0 {
                    self.ticking.remove(pos);
                }
            }
        }

        tracing::info!(id, stack = remaining, "upgrade revoked");
        Ok(remaining)
    }

    // Randomized selection

    /// Draw `count` cards for the upgrade screen: capped upgrades are
    /// filtered out, draws are without replacement, and with
    /// `rarity_weighted` each card's chance is proportional to its rarity
    /// weight. Returns `min(count, eligible)` displays and raises an
    /// [`UpgradeOfferedEvent`].
    pub fn random_choices(&mut self, count: usize, rarity_weighted: bool) -> Vec<UpgradeDisplay> {
        let mut pool: Vec<(&str, u32)> = Vec::new();
        for id in &self.order {
            let Some(definition) = self.definitions.get(id) else {
                continue;
            };
            let Some(display) = self.displays.get(id) else {
                continue;
            };
            if definition.at_cap(self.stacks.get(id).copied().unwrap_or(0)) {
                continue;
            }
            let weight = if rarity_weighted {
                display.rarity.weight()
            } else {
                1
            };
            pool.push((id.as_str(), weight));
        }

        let picks = count.min(pool.len());
        let nonce = self.offer_nonce;
        self.offer_nonce += 1;

        let mut chosen = Vec::with_capacity(picks);
        for round in 0..picks {
            let weights: Vec<u32> = pool.iter().map(|(_, w)| *w).collect();
            let seed = selection_seed(self.session_seed, nonce, round as u32);
            let index = self.rng.weighted_index(seed, &weights);
            let (id, _) = pool.remove(index);
            chosen.push(self.displays[id].clone());
        }

        self.collab
            .events
            .upgrade_offered
            .raise(&UpgradeOfferedEvent {
                offered_count: picks as u32,
            });
        chosen
    }

    // Run lifecycle

    /// Wipe all run state: every acquired stack is removed cleanly (so
    /// trigger and conditional effects unhook), then counters, ticking list,
    /// and the cached context are dropped.
    pub fn reset_run(&mut self, player: &PlayerHandle) {
        let ctx = self.context_for(player);

        let mut ids: Vec<String> = self.stacks.keys().cloned().collect();
        ids.sort();
        for id in ids {
            let Some(definition) = self.definitions.get(&id).cloned() else {
                continue;
            };
            let count = self.stacks[&id];
            for _ in 0..count {
                definition.remove(&ctx);
            }
        }

        self.stacks.clear();
        self.ticking.clear();
        self.cached = None;
        tracing::info!("upgrade run state reset");
    }

    /// Advance timed effects and the conditional runner by `dt` seconds.
    ///
    /// Iterates a snapshot of the ticking list, so effects revoked during
    /// the tick stop ticking next frame.
    pub fn tick(&mut self, dt: f64) {
        let snapshot: Vec<(Rc<UpgradeEffect>, UpgradeContext)> = self
            .ticking
            .iter()
            .map(|entry| (Rc::clone(&entry.effect), entry.ctx.clone()))
            .collect();
        for (effect, ctx) in snapshot {
            effect.tick(&ctx, dt);
        }
        ConditionalEffectRunner::tick(&self.collab.runner);
    }

    fn context_for(&mut self, player: &PlayerHandle) -> UpgradeContext {
        match &self.cached {
            Some((id, ctx)) if *id == player.id() => ctx.clone(),
            _ => {
                let ctx = UpgradeContext::for_player(&self.collab, player.clone());
                self.cached = Some((player.id(), ctx.clone()));
                ctx
            }
        }
    }
}
