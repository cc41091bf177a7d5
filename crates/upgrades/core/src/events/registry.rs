//! Explicit registry of bus clear functions.
//!
//! Every [`EventBus`](super::EventBus) registers its own clear closure at
//! construction; a single [`BusRegistry::clear_all`] walks the list in
//! construction order. This is the session/scene-boundary reset path. A bus
//! dropped before the registry simply becomes a no-op entry.

type ClearFn = Box<dyn Fn()>;

/// Ordered list of clear functions, one per constructed bus.
#[derive(Default)]
pub struct BusRegistry {
    clear_fns: Vec<ClearFn>,
}

impl BusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_clear_fn(&mut self, f: ClearFn) {
        self.clear_fns.push(f);
    }

    /// Clear every tracked bus, dropping all of their bindings.
    pub fn clear_all(&self) {
        for clear in &self.clear_fns {
            clear();
        }
        tracing::debug!(buses = self.clear_fns.len(), "all event buses cleared");
    }

    /// Number of tracked buses.
    pub fn len(&self) -> usize {
        self.clear_fns.len()
    }

    /// True if no buses are tracked.
    pub fn is_empty(&self) -> bool {
        self.clear_fns.is_empty()
    }
}
