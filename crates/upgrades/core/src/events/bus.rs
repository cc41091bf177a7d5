//! Generic typed event bus with deferred-mutation dispatch.
//!
//! One bus exists per event payload shape `T`. Handlers fire in registration
//! order. Subscribing or unsubscribing from inside a handler is legal: the
//! mutation is queued and applied once the outermost dispatch finishes, so a
//! `raise` always delivers to exactly the set of handlers registered when it
//! started. A panicking handler is reported and skipped; the bus itself never
//! fails.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use super::registry::BusRegistry;

/// Shared handler slot. Two subscriptions of the same `Handler` value are two
/// independent deliveries; the `Rc` identity is what `unsubscribe_handler`
/// matches on.
pub type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Wrap a closure into a [`Handler`] that can be subscribed (and later
/// unsubscribed) by identity.
pub fn handler<T, F>(f: F) -> Handler<T>
where
    F: FnMut(&T) + 'static,
{
    Rc::new(RefCell::new(f))
}

/// Opaque handle for one subscription, used for precise unsubscription even
/// when the same handler was registered more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Binding(u64);

struct Entry<T> {
    id: u64,
    handler: Handler<T>,
}

struct BusInner<T> {
    entries: Vec<Entry<T>>,
    pending_add: Vec<Entry<T>>,
    pending_remove: Vec<u64>,
    /// Dispatch depth; nested raises defer mutations until the outermost
    /// dispatch unwinds.
    depth: u32,
    next_id: u64,
}

impl<T> BusInner<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            depth: 0,
            next_id: 0,
        }
    }

    fn insert(&mut self, handler: Handler<T>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let entry = Entry { id, handler };
        if self.depth > 0 {
            self.pending_add.push(entry);
        } else {
            self.entries.push(entry);
        }
        id
    }

    fn remove_id(&mut self, id: u64) {
        if self.depth > 0 {
            self.pending_remove.push(id);
        } else if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
        }
    }

    fn flush_deferred(&mut self) {
        // Adds first, preserving registration order of existing bindings.
        let adds = std::mem::take(&mut self.pending_add);
        self.entries.extend(adds);
        let removes = std::mem::take(&mut self.pending_remove);
        for id in removes {
            if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
                self.entries.remove(pos);
            }
        }
    }

    fn clear_now(&mut self) {
        self.entries.clear();
        self.pending_add.clear();
        self.pending_remove.clear();
    }
}

/// Per-event-type publish/subscribe channel.
///
/// `EventBus` is a cheap-clone handle over shared state; every clone raises
/// to and mutates the same subscriber list. Buses are plain values wired
/// through [`GameEvents`](super::GameEvents), never process-wide statics.
pub struct EventBus<T> {
    inner: Rc<RefCell<BusInner<T>>>,
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> EventBus<T> {
    /// Create a bus and register its clear function with `registry`, so a
    /// session-boundary [`BusRegistry::clear_all`] drops its bindings.
    pub fn new(registry: &mut BusRegistry) -> Self {
        let bus = Self::detached();
        let weak = Rc::downgrade(&bus.inner);
        registry.add_clear_fn(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().clear_now();
            }
        }));
        bus
    }

    /// Create a bus that is not tracked by any registry. Mostly for tests.
    pub fn detached() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner::new())),
        }
    }

    /// Subscribe a shared handler. Subscribing the same handler twice
    /// produces two independent deliveries.
    pub fn subscribe(&self, handler: &Handler<T>) {
        self.inner.borrow_mut().insert(Rc::clone(handler));
    }

    /// Subscribe a closure and return a [`Binding`] for deterministic
    /// single-instance removal. Preferred over [`subscribe`](Self::subscribe)
    /// when the subscriber owns the lifecycle.
    pub fn register(&self, f: impl FnMut(&T) + 'static) -> Binding {
        Binding(self.inner.borrow_mut().insert(handler(f)))
    }

    /// Unsubscribe by binding.
    pub fn unsubscribe(&self, binding: &Binding) {
        self.inner.borrow_mut().remove_id(binding.0);
    }

    /// Unsubscribe the first subscription matching `handler` by identity.
    pub fn unsubscribe_handler(&self, handler: &Handler<T>) {
        let mut inner = self.inner.borrow_mut();
        let pending = &inner.pending_remove;
        let found = inner
            .entries
            .iter()
            .find(|e| Rc::ptr_eq(&e.handler, handler) && !pending.contains(&e.id))
            .map(|e| e.id);
        if let Some(id) = found {
            inner.remove_id(id);
        }
    }

    /// Deliver `event` to every binding registered at call start, in
    /// registration order.
    ///
    /// A handler that panics is reported and skipped; remaining handlers
    /// still run. Mutations requested during dispatch are deferred and take
    /// effect only for the next `raise`.
    pub fn raise(&self, event: &T) {
        let snapshot: Vec<(u64, Handler<T>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.depth += 1;
            inner
                .entries
                .iter()
                .map(|e| (e.id, Rc::clone(&e.handler)))
                .collect()
        };

        for (id, handler) in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                (handler.borrow_mut())(event);
            }));
            if outcome.is_err() {
                tracing::error!(binding = id, "event handler panicked; skipped");
            }
        }

        let mut inner = self.inner.borrow_mut();
        inner.depth -= 1;
        if inner.depth == 0 {
            inner.flush_deferred();
        }
    }

    /// Drop all bindings immediately, bypassing the deferred queues.
    ///
    /// Intended for session/scene boundaries, not for use mid-dispatch.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear_now();
    }

    /// Number of live subscriptions (excluding deferred adds).
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// True if no subscriptions are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
