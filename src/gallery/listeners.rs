// SPDX-License-Identifier: MPL-2.0
//! Window-level listener registration with scoped lifetime.
//!
//! [`EventHub`] plays the role of the host's single event queue: hosts push
//! [`InputEvent`]s into it and it fans them out to the registered listeners
//! of the matching [`ListenerKind`]. Registration returns a [`ListenerGuard`];
//! the listener stays registered exactly as long as the guard lives.

use crate::domain::gallery::{InputEvent, ListenerKind};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Rc<RefCell<dyn FnMut(&InputEvent)>>;

struct Registration {
    id: ListenerId,
    kind: ListenerKind,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Registration>,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

/// Single-threaded event dispatcher for keyboard and touch listeners.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventHub {
    /// Creates a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for events of `kind`.
    ///
    /// The callback is unregistered when the returned guard is dropped.
    pub fn listen(
        &self,
        kind: ListenerKind,
        callback: impl FnMut(&InputEvent) + 'static,
    ) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push(Registration {
            id,
            kind,
            callback: Rc::new(RefCell::new(callback)),
        });
        log::debug!("registered {kind:?} listener {id:?}");
        ListenerGuard {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener of its kind, in registration order.
    ///
    /// Each callback runs to completion before the next one starts. A
    /// listener unregistered by an earlier callback of the same dispatch is
    /// skipped. Returns the number of callbacks invoked.
    pub fn dispatch(&self, event: &InputEvent) -> usize {
        let kind = event.listener_kind();
        let targets: Vec<(ListenerId, Callback)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();

        let mut invoked = 0;
        for (id, callback) in targets {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut callback) => {
                    (&mut *callback)(event);
                    invoked += 1;
                }
                Err(_) => log::warn!("skipping re-entrant dispatch to listener {id:?}"),
            }
        }
        invoked
    }

    /// Returns the total number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Returns the number of registered listeners of `kind`.
    #[must_use]
    pub fn listener_count_of(&self, kind: ListenerKind) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

/// Keeps a listener registered; dropping it unregisters the listener.
#[must_use = "dropping the guard immediately unregisters the listener"]
pub struct ListenerGuard {
    id: ListenerId,
    kind: ListenerKind,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Hub already gone: nothing left to unregister from.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let mut registry = registry.borrow_mut();
            let position = registry.entries.iter().position(|e| e.id == self.id);
            position.map(|index| registry.entries.remove(index))
        };
        // The callback (and whatever it captured) is dropped outside the borrow.
        if removed.is_some() {
            log::debug!("unregistered {:?} listener {:?}", self.kind, self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::Key;
    use std::cell::Cell;

    fn counter(hub: &EventHub, kind: ListenerKind) -> (Rc<Cell<u32>>, ListenerGuard) {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let guard = hub.listen(kind, move |_| seen.set(seen.get() + 1));
        (hits, guard)
    }

    #[test]
    fn events_reach_only_matching_listeners() {
        let hub = EventHub::new();
        let (keys, _key_guard) = counter(&hub, ListenerKind::Keyboard);
        let (touches, _touch_guard) = counter(&hub, ListenerKind::Touch);

        hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
        hub.dispatch(&InputEvent::TouchStart { x: 10.0 });
        hub.dispatch(&InputEvent::TouchEnd { x: 10.0 });

        assert_eq!(keys.get(), 1);
        assert_eq!(touches.get(), 2);
    }

    #[test]
    fn dropping_guard_unregisters_listener() {
        let hub = EventHub::new();
        let (hits, guard) = counter(&hub, ListenerKind::Keyboard);
        assert_eq!(hub.listener_count(), 1);

        drop(guard);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(&InputEvent::KeyDown(Key::ArrowLeft)), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn guard_outliving_hub_drops_cleanly() {
        let hub = EventHub::new();
        let (_hits, guard) = counter(&hub, ListenerKind::Touch);
        drop(hub);
        drop(guard);
    }

    #[test]
    fn listener_unregistered_mid_dispatch_is_skipped() {
        let hub = EventHub::new();
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));

        let pending = Rc::clone(&slot);
        let _first = hub.listen(ListenerKind::Keyboard, move |_| {
            pending.borrow_mut().take();
        });
        let (hits, second) = counter(&hub, ListenerKind::Keyboard);
        *slot.borrow_mut() = Some(second);

        let invoked = hub.dispatch(&InputEvent::KeyDown(Key::Other));
        assert_eq!(invoked, 1);
        assert_eq!(hits.get(), 0);
        assert_eq!(hub.listener_count_of(ListenerKind::Keyboard), 1);
    }
}
