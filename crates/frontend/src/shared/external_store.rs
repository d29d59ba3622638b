//! Snapshot/subscription primitive for state that lives outside the app
//! (the address bar, `localStorage`).
//!
//! A source exposes a `snapshot()` read and a `subscribe()` call that returns
//! a [`Subscription`]. Dropping the subscription (or calling
//! [`Subscription::unsubscribe`]) detaches the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type Listener = Rc<dyn Fn()>;

/// External mutable resource read through immutable snapshots.
pub trait ExternalStore {
    type Snapshot: Clone + PartialEq;

    fn snapshot(&self) -> Self::Snapshot;

    fn subscribe(&self, listener: Listener) -> Subscription;
}

#[derive(Default)]
struct ListenersInner {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Listener registry shared by store implementations.
///
/// Listeners are notified synchronously, in the order they subscribed.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenersInner>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Listener) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn notify(&self) {
        // Snapshot the list first: a listener may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unsubscribe handle returned by [`ExternalStore::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<ListenersInner>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// The page location as seen by the URL parameter store.
pub trait Location: ExternalStore<Snapshot = String> {
    /// Path part of the current URL, e.g. `/inventory`.
    fn pathname(&self) -> String;

    /// Replace the current history entry's query string (no new entry is
    /// pushed) and notify subscribers. `search` has no leading `?`.
    fn replace_search(&self, search: &str);
}

#[derive(Debug, Default)]
struct MemoryLocationState {
    pathname: String,
    search: String,
    pushed_entries: usize,
    replaced_entries: usize,
}

/// In-memory [`Location`] for tests and non-browser hosts.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    state: Rc<RefCell<MemoryLocationState>>,
    listeners: Listeners,
}

impl MemoryLocation {
    pub fn new(pathname: &str, search: &str) -> Self {
        let location = Self::default();
        {
            let mut state = location.state.borrow_mut();
            state.pathname = pathname.to_string();
            state.search = normalize_search(search).to_string();
        }
        location
    }

    /// Simulates a back/forward navigation landing on `search`.
    pub fn navigate(&self, search: &str) {
        self.state.borrow_mut().search = normalize_search(search).to_string();
        self.listeners.notify();
    }

    /// Full URL of the current entry (`pathname` plus `?search` when non-empty).
    pub fn href(&self) -> String {
        let state = self.state.borrow();
        build_href(&state.pathname, &state.search)
    }

    pub fn pushed_entries(&self) -> usize {
        self.state.borrow().pushed_entries
    }

    pub fn replaced_entries(&self) -> usize {
        self.state.borrow().replaced_entries
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ExternalStore for MemoryLocation {
    type Snapshot = String;

    fn snapshot(&self) -> String {
        self.state.borrow().search.clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.add(listener)
    }
}

impl Location for MemoryLocation {
    fn pathname(&self) -> String {
        self.state.borrow().pathname.clone()
    }

    fn replace_search(&self, search: &str) {
        {
            let mut state = self.state.borrow_mut();
            state.search = normalize_search(search).to_string();
            state.replaced_entries += 1;
        }
        self.listeners.notify();
    }
}

/// Strips the leading `?` the browser includes in `location.search`.
pub fn normalize_search(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

pub fn build_href(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}
