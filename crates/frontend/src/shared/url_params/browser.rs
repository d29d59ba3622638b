//! [`Location`] backed by `window.location` / `window.history`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use crate::shared::external_store::{
    build_href, normalize_search, ExternalStore, Listener, Listeners, Location, Subscription,
};

struct PopStateListener {
    closure: Closure<dyn Fn()>,
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(w) = window() {
            let _ = w.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Browser location. Writes go through `history.replaceState`, so filter
/// changes never add back/forward entries; `popstate` (back/forward) is relayed
/// to the same listeners.
#[derive(Clone)]
pub struct BrowserLocation {
    listeners: Listeners,
    _popstate: Rc<Option<PopStateListener>>,
}

impl BrowserLocation {
    pub fn new() -> Self {
        let listeners = Listeners::new();

        let relay = listeners.clone();
        let closure = Closure::<dyn Fn()>::new(move || relay.notify());
        let popstate = window().and_then(|w| {
            w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok()
                .map(|_| PopStateListener { closure })
        });
        if popstate.is_none() {
            log::warn!("popstate listener not installed; back/forward will not refresh filters");
        }

        Self {
            listeners,
            _popstate: Rc::new(popstate),
        }
    }
}

impl Default for BrowserLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalStore for BrowserLocation {
    type Snapshot = String;

    fn snapshot(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|s| normalize_search(&s).to_string())
            .unwrap_or_default()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.add(listener)
    }
}

impl Location for BrowserLocation {
    fn pathname(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn replace_search(&self, search: &str) {
        let new_url = build_href(&self.pathname(), search);
        let replaced = window()
            .and_then(|w| w.history().ok())
            .map(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)));
        match replaced {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("history.replaceState failed: {:?}", e),
            None => log::warn!("history is not available"),
        }
        self.listeners.notify();
    }
}
