//! Reactive binding of [`UrlParamsStore`] for Leptos components.

use std::rc::Rc;

use leptos::prelude::*;

use crate::shared::external_store::ExternalStore;

use super::browser::BrowserLocation;
use super::schema::{ParamRecord, ParamSchema, ParamValue};
use super::store::UrlParamsStore;

/// Handle returned by [`use_url_params`]. `Copy`, so it can be moved into
/// any number of event handlers.
#[derive(Clone, Copy)]
pub struct UrlParams {
    store: StoredValue<UrlParamsStore<BrowserLocation>, LocalStorage>,
    /// Record derived from the address bar; recomputed on every URL change.
    pub params: Memo<ParamRecord>,
}

/// Mirrors the browser's query string into a signal for as long as the
/// calling component lives.
pub fn use_url_params(schema: ParamSchema) -> UrlParams {
    let location = BrowserLocation::new();
    let search = RwSignal::new(location.snapshot());

    let reader = location.clone();
    let subscription = location.subscribe(Rc::new(move || {
        let _ = search.try_set(reader.snapshot());
    }));
    // Dropped together with the owner, which unsubscribes.
    let _subscription = StoredValue::new_local(subscription);

    let decode_schema = schema.clone();
    let params = Memo::new(move |_| decode_schema.decode(&search.get()));

    UrlParams {
        store: StoredValue::new_local(UrlParamsStore::new(location, schema)),
        params,
    }
}

impl UrlParams {
    pub fn set_param(&self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        self.store.with_value(|store| {
            if let Err(e) = store.set_param(key, value) {
                log::error!("set_param rejected: {}", e);
            }
        });
    }

    pub fn set_params(&self, updates: Vec<(&'static str, ParamValue)>) {
        self.store.with_value(|store| {
            if let Err(e) = store.set_params(updates) {
                log::error!("set_params rejected: {}", e);
            }
        });
    }

    pub fn reset_params(&self) {
        self.store.with_value(|store| store.reset_params());
    }
}
