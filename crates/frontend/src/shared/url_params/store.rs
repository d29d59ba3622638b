use std::rc::Rc;

use crate::shared::external_store::{ExternalStore, Listener, Location, Subscription};

use super::query_string::QueryString;
use super::schema::{ParamError, ParamKind, ParamRecord, ParamSchema, ParamValue, PAGE_KEY};

/// Filter/pagination state kept in the address bar.
///
/// The URL is the store of record: every read decodes the current location
/// snapshot, every write replaces the current history entry and notifies
/// subscribers synchronously. There is no debouncing here.
pub struct UrlParamsStore<L: Location> {
    location: L,
    schema: Rc<ParamSchema>,
}

impl<L: Location> UrlParamsStore<L> {
    pub fn new(location: L, schema: ParamSchema) -> Self {
        Self {
            location,
            schema: Rc::new(schema),
        }
    }

    pub fn schema(&self) -> &ParamSchema {
        &self.schema
    }

    /// Current query string (without `?`).
    pub fn search(&self) -> String {
        self.location.snapshot()
    }

    /// Record derived from the current URL snapshot.
    pub fn params(&self) -> ParamRecord {
        self.schema.decode(&self.location.snapshot())
    }

    /// Updates one field. Any key other than `page` also sends the view back
    /// to page 1 in the same URL update.
    pub fn set_param(&self, key: &str, value: impl Into<ParamValue>) -> Result<(), ParamError> {
        let value = value.into();
        self.schema.validate(key, &value)?;

        let mut record = self.params();
        record.insert(key, value);
        if key != PAGE_KEY
            && self
                .schema
                .get(PAGE_KEY)
                .is_some_and(|f| f.kind == ParamKind::Number)
        {
            record.insert(PAGE_KEY, ParamValue::Number(1.0));
        }
        self.write(&record);
        Ok(())
    }

    /// Merges several fields into one URL update. No page reset: callers that
    /// want one include `page` in `updates`.
    pub fn set_params<K, I>(&self, updates: I) -> Result<(), ParamError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, ParamValue)>,
    {
        let updates: Vec<(K, ParamValue)> = updates.into_iter().collect();
        for (key, value) in &updates {
            self.schema.validate(key.as_ref(), value)?;
        }

        let mut record = self.params();
        for (key, value) in updates {
            record.insert(key.as_ref(), value);
        }
        self.write(&record);
        Ok(())
    }

    /// Drops every parameter: the URL becomes the bare path.
    pub fn reset_params(&self) {
        log::debug!("url params reset on {}", self.location.pathname());
        self.location.replace_search("");
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        self.location.subscribe(listener)
    }

    /// Rewrites only the keys this schema declares; pairs owned by other
    /// stores on the same location keep their values.
    fn write(&self, record: &ParamRecord) {
        let mut query = QueryString::parse(&self.location.snapshot());
        for field in self.schema.fields() {
            query.remove(&field.key);
        }
        self.schema.encode_into(record, &mut query);
        let search = query.to_string();
        log::debug!("url params -> ?{}", search);
        self.location.replace_search(&search);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::external_store::MemoryLocation;
    use std::cell::{Cell, RefCell};

    fn store_at(search: &str) -> (MemoryLocation, UrlParamsStore<MemoryLocation>) {
        let location = MemoryLocation::new("/inventory", search);
        let schema = ParamSchema::new()
            .string("sku", "")
            .string("vendor", "")
            .string_array("fulfillmentModel")
            .number("page", 1.0)
            .number("limit", 10.0);
        (location.clone(), UrlParamsStore::new(location, schema))
    }

    #[test]
    fn test_filter_then_paginate() {
        let (location, store) = store_at("");

        store.set_param("sku", "ABC").unwrap();
        assert_eq!(location.href(), "/inventory?sku=ABC");

        store.set_param("page", 3u32).unwrap();
        assert_eq!(location.href(), "/inventory?sku=ABC&page=3");
        assert_eq!(store.params().number("page"), 3.0);
    }

    #[test]
    fn test_array_filter_keeps_order() {
        let (_, store) = store_at("");
        store
            .set_param("fulfillmentModel", vec!["FBM", "DS"])
            .unwrap();
        assert_eq!(store.search(), "fulfillmentModel=FBM&fulfillmentModel=DS");
        assert_eq!(store.params().strings("fulfillmentModel"), ["FBM", "DS"]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        for page in [2u32, 7, 250] {
            let (_, store) = store_at(&format!("sku=A&page={}", page));
            store.set_param("vendor", "acme").unwrap();
            let params = store.params();
            assert_eq!(params.number("page"), 1.0);
            assert_eq!(store.search(), "sku=A&vendor=acme");
        }
    }

    #[test]
    fn test_limit_change_resets_page() {
        let (_, store) = store_at("page=4");
        store.set_param("limit", 50u32).unwrap();
        assert_eq!(store.search(), "limit=50");
    }

    #[test]
    fn test_setting_default_removes_key() {
        let (_, store) = store_at("sku=ABC&limit=50");
        store.set_param("limit", 10u32).unwrap();
        assert_eq!(store.search(), "sku=ABC");
        store.set_param("sku", "").unwrap();
        assert_eq!(store.search(), "");
    }

    #[test]
    fn test_set_params_has_no_page_reset() {
        let (_, store) = store_at("page=5");
        store
            .set_params([("sku", ParamValue::from("X")), ("vendor", ParamValue::from("Y"))])
            .unwrap();
        assert_eq!(store.search(), "sku=X&vendor=Y&page=5");
    }

    #[test]
    fn test_reset_clears_query() {
        let (location, store) = store_at("");
        store.set_param("sku", "A").unwrap();
        store.set_param("fulfillmentModel", vec!["FBM"]).unwrap();
        store.set_param("page", 2u32).unwrap();
        store.reset_params();
        assert_eq!(store.search(), "");
        assert_eq!(location.href(), "/inventory");
        assert_eq!(location.pushed_entries(), 0);
    }

    #[test]
    fn test_rejected_update_leaves_url() {
        let (location, store) = store_at("sku=A");
        assert!(store.set_param("page", "two").is_err());
        assert!(store
            .set_params([("sku", ParamValue::from("B")), ("bogus", ParamValue::from("C"))])
            .is_err());
        assert_eq!(store.search(), "sku=A");
        assert_eq!(location.replaced_entries(), 0);
    }

    #[test]
    fn test_subscribers_see_new_record_synchronously() {
        let (_, store) = store_at("");
        let store = Rc::new(store);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let calls = Rc::new(Cell::new(0));

        let reader = Rc::downgrade(&store);
        let seen_clone = seen.clone();
        let calls_clone = calls.clone();
        let _sub = store.subscribe(Rc::new(move || {
            calls_clone.set(calls_clone.get() + 1);
            if let Some(store) = reader.upgrade() {
                seen_clone.borrow_mut().push(store.params().string("sku").to_string());
            }
        }));

        store.set_param("sku", "A").unwrap();
        store.set_param("sku", "AB").unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(*seen.borrow(), vec!["A".to_string(), "AB".to_string()]);
    }

    #[test]
    fn test_disjoint_stores_share_location() {
        let location = MemoryLocation::new("/inventory", "");
        let filters = UrlParamsStore::new(location.clone(), ParamSchema::new().string("sku", ""));
        let tabs = UrlParamsStore::new(location.clone(), ParamSchema::new().string("tab", ""));

        tabs.set_param("tab", "audit").unwrap();
        filters.set_param("sku", "A").unwrap();
        assert_eq!(tabs.params().string("tab"), "audit");
        assert_eq!(filters.params().string("sku"), "A");

        filters.set_param("sku", "").unwrap();
        assert_eq!(location.href(), "/inventory?tab=audit");
    }

    #[test]
    fn test_foreign_pairs_keep_their_values() {
        let (_, store) = store_at("utm_source=mail&sku=A&utm_source=push");
        store.set_param("vendor", "acme").unwrap();
        assert_eq!(
            store.search(),
            "utm_source=mail&utm_source=push&sku=A&vendor=acme"
        );
    }
}
