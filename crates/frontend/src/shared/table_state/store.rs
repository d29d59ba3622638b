use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::invariants::{
    enforce_column_order, enforce_min_column_size, ColumnOrder, ColumnSizing, ColumnVisibility,
};
use super::storage::KeyValueStorage;

pub const STORAGE_KEY_PREFIX: &str = "table-state-";
pub const DEFAULT_MIN_COLUMN_SIZE: f64 = 60.0;

/// Declaration of one table's presentation state.
#[derive(Clone, Debug, PartialEq)]
pub struct TableStateOptions {
    pub key: String,
    pub default_visibility: ColumnVisibility,
    pub default_order: ColumnOrder,
    pub pinned_left: Vec<String>,
    pub pinned_right: Vec<String>,
    pub min_column_size: f64,
}

impl TableStateOptions {
    pub fn new(key: &str, default_visibility: ColumnVisibility) -> Self {
        Self {
            key: key.to_string(),
            default_visibility,
            default_order: Vec::new(),
            pinned_left: Vec::new(),
            pinned_right: Vec::new(),
            min_column_size: DEFAULT_MIN_COLUMN_SIZE,
        }
    }

    pub fn default_order(mut self, order: ColumnOrder) -> Self {
        self.default_order = order;
        self
    }

    pub fn pinned_left(mut self, columns: &[&str]) -> Self {
        self.pinned_left = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn pinned_right(mut self, columns: &[&str]) -> Self {
        self.pinned_right = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn min_column_size(mut self, size: f64) -> Self {
        self.min_column_size = size;
        self
    }

    /// `localStorage` key for this table.
    pub fn storage_key(&self) -> String {
        format!("{}{}", STORAGE_KEY_PREFIX, self.key)
    }
}

/// Persisted record. Field names are part of the stored format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub column_visibility: ColumnVisibility,
    pub column_order: ColumnOrder,
    pub column_sizing: ColumnSizing,
}

impl TableSnapshot {
    /// Columns missing from the visibility map are visible.
    pub fn is_visible(&self, column: &str) -> bool {
        self.column_visibility.get(column).copied().unwrap_or(true)
    }
}

/// New value, or a pure function of the previous one.
pub enum Update<T> {
    Value(T),
    With(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    pub fn with(f: impl FnOnce(&T) -> T + 'static) -> Self {
        Update::With(Box::new(f))
    }

    fn apply(self, prev: &T) -> T {
        match self {
            Update::Value(value) => value,
            Update::With(f) => f(prev),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Value(value)
    }
}

/// Column visibility, order and sizing of one table, persisted under
/// `table-state-{key}`.
///
/// Order and sizing invariants are applied on load and on every mutation.
/// Saving is separate from mutating ([`TableStateStore::persist`]) so callers
/// can defer it; nothing is written before [`TableStateStore::load`] ran.
pub struct TableStateStore<S: KeyValueStorage> {
    options: TableStateOptions,
    storage: S,
    state: TableSnapshot,
    is_loaded: bool,
}

impl<S: KeyValueStorage> TableStateStore<S> {
    pub fn new(options: TableStateOptions, storage: S) -> Self {
        let state = TableSnapshot {
            column_visibility: options.default_visibility.clone(),
            column_order: enforce_column_order(
                &options.default_order,
                &options.pinned_left,
                &options.pinned_right,
            ),
            column_sizing: ColumnSizing::new(),
        };
        Self {
            options,
            storage,
            state,
            is_loaded: false,
        }
    }

    pub fn options(&self) -> &TableStateOptions {
        &self.options
    }

    pub fn snapshot(&self) -> &TableSnapshot {
        &self.state
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.state.column_visibility
    }

    pub fn order(&self) -> &ColumnOrder {
        &self.state.column_order
    }

    pub fn sizing(&self) -> &ColumnSizing {
        &self.state.column_sizing
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Overlays whatever is stored, field by field. A missing, null or
    /// malformed field keeps its default; read failures keep all defaults.
    pub fn load(&mut self) {
        let key = self.options.storage_key();
        match self.storage.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(stored)) => self.apply_stored(&key, &stored),
                Ok(_) => log::warn!("Failed to load table state `{}`: not an object", key),
                Err(e) => log::warn!("Failed to load table state `{}`: {}", key, e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Failed to load table state: {}", e),
        }
        self.is_loaded = true;
    }

    fn apply_stored(&mut self, key: &str, stored: &serde_json::Map<String, Value>) {
        if let Some(visibility) = stored_field::<ColumnVisibility>(key, stored, "columnVisibility") {
            self.state.column_visibility = visibility;
        }
        if let Some(order) = stored_field::<ColumnOrder>(key, stored, "columnOrder") {
            self.state.column_order = self.enforce_order(&order);
        }
        if let Some(sizing) = stored_field::<ColumnSizing>(key, stored, "columnSizing") {
            self.state.column_sizing = enforce_min_column_size(&sizing, self.options.min_column_size);
        }
    }

    /// Writes the full state. Returns whether a write happened; failures are
    /// logged and skipped.
    pub fn persist(&self) -> bool {
        if !self.is_loaded {
            return false;
        }
        let key = self.options.storage_key();
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to save table state `{}`: {}", key, e);
                return false;
            }
        };
        match self.storage.set_item(&key, &raw) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to save table state: {}", e);
                false
            }
        }
    }

    pub fn set_visibility(&mut self, update: impl Into<Update<ColumnVisibility>>) {
        self.state.column_visibility = update.into().apply(&self.state.column_visibility);
    }

    pub fn set_column_visible(&mut self, column: &str, visible: bool) {
        self.state
            .column_visibility
            .insert(column.to_string(), visible);
    }

    pub fn set_order(&mut self, update: impl Into<Update<ColumnOrder>>) {
        let candidate = update.into().apply(&self.state.column_order);
        self.state.column_order = self.enforce_order(&candidate);
    }

    pub fn set_sizing(&mut self, update: impl Into<Update<ColumnSizing>>) {
        let candidate = update.into().apply(&self.state.column_sizing);
        self.state.column_sizing = enforce_min_column_size(&candidate, self.options.min_column_size);
    }

    fn enforce_order(&self, order: &[String]) -> ColumnOrder {
        enforce_column_order(order, &self.options.pinned_left, &self.options.pinned_right)
    }
}

fn stored_field<T: serde::de::DeserializeOwned>(
    key: &str,
    stored: &serde_json::Map<String, Value>,
    field: &str,
) -> Option<T> {
    match stored.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Ignoring stored `{}` of `{}`: {}", field, key, e);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_state::storage::MemoryStorage;

    fn visibility(entries: &[(&str, bool)]) -> ColumnVisibility {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn options() -> TableStateOptions {
        TableStateOptions::new("inventory", visibility(&[("id", false), ("sku", true)]))
            .default_order(ids(&["sku", "id", "vendor"]))
            .pinned_left(&["select"])
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(options().storage_key(), "table-state-inventory");
    }

    #[test]
    fn test_defaults_before_load() {
        let store = TableStateStore::new(options(), MemoryStorage::new());
        assert_eq!(store.visibility(), &visibility(&[("id", false), ("sku", true)]));
        assert_eq!(store.order(), &ids(&["select", "sku", "id", "vendor"]));
        assert!(store.sizing().is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_partial_record_falls_back_per_field() {
        let storage = MemoryStorage::with_item("table-state-inventory", r#"{"columnSizing":{"sku":10}}"#);
        let mut store = TableStateStore::new(options(), storage);
        store.load();

        assert_eq!(store.sizing().get("sku"), Some(&60.0));
        assert_eq!(store.visibility(), &visibility(&[("id", false), ("sku", true)]));
        assert_eq!(store.order(), &ids(&["select", "sku", "id", "vendor"]));
    }

    #[test]
    fn test_corrupt_field_does_not_poison_others() {
        let storage = MemoryStorage::with_item(
            "table-state-inventory",
            r#"{"columnVisibility":{"id":true},"columnSizing":"wide","columnOrder":null}"#,
        );
        let mut store = TableStateStore::new(options(), storage);
        store.load();

        assert_eq!(store.visibility(), &visibility(&[("id", true)]));
        assert!(store.sizing().is_empty());
        assert_eq!(store.order(), &ids(&["select", "sku", "id", "vendor"]));
    }

    #[test]
    fn test_invalid_json_keeps_defaults() {
        let storage = MemoryStorage::with_item("table-state-inventory", "{not json");
        let mut store = TableStateStore::new(options(), storage);
        store.load();
        assert!(store.is_loaded());
        assert_eq!(store.snapshot().column_visibility["sku"], true);
    }

    #[test]
    fn test_read_failure_keeps_defaults() {
        let storage = MemoryStorage::new();
        storage.fail_reads(true);
        let mut store = TableStateStore::new(options(), storage);
        store.load();
        assert!(store.is_loaded());
        assert_eq!(store.order(), &ids(&["select", "sku", "id", "vendor"]));
    }

    #[test]
    fn test_stored_order_is_repinned() {
        let storage = MemoryStorage::with_item(
            "table-state-inventory",
            r#"{"columnOrder":["vendor","select","sku"]}"#,
        );
        let mut store = TableStateStore::new(options(), storage);
        store.load();
        assert_eq!(store.order(), &ids(&["select", "vendor", "sku"]));
    }

    #[test]
    fn test_no_write_before_load() {
        let storage = MemoryStorage::new();
        let mut store = TableStateStore::new(options(), storage.clone());
        store.set_visibility(visibility(&[("sku", false)]));
        assert!(!store.persist());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_mutations_apply_invariants_and_persist() {
        let storage = MemoryStorage::new();
        let mut store = TableStateStore::new(options(), storage.clone());
        store.load();

        store.set_order(Update::with(|prev: &ColumnOrder| {
            let mut next = prev.clone();
            next.reverse();
            next
        }));
        assert_eq!(store.order(), &ids(&["select", "vendor", "id", "sku"]));

        store.set_sizing(Update::with(|prev: &ColumnSizing| {
            let mut next = prev.clone();
            next.insert("sku".to_string(), 12.0);
            next.insert("vendor".to_string(), 240.0);
            next
        }));
        assert_eq!(store.sizing()["sku"], 60.0);
        assert_eq!(store.sizing()["vendor"], 240.0);

        assert!(store.persist());
        let raw = storage.raw("table-state-inventory").unwrap();
        let saved: TableSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(&saved, store.snapshot());
        assert!(raw.contains("\"columnVisibility\""));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let mut store = TableStateStore::new(options(), storage.clone());
        store.load();
        store.set_visibility(visibility(&[("sku", false)]));
        assert!(!store.persist());
        assert!(!store.snapshot().is_visible("sku"));
    }

    #[test]
    fn test_reload_restores_state() {
        let storage = MemoryStorage::new();
        let mut first = TableStateStore::new(options(), storage.clone());
        first.load();
        first.set_visibility(Update::with(|prev: &ColumnVisibility| {
            let mut next = prev.clone();
            next.insert("id".to_string(), true);
            next
        }));
        first.set_sizing([("sku".to_string(), 120.0)].into_iter().collect::<ColumnSizing>());
        first.persist();

        let mut second = TableStateStore::new(options(), storage);
        second.load();
        assert_eq!(second.snapshot(), first.snapshot());
    }

    #[test]
    fn test_min_size_option() {
        let storage = MemoryStorage::with_item("table-state-t", r#"{"columnSizing":{"a":50,"b":90}}"#);
        let mut store = TableStateStore::new(
            TableStateOptions::new("t", ColumnVisibility::new()).min_column_size(80.0),
            storage,
        );
        store.load();
        assert_eq!(store.sizing()["a"], 80.0);
        assert_eq!(store.sizing()["b"], 90.0);
    }

    #[test]
    fn test_set_column_visible() {
        let mut store = TableStateStore::new(options(), MemoryStorage::new());
        store.set_column_visible("sku", false);
        store.set_column_visible("vendor", false);
        store.set_column_visible("vendor", false);
        store.set_column_visible("id", true);
        assert_eq!(
            store.visibility(),
            &visibility(&[("id", true), ("sku", false), ("vendor", false)])
        );
        assert!(!store.snapshot().is_visible("vendor"));
        assert!(store.snapshot().is_visible("id"));
    }
}
