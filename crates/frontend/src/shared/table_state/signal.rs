//! Reactive binding of [`TableStateStore`] for Leptos components.

use leptos::prelude::*;

use super::invariants::{move_column, ColumnOrder, ColumnSizing, ColumnVisibility};
use super::storage::BrowserStorage;
use super::store::{TableSnapshot, TableStateOptions, TableStateStore, Update};

/// Handle returned by [`use_table_state`].
#[derive(Clone, Copy)]
pub struct TableState {
    store: StoredValue<TableStateStore<BrowserStorage>, LocalStorage>,
    /// Current visibility, order and sizing.
    pub snapshot: RwSignal<TableSnapshot>,
}

/// Загружает сохранённое состояние таблицы и сохраняет его после каждого
/// изменения. Запись в localStorage выполняется эффектом, то есть после
/// обновления UI.
pub fn use_table_state(options: TableStateOptions) -> TableState {
    let mut store = TableStateStore::new(options, BrowserStorage);
    store.load();

    let snapshot = RwSignal::new(store.snapshot().clone());
    let store = StoredValue::new_local(store);

    Effect::new(move |_| {
        snapshot.track();
        store.with_value(|s| s.persist());
    });

    TableState { store, snapshot }
}

impl TableState {
    fn update(&self, f: impl FnOnce(&mut TableStateStore<BrowserStorage>)) {
        let next = self.store.try_update_value(|s| {
            f(s);
            s.snapshot().clone()
        });
        if let Some(next) = next {
            self.snapshot.set(next);
        }
    }

    pub fn set_visibility(&self, update: impl Into<Update<ColumnVisibility>>) {
        let update = update.into();
        self.update(|s| s.set_visibility(update));
    }

    pub fn set_order(&self, update: impl Into<Update<ColumnOrder>>) {
        let update = update.into();
        self.update(|s| s.set_order(update));
    }

    pub fn set_sizing(&self, update: impl Into<Update<ColumnSizing>>) {
        let update = update.into();
        self.update(|s| s.set_sizing(update));
    }

    pub fn min_column_size(&self) -> f64 {
        self.store
            .try_with_value(|s| s.options().min_column_size)
            .unwrap_or(super::store::DEFAULT_MIN_COLUMN_SIZE)
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.snapshot.with(|s| s.is_visible(column))
    }

    pub fn toggle_visibility(&self, column: &str, visible: bool) {
        self.update(|s| s.set_column_visible(column, visible));
    }

    /// `current` is the effective order shown in the UI; it seeds the
    /// stored order when nothing has been reordered yet.
    pub fn move_column(&self, current: Vec<String>, dragged: &str, target: &str) {
        let next = move_column(&current, dragged, target);
        self.set_order(next);
    }

    pub fn resize_column(&self, column: &str, width: f64) {
        let column = column.to_string();
        self.set_sizing(Update::with(move |prev: &ColumnSizing| {
            let mut next = prev.clone();
            next.insert(column, width);
            next
        }));
    }

    /// Показывает все колонки и сбрасывает порядок и ширины.
    pub fn reset(&self) {
        let defaults = self
            .store
            .with_value(|s| (s.options().default_visibility.clone(), s.options().default_order.clone()));
        let (visibility, order) = defaults;
        self.update(|s| {
            s.set_visibility(visibility);
            s.set_order(order);
            s.set_sizing(ColumnSizing::new());
        });
    }
}
