//! Column visibility, order and sizing persisted per table in
//! `localStorage` under `table-state-{key}`.

pub mod invariants;
pub mod signal;
pub mod storage;
pub mod store;

pub use invariants::{
    enforce_column_order, enforce_min_column_size, move_column, resolve_column_order,
    ColumnOrder, ColumnSizing, ColumnVisibility,
};
pub use signal::{use_table_state, TableState};
pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{TableSnapshot, TableStateOptions, TableStateStore, Update};
