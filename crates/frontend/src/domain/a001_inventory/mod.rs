pub mod api;
pub mod columns;
pub mod filters;
pub mod ui;
