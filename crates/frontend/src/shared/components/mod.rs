pub mod column_options;
pub mod date_input;
pub mod pagination_controls;
pub mod table;
pub mod ui;
