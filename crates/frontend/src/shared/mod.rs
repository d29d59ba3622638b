pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod external_store;
pub mod icons;
pub mod list_utils;
pub mod request_slot;
pub mod table_state;
pub mod table_utils;
pub mod url_params;
