use crate::domain::a001_inventory::ui::list::InventoryList;
use crate::shared::config::{load_config, ApiConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // API endpoint and key for every request of the app.
    let api = match load_config() {
        Ok(config) => config.api,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            ApiConfig::default()
        }
    };
    provide_context(api);

    view! {
        <main class="app">
            <InventoryList />
        </main>
    }
}
