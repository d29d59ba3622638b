use contracts::domain::a001_inventory::{InventoryItem, InventoryResponse};
use contracts::shared::pagination::Pagination;

use crate::domain::a001_inventory::api::FetchError;

const FALLBACK_ERROR: &str = "Failed to fetch inventory";

/// Данные списка инвентаря и флаги загрузки
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryListState {
    pub items: Vec<InventoryItem>,
    pub pagination: Option<Pagination>,
    pub error: Option<String>,

    /// Идёт запрос (в том числе обновление уже показанных данных)
    pub is_loading: bool,
    /// Первый запрос ещё не завершился
    pub is_initial_loading: bool,
}

impl Default for InventoryListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            error: None,
            is_loading: false,
            is_initial_loading: true,
        }
    }
}

impl InventoryListState {
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Применяет результат запроса. Отменённый запрос не считается ошибкой:
    /// показанные данные остаются, сообщение не выставляется.
    pub fn apply(&mut self, result: Result<InventoryResponse, FetchError>) {
        self.is_loading = false;
        self.is_initial_loading = false;

        match result {
            Err(FetchError::Aborted) => {}
            Ok(response) if response.success => {
                self.items = response.data;
                self.pagination = response.pagination.map(Pagination::from);
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                self.fail(message);
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        log::warn!("Inventory fetch failed: {}", message);
        self.error = Some(message);
        self.items.clear();
        self.pagination = None;
    }

    /// Обновление поверх уже показанной таблицы
    pub fn is_refreshing(&self) -> bool {
        self.is_loading && !self.is_initial_loading
    }
}
