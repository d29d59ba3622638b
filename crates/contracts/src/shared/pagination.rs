use serde::{Deserialize, Serialize};

/// Пагинация в том виде, в каком её отдаёт API инвентаря
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPagination {
    /// Количество записей на текущей странице
    pub count: u64,
    /// Всего записей, удовлетворяющих фильтру
    pub total: u64,
    pub limit: u64,
    /// Номер страницы, начиная с 1
    pub page: u64,
    pub total_pages: u64,
}

/// Пагинация для UI (панель страниц под таблицей)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub item_count: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl From<ApiPagination> for Pagination {
    fn from(api: ApiPagination) -> Self {
        Self {
            item_count: api.count,
            total_items: api.total,
            items_per_page: api.limit,
            current_page: api.page.max(1),
            total_pages: api.total_pages,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Номер первой записи на странице (1-based), 0 если записей нет
    pub fn first_item(&self) -> u64 {
        if self.total_items == 0 {
            return 0;
        }
        self.current_page.saturating_sub(1) * self.items_per_page + 1
    }

    /// Номер последней записи на странице
    pub fn last_item(&self) -> u64 {
        (self.current_page * self.items_per_page).min(self.total_items)
    }
}
