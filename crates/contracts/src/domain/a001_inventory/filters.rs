use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Фильтры и пагинация списка инвентаря
///
/// Пустая строка (или одни пробелы) означает "фильтр не задан". Даты в формате `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilters {
    pub sku: String,
    pub country_code: String,
    pub vendor: String,
    pub fulfillment_model: Vec<String>,
    pub updated_from: String,
    pub updated_to: String,
    /// Номер страницы, начиная с 1
    pub page: u64,
    pub limit: u64,
}

impl Default for InventoryFilters {
    fn default() -> Self {
        Self {
            sku: String::new(),
            country_code: String::new(),
            vendor: String::new(),
            fulfillment_model: Vec::new(),
            updated_from: String::new(),
            updated_to: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl InventoryFilters {
    /// Число активных фильтров для бейджа. SKU ищется отдельным полем и не
    /// считается; диапазон дат считается одним фильтром.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.country_code.is_empty(),
            !self.vendor.trim().is_empty(),
            !self.fulfillment_model.is_empty(),
            !self.updated_from.is_empty() || !self.updated_to.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Задан ли хоть какой-то фильтр (включая SKU) - показывает кнопку "Clear"
    pub fn has_active_filters(&self) -> bool {
        !self.sku.trim().is_empty() || self.active_filter_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page_of_ten() {
        let filters = InventoryFilters::default();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = InventoryFilters {
            sku: "N123".into(),
            ..Default::default()
        };
        assert_eq!(filters.active_filter_count(), 0);
        assert!(filters.has_active_filters());

        filters.country_code = "UAE".into();
        filters.fulfillment_model = vec!["FBM".into(), "DS".into()];
        filters.updated_from = "2024-01-01".into();
        filters.updated_to = "2024-02-01".into();
        assert_eq!(filters.active_filter_count(), 3);

        filters.vendor = "acme".into();
        assert_eq!(filters.active_filter_count(), 4);
    }

    #[test]
    fn test_blank_search_text_is_not_a_filter() {
        let filters = InventoryFilters {
            sku: "  ".into(),
            vendor: " ".into(),
            ..Default::default()
        };
        assert_eq!(filters.active_filter_count(), 0);
        assert!(!filters.has_active_filters());
    }
}
