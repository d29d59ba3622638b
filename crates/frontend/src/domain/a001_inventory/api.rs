use contracts::domain::a001_inventory::{InventoryFilters, InventoryResponse};
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::AbortSignal;

use crate::shared::config::ApiConfig;
use crate::shared::url_params::QueryString;

/// Ошибки загрузки инвентаря. `Display` - текст, который видит пользователь.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("API configuration missing")]
    MissingConfig,
    #[error("API error: {0}")]
    Http(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    /// Запрос отменён более новым запросом или размонтированием
    #[error("request aborted")]
    Aborted,
}

impl FetchError {
    /// Ошибка `fetch` по имени JS-исключения (`AbortError`, `TypeError`, ...)
    fn from_js(name: &str, message: String) -> Self {
        if name == "AbortError" {
            FetchError::Aborted
        } else {
            FetchError::Transport(message)
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) => FetchError::from_js(&js.name, js.message),
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// `page` и `limit` всегда; остальные фильтры только если заданы (текст
/// поиска без крайних пробелов); `fulfillmentModel` повторяется для каждого
/// значения.
pub fn build_inventory_query_string(filters: &InventoryFilters) -> String {
    let mut query = QueryString::new();
    query.append("page", filters.page.to_string());
    query.append("limit", filters.limit.to_string());

    let optional = [
        ("sku", &filters.sku),
        ("countryCode", &filters.country_code),
        ("vendor", &filters.vendor),
    ];
    for (key, value) in optional {
        let value = value.trim();
        if !value.is_empty() {
            query.append(key, value);
        }
    }
    for model in &filters.fulfillment_model {
        query.append("fulfillmentModel", model.as_str());
    }
    if !filters.updated_from.is_empty() {
        query.append("updatedFrom", filters.updated_from.as_str());
    }
    if !filters.updated_to.is_empty() {
        query.append("updatedTo", filters.updated_to.as_str());
    }
    query.to_string()
}

pub fn inventory_url(config: &ApiConfig, filters: &InventoryFilters) -> String {
    format!(
        "{}/inventory?{}",
        config.base_url,
        build_inventory_query_string(filters)
    )
}

/// Получить страницу инвентаря
///
/// `abort` отменяет запрос на уровне браузера; отмена возвращается как
/// [`FetchError::Aborted`].
pub async fn fetch_inventory(
    config: &ApiConfig,
    filters: &InventoryFilters,
    abort: Option<&AbortSignal>,
) -> Result<InventoryResponse, FetchError> {
    if !config.is_configured() {
        return Err(FetchError::MissingConfig);
    }
    let url = inventory_url(config, filters);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("X-API-KEY", &config.api_key)
        .abort_signal(abort)
        .send()
        .await?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let data: InventoryResponse = response.json().await?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_minimal() {
        assert_eq!(
            build_inventory_query_string(&InventoryFilters::default()),
            "page=1&limit=10"
        );
    }

    #[test]
    fn test_query_string_full() {
        let filters = InventoryFilters {
            sku: "N 12&3".into(),
            country_code: "UAE".into(),
            vendor: "Acme".into(),
            fulfillment_model: vec!["FBM".into(), "RETAIL-VQ".into()],
            updated_from: "2024-01-01".into(),
            updated_to: "2024-01-31".into(),
            page: 2,
            limit: 50,
        };
        assert_eq!(
            build_inventory_query_string(&filters),
            "page=2&limit=50&sku=N+12%263&countryCode=UAE&vendor=Acme\
             &fulfillmentModel=FBM&fulfillmentModel=RETAIL-VQ\
             &updatedFrom=2024-01-01&updatedTo=2024-01-31"
        );
    }

    #[test]
    fn test_query_string_trims_search_text() {
        let filters = InventoryFilters {
            sku: "ab ".into(),
            vendor: "   ".into(),
            ..Default::default()
        };
        assert_eq!(build_inventory_query_string(&filters), "page=1&limit=10&sku=ab");
    }

    #[test]
    fn test_inventory_url() {
        let config = ApiConfig {
            base_url: "https://api.example.com".into(),
            api_key: "k".into(),
        };
        assert_eq!(
            inventory_url(&config, &InventoryFilters::default()),
            "https://api.example.com/inventory?page=1&limit=10"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::MissingConfig.to_string(), "API configuration missing");
        assert_eq!(FetchError::Http(503).to_string(), "API error: 503");
        assert_eq!(
            FetchError::Transport("Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
    }

    #[test]
    fn test_abort_error_is_recognised() {
        assert_eq!(
            FetchError::from_js("AbortError", "The user aborted a request.".into()),
            FetchError::Aborted
        );
        assert_eq!(
            FetchError::from_js("TypeError", "Failed to fetch".into()),
            FetchError::Transport("Failed to fetch".into())
        );
    }
}
