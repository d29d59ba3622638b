use serde::{Deserialize, Serialize};

use super::pagination::ApiPagination;

/// Ответ API со списком и пагинацией (общая обёртка `{success, message, data, pagination}`)
///
/// `pagination` может отсутствовать (например, в ответе с ошибкой).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponsePaginated<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<ApiPagination>,
}

impl<T> ApiResponsePaginated<T> {
    /// Неуспешный ответ: данные и пагинация очищены, сообщение передаётся как есть
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Vec::new(),
            pagination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"success":false,"message":"boom"}"#;
        let resp: ApiResponsePaginated<u32> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_empty());
        assert!(resp.pagination.is_none());
    }

    #[test]
    fn test_failure_clears_payload() {
        let resp = ApiResponsePaginated::<u32>::failure("API error: 500");
        assert_eq!(resp.message.as_deref(), Some("API error: 500"));
        assert!(resp.data.is_empty());
    }
}
