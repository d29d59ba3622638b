use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

/// Inventory API endpoint and credentials.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
api_key = ""
"#;

/// Load configuration
///
/// The bundle has no runtime environment, so overrides are taken at build
/// time from `SPCS_API_URL` and `SPCS_API_KEY`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(DEFAULT_CONFIG, option_env!("SPCS_API_URL"), option_env!("SPCS_API_KEY"))
}

fn load_config_with(
    source: &str,
    base_url: Option<&str>,
    api_key: Option<&str>,
) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(source)?;
    if let Some(url) = base_url.filter(|v| !v.is_empty()) {
        config.api.base_url = url.to_string();
    }
    if let Some(key) = api_key.filter(|v| !v.is_empty()) {
        config.api.api_key = key.to_string();
    }
    // Trailing slash would double up with the `/inventory` path.
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if !config.api.is_configured() {
        log::info!("Inventory API is not configured");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config_with(DEFAULT_CONFIG, None, None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert!(!config.api.is_configured());
    }

    #[test]
    fn test_overrides_win() {
        let config = load_config_with(
            DEFAULT_CONFIG,
            Some("https://api.example.com/v1/"),
            Some("secret"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.api_key, "secret");
        assert!(config.api.is_configured());
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let source = "[api]\nbase_url = \"http://localhost:8080\"\napi_key = \"k\"\n";
        let config = load_config_with(source, Some(""), None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            load_config_with("[api", None, None),
            Err(ConfigError::Parse(_))
        ));
    }
}
