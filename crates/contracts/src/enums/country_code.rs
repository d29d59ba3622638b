use serde::{Deserialize, Serialize};

/// Страны, в которых ведётся инвентарь
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "KSA")]
    Ksa,
}

impl CountryCode {
    /// Код страны, как его принимает API и как он пишется в URL
    pub fn code(&self) -> &'static str {
        match self {
            CountryCode::Uae => "UAE",
            CountryCode::Ksa => "KSA",
        }
    }

    /// Подпись для фильтра
    pub fn label(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<CountryCode> {
        vec![CountryCode::Uae, CountryCode::Ksa]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UAE" => Some(CountryCode::Uae),
            "KSA" => Some(CountryCode::Ksa),
            _ => None,
        }
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
