use serde::{Deserialize, Serialize};

/// Модели фулфилмента, по которым фильтруется инвентарь
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentModel {
    #[serde(rename = "RETAIL")]
    Retail,
    #[serde(rename = "FBM")]
    Fbm,
    #[serde(rename = "RETAIL-VQ")]
    RetailVq,
    #[serde(rename = "FBS-DO")]
    FbsDo,
    #[serde(rename = "FBS-PU")]
    FbsPu,
    #[serde(rename = "DS")]
    Ds,
}

impl FulfillmentModel {
    /// Код модели (значение параметра `fulfillmentModel`)
    pub fn code(&self) -> &'static str {
        match self {
            FulfillmentModel::Retail => "RETAIL",
            FulfillmentModel::Fbm => "FBM",
            FulfillmentModel::RetailVq => "RETAIL-VQ",
            FulfillmentModel::FbsDo => "FBS-DO",
            FulfillmentModel::FbsPu => "FBS-PU",
            FulfillmentModel::Ds => "DS",
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            FulfillmentModel::Retail => "Retail",
            FulfillmentModel::Fbm => "FBM",
            FulfillmentModel::RetailVq => "Retail-VQ",
            FulfillmentModel::FbsDo => "FBS-DO",
            FulfillmentModel::FbsPu => "FBS-PU",
            FulfillmentModel::Ds => "DS",
        }
    }

    pub fn all() -> Vec<FulfillmentModel> {
        vec![
            FulfillmentModel::Retail,
            FulfillmentModel::Fbm,
            FulfillmentModel::RetailVq,
            FulfillmentModel::FbsDo,
            FulfillmentModel::FbsPu,
            FulfillmentModel::Ds,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for FulfillmentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
