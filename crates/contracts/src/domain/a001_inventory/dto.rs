use serde::{Deserialize, Serialize};

use crate::shared::api_response::ApiResponsePaginated;

/// Модель фулфилмента, вложенная в строку инвентаря
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFulfillmentModel {
    pub fulfillment_model: String,
    pub priority: i32,
}

/// Строка инвентаря (SKU × страна × модель фулфилмента × поставщик)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub sku: String,
    pub country_code: String,
    pub fulfillment_model_id: String,
    pub vendor_id: i64,
    pub vendor_name: String,
    pub vendor_priority: i32,
    pub origin: String,
    pub quantity: Option<i64>,
    pub selling_price: Option<f64>,
    pub cost_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub promo_start_date: Option<String>,
    pub promo_end_date: Option<String>,
    pub shipping_time: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub inventory_tracking_id: String,
    /// Может отсутствовать у старых записей
    #[serde(default)]
    pub fulfillment_model: Option<InventoryFulfillmentModel>,
    pub source_code: String,
}

/// Ответ `GET /inventory`
pub type InventoryResponse = ApiResponsePaginated<InventoryItem>;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "message": null,
        "data": [{
            "id": "inv-1",
            "sku": "N123",
            "countryCode": "UAE",
            "fulfillmentModelId": "fm-1",
            "vendorId": 17,
            "vendorName": "Acme",
            "vendorPriority": 2,
            "origin": "CN",
            "quantity": 1500,
            "sellingPrice": 1299.5,
            "costPrice": null,
            "promoPrice": null,
            "promoStartDate": null,
            "promoEndDate": null,
            "shippingTime": "2-3 days",
            "isActive": true,
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-16T09:00:00.000Z",
            "deletedAt": null,
            "inventoryTrackingId": "trk-9",
            "fulfillmentModel": { "fulfillmentModel": "FBM", "priority": 1 },
            "sourceCode": "SRC"
        }],
        "pagination": { "count": 1, "total": 1, "limit": 10, "page": 1, "totalPages": 1 }
    }"#;

    #[test]
    fn test_parse_inventory_response() {
        let resp: InventoryResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.len(), 1);
        let item = &resp.data[0];
        assert_eq!(item.vendor_name, "Acme");
        assert_eq!(item.quantity, Some(1500));
        assert_eq!(
            item.fulfillment_model.as_ref().map(|m| m.fulfillment_model.as_str()),
            Some("FBM")
        );
        assert_eq!(resp.pagination.map(|p| p.total_pages), Some(1));
    }
}
