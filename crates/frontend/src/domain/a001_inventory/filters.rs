//! Фильтры инвентаря в URL: `?sku=…&countryCode=…&fulfillmentModel=…&page=…`

use contracts::domain::a001_inventory::{InventoryFilters, DEFAULT_LIMIT, DEFAULT_PAGE};

use crate::shared::url_params::{ParamRecord, ParamSchema, PAGE_KEY};

pub const SKU: &str = "sku";
pub const COUNTRY_CODE: &str = "countryCode";
pub const VENDOR: &str = "vendor";
pub const FULFILLMENT_MODEL: &str = "fulfillmentModel";
pub const UPDATED_FROM: &str = "updatedFrom";
pub const UPDATED_TO: &str = "updatedTo";
pub const PAGE: &str = PAGE_KEY;
pub const LIMIT: &str = "limit";

pub fn inventory_param_schema() -> ParamSchema {
    ParamSchema::new()
        .string(SKU, "")
        .string(COUNTRY_CODE, "")
        .string(VENDOR, "")
        .string_array(FULFILLMENT_MODEL)
        .string(UPDATED_FROM, "")
        .string(UPDATED_TO, "")
        .number(PAGE, DEFAULT_PAGE as f64)
        .number(LIMIT, DEFAULT_LIMIT as f64)
}

/// `?page=0`, `?page=2.5` or `?limit=-1` fall back to sane values.
fn positive_integer(value: f64, fallback: u64) -> u64 {
    if value.is_finite() && value >= 1.0 {
        value.floor() as u64
    } else {
        fallback
    }
}

pub fn filters_from_record(record: &ParamRecord) -> InventoryFilters {
    InventoryFilters {
        sku: record.string(SKU).to_string(),
        country_code: record.string(COUNTRY_CODE).to_string(),
        vendor: record.string(VENDOR).to_string(),
        fulfillment_model: record.strings(FULFILLMENT_MODEL).to_vec(),
        updated_from: record.string(UPDATED_FROM).to_string(),
        updated_to: record.string(UPDATED_TO).to_string(),
        page: positive_integer(record.number(PAGE), DEFAULT_PAGE),
        limit: positive_integer(record.number(LIMIT), DEFAULT_LIMIT),
    }
}
