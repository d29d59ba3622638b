//! Колонки таблицы инвентаря: заголовки, видимость по умолчанию и
//! форматирование ячеек.

use contracts::domain::a001_inventory::InventoryItem;

use crate::shared::components::column_options::ColumnOption;
use crate::shared::components::table::{format_count, format_price};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::table_state::ColumnVisibility;

/// Как отображается значение ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Остаток на складе
    Count,
    Price,
    Date,
    /// Относительное время плюс полная дата
    DateTime,
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryColumn {
    pub id: &'static str,
    pub header: &'static str,
    pub visible_by_default: bool,
    pub copyable: bool,
    pub kind: CellKind,
}

const fn column(
    id: &'static str,
    header: &'static str,
    visible_by_default: bool,
    copyable: bool,
    kind: CellKind,
) -> InventoryColumn {
    InventoryColumn {
        id,
        header,
        visible_by_default,
        copyable,
        kind,
    }
}

/// Все колонки в порядке определения
pub const INVENTORY_COLUMNS: &[InventoryColumn] = &[
    column("id", "ID", false, true, CellKind::Text),
    column("sku", "SKU", true, true, CellKind::Text),
    column("countryCode", "Country", true, false, CellKind::Text),
    column("fulfillmentModel", "Fulfillment Model", true, false, CellKind::Text),
    column("sourceCode", "Source Code", false, true, CellKind::Text),
    column("vendorId", "Vendor ID", false, true, CellKind::Text),
    column("vendorName", "Vendor", true, true, CellKind::Text),
    column("vendorPriority", "Vendor Priority", false, true, CellKind::Text),
    column("origin", "Origin", true, true, CellKind::Text),
    column("quantity", "Stock", true, true, CellKind::Count),
    column("sellingPrice", "Selling Price", true, true, CellKind::Price),
    column("costPrice", "Cost Price", false, true, CellKind::Price),
    column("promoPrice", "Promo Price", true, true, CellKind::Price),
    column("promoStartDate", "Promo Start", true, true, CellKind::Date),
    column("promoEndDate", "Promo End", true, true, CellKind::Date),
    column("shippingTime", "Shipping Time", true, true, CellKind::Text),
    column("isActive", "Active", false, false, CellKind::YesNo),
    column("createdAt", "Created At", false, true, CellKind::DateTime),
    column("updatedAt", "Updated At", true, true, CellKind::DateTime),
    column("deletedAt", "Deleted At", false, true, CellKind::DateTime),
    column("inventoryTrackingId", "Tracking ID", false, true, CellKind::Text),
];

pub const TABLE_KEY: &str = "inventory";

pub fn default_column_visibility() -> ColumnVisibility {
    INVENTORY_COLUMNS
        .iter()
        .map(|c| (c.id.to_string(), c.visible_by_default))
        .collect()
}

pub fn column_ids() -> Vec<&'static str> {
    INVENTORY_COLUMNS.iter().map(|c| c.id).collect()
}

pub fn column_options() -> Vec<ColumnOption> {
    INVENTORY_COLUMNS.iter().map(|c| (c.id, c.header)).collect()
}

pub fn find_column(id: &str) -> Option<&'static InventoryColumn> {
    INVENTORY_COLUMNS.iter().find(|c| c.id == id)
}

/// Сырое значение поля (то, что копируется в буфер обмена); `None` для null
pub fn raw_value(item: &InventoryItem, id: &str) -> Option<String> {
    let value = match id {
        "id" => item.id.clone(),
        "sku" => item.sku.clone(),
        "countryCode" => item.country_code.clone(),
        "fulfillmentModel" => item.fulfillment_model.as_ref()?.fulfillment_model.clone(),
        "sourceCode" => item.source_code.clone(),
        "vendorId" => item.vendor_id.to_string(),
        "vendorName" => item.vendor_name.clone(),
        "vendorPriority" => item.vendor_priority.to_string(),
        "origin" => item.origin.clone(),
        "quantity" => item.quantity?.to_string(),
        "sellingPrice" => item.selling_price?.to_string(),
        "costPrice" => item.cost_price?.to_string(),
        "promoPrice" => item.promo_price?.to_string(),
        "promoStartDate" => item.promo_start_date.clone()?,
        "promoEndDate" => item.promo_end_date.clone()?,
        "shippingTime" => item.shipping_time.clone(),
        "isActive" => item.is_active.to_string(),
        "createdAt" => item.created_at.clone(),
        "updatedAt" => item.updated_at.clone(),
        "deletedAt" => item.deleted_at.clone()?,
        "inventoryTrackingId" => item.inventory_tracking_id.clone(),
        _ => return None,
    };
    Some(value)
}

/// Текст ячейки; `-` для пустых значений
pub fn cell_text(item: &InventoryItem, column: &InventoryColumn) -> String {
    if column.kind == CellKind::YesNo {
        return if item.is_active { "Yes" } else { "No" }.to_string();
    }
    let Some(raw) = raw_value(item, column.id).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    match column.kind {
        CellKind::Count => raw
            .parse::<i64>()
            .map(format_count)
            .unwrap_or(raw),
        CellKind::Price => raw
            .parse::<f64>()
            .map(format_price)
            .unwrap_or(raw),
        CellKind::Date => format_date(&raw),
        CellKind::DateTime => format_datetime(&raw),
        CellKind::Text | CellKind::YesNo => raw,
    }
}
