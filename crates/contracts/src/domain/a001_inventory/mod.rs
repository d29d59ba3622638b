pub mod dto;
pub mod filters;

pub use dto::{InventoryFulfillmentModel, InventoryItem, InventoryResponse};
pub use filters::{InventoryFilters, DEFAULT_LIMIT, DEFAULT_PAGE};
