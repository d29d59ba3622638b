pub mod country_code;
pub mod fulfillment_model;

pub use country_code::CountryCode;
pub use fulfillment_model::FulfillmentModel;
