//! Filter, sort and pagination state synchronized with the address bar.
//!
//! ```ignore
//! let schema = ParamSchema::new()
//!     .string("sku", "")
//!     .string_array("fulfillmentModel")
//!     .number("page", 1.0)
//!     .number("limit", 10.0);
//! let url = use_url_params(schema);
//! url.set_param("sku", "ABC"); // -> ?sku=ABC
//! ```

pub mod browser;
pub mod query_string;
pub mod schema;
pub mod signal;
pub mod store;

pub use browser::BrowserLocation;
pub use query_string::QueryString;
pub use schema::{ParamError, ParamKind, ParamRecord, ParamSchema, ParamValue, PAGE_KEY};
pub use signal::{use_url_params, UrlParams};
pub use store::UrlParamsStore;
