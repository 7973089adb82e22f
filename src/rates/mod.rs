//! Exchange rate system
//!
//! Fetches the rate table once per session and holds it immutably.
//!
//! # Components
//!
//! - **table**: `RateTable`, the code -> rate mapping against one implicit base
//! - **source**: `RateSource` trait and an in-memory source
//! - **fxratesapi**: HTTP client for the fxratesapi.com latest-rates endpoint
//!
//! # Example
//!
//! ```rust
//! use xchange::rates::RateTable;
//!
//! let table = RateTable::from_pairs([("USD", 1.0), ("EUR", 0.85)]).unwrap();
//! assert_eq!(table.get("EUR"), Some(0.85));
//! assert_eq!(table.len(), 2);
//! ```

pub mod fxratesapi;
pub mod source;
pub mod table;

pub use fxratesapi::{parse_rates_response, ClientConfig, FxRatesApiClient, DEFAULT_API_URL};
pub use source::{RateSource, StaticRateSource};
pub use table::RateTable;
