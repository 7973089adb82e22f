//! # xchange
//!
//! An interactive command-line currency converter.
//!
//! Rates are fetched once at startup into an immutable [`rates::RateTable`],
//! then the user converts amounts between any two registered currencies
//! until they type `exit`.
//!
//! ## Example
//!
//! ```rust
//! use xchange::prelude::*;
//!
//! let rates = RateTable::from_pairs([("USD", 1.0), ("JPY", 110.0)]).unwrap();
//! let yen = convert(10.0, "usd", "jpy", &rates).unwrap();
//! assert!((yen - 1100.0).abs() < 1e-9);
//! ```

pub mod controller;
pub mod converter;
pub mod error;
pub mod presenter;
pub mod rates;
pub mod registry;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::controller::{Controller, LoopState, SessionEnd};
    pub use crate::converter::{convert, Conversion};
    pub use crate::error::{ErrorPolicy, Result, XchangeError};
    pub use crate::presenter::{Presenter, TerminalPresenter};
    pub use crate::rates::{ClientConfig, FxRatesApiClient, RateSource, RateTable, StaticRateSource};
    pub use crate::registry::is_supported;
}
