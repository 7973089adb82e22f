//! Rate source trait and in-memory implementation

use super::table::RateTable;
use crate::error::Result;
use std::future::Future;

/// Trait for anything that can produce a rate table
pub trait RateSource: Send + Sync {
    /// Fetch the current rates. Called once per session.
    fn fetch_rates(&self) -> impl Future<Output = Result<RateTable>> + Send;

    /// Get the source name
    fn name(&self) -> &str;
}

/// Rate source backed by a fixed table
///
/// Lets the session be wired up without a network, e.g. in tests.
///
/// # Example
/// ```
/// use xchange::rates::{RateSource, RateTable, StaticRateSource};
///
/// let table = RateTable::from_pairs([("USD", 1.0), ("JPY", 110.0)]).unwrap();
/// let source = StaticRateSource::new(table);
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let rates = rt.block_on(source.fetch_rates()).unwrap();
/// assert_eq!(rates.get("JPY"), Some(110.0));
/// ```
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    table: RateTable,
}

impl StaticRateSource {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }
}

impl RateSource for StaticRateSource {
    async fn fetch_rates(&self) -> Result<RateTable> {
        Ok(self.table.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
