//! Rate table - currency code to rate, all relative to one base currency

use crate::error::{Result, XchangeError};
use crate::registry;
use chrono::{DateTime, Utc};
use hashbrown::HashMap;

/// Immutable snapshot of exchange rates
///
/// Every rate is expressed against the same base currency (chosen by the
/// provider), so `amount / rate[from] * rate[to]` converts between any two
/// codes present in the table.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    /// Base currency reported by the provider, if any
    base: Option<String>,
    /// Provider's timestamp for the quotes, verbatim
    date: Option<String>,
    fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Build a table from a rate map. Fails if the map is empty.
    pub fn new(rates: HashMap<String, f64>) -> Result<Self> {
        if rates.is_empty() {
            return Err(XchangeError::FetchFailure(
                "No exchange rates data received from API".to_string(),
            ));
        }

        Ok(Self {
            rates,
            base: None,
            date: None,
            fetched_at: Utc::now(),
        })
    }

    /// Build a table from `(code, rate)` pairs, normalizing each code
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let rates = pairs
            .into_iter()
            .map(|(code, rate)| (registry::normalize(code.as_ref()), rate))
            .collect();
        Self::new(rates)
    }

    /// Attach provider metadata
    pub fn with_metadata(mut self, base: Option<String>, date: Option<String>) -> Self {
        self.base = base;
        self.date = date;
        self
    }

    /// Rate for a normalized code, if the provider quoted it
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Codes in the table, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
