//! Currency conversion through the rate table's implicit base currency

use crate::error::{Result, XchangeError};
use crate::rates::RateTable;
use crate::registry;
use log::debug;
use std::fmt;

/// Convert an amount from one currency to another
///
/// Both codes are normalized and must be in the registry. Rates are quoted
/// against a shared base, so the amount goes `from -> base -> to`:
/// `(amount / rate[from]) * rate[to]`. No rounding is applied here.
///
/// Negative amounts are not rejected; they convert arithmetically.
///
/// # Example
/// ```
/// use xchange::converter::convert;
/// use xchange::rates::RateTable;
///
/// let rates = RateTable::from_pairs([("USD", 1.0), ("EUR", 0.85)]).unwrap();
/// let eur = convert(100.0, "usd", "EUR", &rates).unwrap();
/// assert!((eur - 85.0).abs() < 1e-9);
/// ```
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<f64> {
    let from = registry::normalize(from);
    let to = registry::normalize(to);

    if !registry::is_supported(&from) {
        return Err(XchangeError::UnsupportedCurrency(from));
    }
    if !registry::is_supported(&to) {
        return Err(XchangeError::UnsupportedCurrency(to));
    }

    let from_rate = rates
        .get(&from)
        .ok_or_else(|| XchangeError::RateUnavailable(from.clone()))?;
    let to_rate = rates
        .get(&to)
        .ok_or_else(|| XchangeError::RateUnavailable(to.clone()))?;

    if from_rate == 0.0 {
        return Err(XchangeError::ZeroRate(from));
    }

    let result = (amount / from_rate) * to_rate;
    debug!("{} {} -> {} {} (rates {} / {})", amount, from, result, to, from_rate, to_rate);

    Ok(result)
}

/// A completed conversion, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

impl Conversion {
    /// Run `convert` and keep the normalized inputs alongside the result
    pub fn execute(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<Self> {
        let result = convert(amount, from, to, rates)?;
        Ok(Self {
            amount,
            from: registry::normalize(from),
            to: registry::normalize(to),
            result,
        })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is equal to {:.2} {}",
            self.amount, self.from, self.result, self.to
        )
    }
}
