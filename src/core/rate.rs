//! Exchange rate abstractions and core types

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use super::error::{RateError, Result};

/// Calendar date of a rate lookup.
///
/// Components are taken as given: a month of 13 or a day of 32 is carried
/// into the request unchanged and left to the provider to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl RateDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        RateDate { year, month, day }
    }

    pub fn today() -> Self {
        Local::now().date_naive().into()
    }
}

/// Renders the `YYYY-MM-DD` path segment used in requests.
impl Display for RateDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for RateDate {
    fn from(date: NaiveDate) -> Self {
        RateDate::new(date.year(), date.month(), date.day())
    }
}

impl FromStr for RateDate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [year, month, day] = parts[..] else {
            return Err(anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", s));
        };
        let parse_err = |part: &str| anyhow::anyhow!("Invalid date component '{}' in: {}", part, s);
        Ok(RateDate {
            year: year.parse().map_err(|_| parse_err(year))?,
            month: month.parse().map_err(|_| parse_err(month))?,
            day: day.parse().map_err(|_| parse_err(day))?,
        })
    }
}

/// Rates of one day, keyed by currency code, relative to the provider's base
/// currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDocument {
    rates: HashMap<String, f64>,
}

impl RateDocument {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        RateDocument { rates }
    }

    pub fn rate(&self, code: &str) -> Result<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| RateError::UnknownCurrency(code.to_string()))
    }

    /// Rate of `from` expressed in `to`. Both rates share the same base, so the
    /// ratio cancels it. A zero `to` rate is not guarded against.
    pub fn cross_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Ok(from_rate / to_rate)
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Rate of `currency` against the provider's base currency on `date`.
    async fn exchange_rate(&self, currency: &str, date: RateDate) -> Result<f64>;

    /// Rate of `from` against `to` on `date`.
    async fn cross_rate(&self, from: &str, to: &str, date: RateDate) -> Result<f64>;
}
