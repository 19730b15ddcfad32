//! The quote produced by a successful rate lookup

use crate::core::history::ClosePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format of the as-of date, e.g. `02 Jan 2024`.
pub const AS_OF_DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub pair_code: String,
    pub latest_rate: f64,
    pub previous_rate: f64,
    pub history: Vec<ClosePoint>,
    pub as_of: NaiveDate,
}

impl RateQuote {
    /// Builds a quote from a close series. Returns `None` when fewer than two
    /// points are available or either of the last two closes is not positive.
    pub fn from_history(pair_code: &str, mut history: Vec<ClosePoint>) -> Option<Self> {
        if history.len() < 2 {
            return None;
        }
        history.sort_by_key(|point| point.date);

        let latest = history[history.len() - 1];
        let previous = history[history.len() - 2];
        if !(latest.close > 0.0 && previous.close > 0.0) {
            return None;
        }

        Some(RateQuote {
            pair_code: pair_code.to_string(),
            latest_rate: latest.close,
            previous_rate: previous.close,
            history,
            as_of: latest.date,
        })
    }

    pub fn as_of_date(&self) -> String {
        self.as_of.format(AS_OF_DATE_FORMAT).to_string()
    }

    /// Base currency part of the pair code (`USD` for `USDMYR`).
    pub fn base_currency(&self) -> &str {
        self.pair_code.get(..3).unwrap_or(&self.pair_code)
    }

    /// Amount in home currency for `amount` units of the base currency.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.latest_rate
    }

    /// One-day change of the latest close against the previous close, in percent.
    pub fn percent_change(&self) -> f64 {
        (self.latest_rate - self.previous_rate) / self.previous_rate * 100.0
    }
}
