//! Historical close-price abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum HistoricalPeriod {
    #[serde(rename = "5D")]
    FiveDays,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Display for HistoricalPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HistoricalPeriod::FiveDays => "5D",
                HistoricalPeriod::OneMonth => "1M",
                HistoricalPeriod::ThreeMonths => "3M",
                HistoricalPeriod::SixMonths => "6M",
                HistoricalPeriod::OneYear => "1Y",
            }
        )
    }
}

impl HistoricalPeriod {
    pub fn to_duration(&self) -> Duration {
        match self {
            HistoricalPeriod::FiveDays => Duration::days(5),
            HistoricalPeriod::OneMonth => Duration::days(30),
            HistoricalPeriod::ThreeMonths => Duration::days(90),
            HistoricalPeriod::SixMonths => Duration::days(180),
            HistoricalPeriod::OneYear => Duration::days(365),
        }
    }

    /// Value of the Yahoo chart API `range` parameter.
    pub fn range_param(&self) -> &'static str {
        match self {
            HistoricalPeriod::FiveDays => "5d",
            HistoricalPeriod::OneMonth => "1mo",
            HistoricalPeriod::ThreeMonths => "3mo",
            HistoricalPeriod::SixMonths => "6mo",
            HistoricalPeriod::OneYear => "1y",
        }
    }
}

impl FromStr for HistoricalPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "5D" => Ok(HistoricalPeriod::FiveDays),
            "1M" => Ok(HistoricalPeriod::OneMonth),
            "3M" => Ok(HistoricalPeriod::ThreeMonths),
            "6M" => Ok(HistoricalPeriod::SixMonths),
            "1Y" => Ok(HistoricalPeriod::OneYear),
            _ => Err(anyhow::anyhow!("Invalid historical period: {}", s)),
        }
    }
}

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Returns daily closes for `symbol` over `period` in chronological order.
    async fn get_historical_closes(
        &self,
        symbol: &str,
        period: HistoricalPeriod,
    ) -> Result<Vec<ClosePoint>>;
}
