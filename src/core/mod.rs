//! Core lookup logic and its abstractions

pub mod cache;
pub mod config;
pub mod fetcher;
pub mod history;
pub mod log;
pub mod pair;
pub mod quote;

// Re-export main types for cleaner imports
pub use cache::Cache;
pub use fetcher::{DataUnavailable, RateFetcher};
pub use history::{ClosePoint, HistoricalPeriod, HistoryProvider};
pub use pair::CurrencyPair;
pub use quote::RateQuote;
