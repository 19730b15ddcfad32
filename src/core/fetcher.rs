//! Rate lookup with time-bounded memoization

use crate::core::cache::Cache;
use crate::core::history::{HistoricalPeriod, HistoryProvider};
use crate::core::pair::provider_symbol;
use crate::core::quote::RateQuote;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// How long a successful lookup is reused.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// The single failure a lookup can report. The cause is logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rate data for {pair_code} is unavailable")]
pub struct DataUnavailable {
    pub pair_code: String,
}

pub struct RateFetcher {
    provider: Arc<dyn HistoryProvider>,
    cache: Arc<dyn Cache<String, RateQuote>>,
    ttl: Duration,
}

impl RateFetcher {
    pub fn new(
        provider: Arc<dyn HistoryProvider>,
        cache: Arc<dyn Cache<String, RateQuote>>,
    ) -> Self {
        Self::with_ttl(provider, cache, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(
        provider: Arc<dyn HistoryProvider>,
        cache: Arc<dyn Cache<String, RateQuote>>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    #[instrument(name = "RateFetch", skip(self))]
    pub async fn fetch(
        &self,
        pair_code: &str,
        lookback: HistoricalPeriod,
    ) -> Result<RateQuote, DataUnavailable> {
        let key = format!("{pair_code}:{lookback}");
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let unavailable = || DataUnavailable {
            pair_code: pair_code.to_string(),
        };

        let symbol = provider_symbol(pair_code);
        let history = match self.provider.get_historical_closes(&symbol, lookback).await {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "History request failed for {}", symbol);
                return Err(unavailable());
            }
        };

        let points = history.len();
        let quote = RateQuote::from_history(pair_code, history).ok_or_else(|| {
            warn!("Unusable history for {}: {} point(s)", symbol, points);
            unavailable()
        })?;

        debug!(
            latest = quote.latest_rate,
            previous = quote.previous_rate,
            "Fetched quote as of {}",
            quote.as_of_date()
        );
        self.cache.put(key, quote.clone(), Some(self.ttl)).await;
        Ok(quote)
    }
}
