use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::history::{ClosePoint, HistoricalPeriod, HistoryProvider};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "myrfx/1.0";

/// Pairs bar timestamps with their closes. Null closes are skipped, timestamps
/// are shifted into exchange-local time, and a later bar replaces an earlier
/// one on the same date.
fn extract_close_points(item: &ChartItem) -> Vec<ClosePoint> {
    let (Some(timestamps), Some(closes)) = (
        item.timestamp.as_ref(),
        item.indicators
            .as_ref()
            .and_then(|inds| inds.quote.first())
            .and_then(|q| q.close.as_ref()),
    ) else {
        return Vec::new();
    };

    let offset = item.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);

    let mut bars: Vec<(i64, ClosePoint)> = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| {
            let close = (*close).filter(|c| c.is_finite())?;
            let date = DateTime::from_timestamp(ts.checked_add(offset)?, 0)?.date_naive();
            Some((*ts, ClosePoint { date, close }))
        })
        .collect();

    bars.sort_by_key(|(ts, _)| *ts);
    let mut deduped: Vec<ClosePoint> = Vec::with_capacity(bars.len());
    for (_, point) in bars {
        match deduped.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => deduped.push(point),
        }
    }
    deduped
}

/// Daily close history from the Yahoo Finance chart API
pub struct YahooHistoryProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooHistoryProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(YahooHistoryProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Deserialize, Debug)]
struct YahooChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    result: Option<Vec<ChartItem>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChartItem {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[async_trait]
impl HistoryProvider for YahooHistoryProvider {
    #[instrument(
        name = "YahooHistoryFetch",
        skip(self),
        fields(symbol = %symbol, period = %period)
    )]
    async fn get_historical_closes(
        &self,
        symbol: &str,
        period: HistoricalPeriod,
    ) -> Result<Vec<ClosePoint>> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range={}",
            self.base_url,
            symbol,
            period.range_param()
        );
        debug!("Requesting close history from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {}", e, symbol))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error: {} for symbol: {}", status, symbol));
        }

        let text = response.text().await?;
        let data: YahooChartResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", symbol, e))?;

        if let Some(error) = data.chart.error {
            return Err(anyhow!(
                "Provider error for {}: {}",
                symbol,
                error
                    .description
                    .or(error.code)
                    .unwrap_or_else(|| "unknown".to_string())
            ));
        }

        let item = data
            .chart
            .result
            .and_then(|items| items.into_iter().next())
            .ok_or_else(|| anyhow!("No history found for symbol: {}", symbol))?;

        let points = extract_close_points(&item);
        debug!("Received {} daily closes", points.len());
        Ok(points)
    }
}
