use myrfx::core::{CurrencyPair, HistoricalPeriod};
use std::fs;
use tracing::{error, info};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod test_utils {
    use super::*;

    /// USDMYR bars for 2024-01-01 and 2024-01-02 (23:00 UTC stamps)
    pub const USDMYR_RESPONSE: &str = r#"{
        "chart": {
            "result": [{
                "meta": { "currency": "MYR", "symbol": "USDMYR=X", "gmtoffset": 0 },
                "timestamp": [1704150000, 1704236400],
                "indicators": { "quote": [{ "close": [4.70, 4.72] }] }
            }],
            "error": null
        }
    }"#;

    pub async fn create_mock_server(
        symbol: &str,
        status: u16,
        mock_response: &str,
        expected_calls: u64,
    ) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v8/finance/chart/{symbol}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .and(query_param("interval", "1d"))
            .and(query_param("range", "1mo"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .expect(expected_calls)
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(dir: &tempfile::TempDir, base_url: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        let config_content = format!(
            r#"
providers:
  yahoo:
    base_url: {base_url}
theme: light
lookback: 1M
"#
        );
        fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

#[test_log::test(tokio::test)]
async fn test_check_command_with_mock() {
    let mock_server =
        test_utils::create_mock_server("USDMYR=X", 200, test_utils::USDMYR_RESPONSE, 1).await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = myrfx::run_command(
        myrfx::AppCommand::Check {
            pair: CurrencyPair::Usd,
            amount: 100.0,
        },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_ok(), "Check failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_check_command_reports_unavailable() {
    let not_found = r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#;
    let mock_server = test_utils::create_mock_server("USDMYR=X", 404, not_found, 1).await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = myrfx::run_command(
        myrfx::AppCommand::Check {
            pair: CurrencyPair::Usd,
            amount: 1.0,
        },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Rate data for USDMYR is unavailable"
    );
}

#[test_log::test(tokio::test)]
async fn test_fetcher_caches_within_ttl() {
    // The mock verifies on drop that only one request arrived
    let mock_server =
        test_utils::create_mock_server("USDMYR=X", 200, test_utils::USDMYR_RESPONSE, 1).await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());
    let config = myrfx::core::config::AppConfig::load_from_path(&config_path).unwrap();

    let fetcher = myrfx::build_fetcher(&config).unwrap();
    let first = fetcher
        .fetch("USDMYR", HistoricalPeriod::OneMonth)
        .await
        .unwrap();
    let second = fetcher
        .fetch("USDMYR", HistoricalPeriod::OneMonth)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.latest_rate, 4.72);
    assert_eq!(first.previous_rate, 4.70);
    assert_eq!(first.as_of_date(), "02 Jan 2024");
    assert_eq!(format!("{:.2}", first.convert(100.0)), "472.00");
    assert_eq!(format!("{:+.2}%", first.percent_change()), "+0.43%");
}

#[test_log::test(tokio::test)]
async fn test_fetcher_unknown_pair_is_unavailable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/XYZMYR=X"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());
    let config = myrfx::core::config::AppConfig::load_from_path(&config_path).unwrap();

    let fetcher = myrfx::build_fetcher(&config).unwrap();
    let err = fetcher
        .fetch("XYZMYR", HistoricalPeriod::OneMonth)
        .await
        .unwrap_err();
    assert_eq!(err.pair_code, "XYZMYR");
}

#[test_log::test(tokio::test)]
async fn test_pairs_command() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");

    let result = myrfx::run_command(
        myrfx::AppCommand::Pairs,
        Some(config_path.to_str().unwrap()),
        Some(myrfx::core::config::Theme::Dark),
    )
    .await;
    assert!(result.is_ok());
}

#[test_log::test(tokio::test)]
async fn test_missing_config_path_fails() {
    let result = myrfx::run_command(
        myrfx::AppCommand::Pairs,
        Some("/definitely/not/here/config.yaml"),
        None,
    )
    .await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file")
    );
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live Yahoo Finance API"]
async fn test_real_yahoo_history_api() {
    use myrfx::core::HistoryProvider;
    use myrfx::providers::yahoo_finance::{DEFAULT_BASE_URL, YahooHistoryProvider};

    let provider = YahooHistoryProvider::new(DEFAULT_BASE_URL).unwrap();
    let symbol = "USDMYR=X";
    info!(?symbol, "Fetching close history from Yahoo Finance");

    match provider
        .get_historical_closes(symbol, HistoricalPeriod::OneMonth)
        .await
    {
        Ok(points) => {
            info!(count = points.len(), "Received close history");
            assert!(points.len() >= 2, "Expected at least two daily closes");
            assert!(points.windows(2).all(|w| w[0].date < w[1].date));
            assert!(points.iter().all(|p| p.close > 0.0));
        }
        Err(e) => {
            error!("History request failed: {e}\n{e:?}");
            panic!("History request failed: {e}");
        }
    }
}
