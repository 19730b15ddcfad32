pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::cli::check::CheckRequest;
use crate::cli::ui::Palette;
use crate::core::config::{AppConfig, Theme};
use crate::core::{CurrencyPair, RateFetcher, RateQuote};
use crate::providers::yahoo_finance::YahooHistoryProvider;
use crate::store::MemoryCache;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Look up one pair and convert `amount` of it
    Check { pair: CurrencyPair, amount: f64 },
    /// Prompt for lookups until the user quits
    Interactive,
    /// List supported pairs
    Pairs,
}

/// Wires the Yahoo provider and a process-wide memory cache into a fetcher.
pub fn build_fetcher(config: &AppConfig) -> Result<RateFetcher> {
    let provider = YahooHistoryProvider::new(config.yahoo_base_url())?;
    let cache = Arc::new(MemoryCache::<String, RateQuote>::new());
    Ok(RateFetcher::with_ttl(
        Arc::new(provider),
        cache,
        config.cache_ttl(),
    ))
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    theme: Option<Theme>,
) -> Result<()> {
    info!("myrfx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let palette = Palette::new(theme.unwrap_or(config.theme));

    match command {
        AppCommand::Pairs => {
            cli::pairs::run(&palette);
            Ok(())
        }
        AppCommand::Check { pair, amount } => {
            let fetcher = build_fetcher(&config)?;
            let request = CheckRequest { pair, amount };
            cli::check::run(&fetcher, &request, config.lookback, &palette).await?;
            Ok(())
        }
        AppCommand::Interactive => {
            let fetcher = build_fetcher(&config)?;
            cli::interactive::run(&fetcher, config.lookback, &palette).await
        }
    }
}
