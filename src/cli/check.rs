use super::chart::render_line_chart;
use super::ui::{self, Palette, StyleType};
use crate::core::pair::{HOME_CURRENCY, HOME_CURRENCY_SYMBOL};
use crate::core::{CurrencyPair, DataUnavailable, HistoricalPeriod, RateFetcher, RateQuote};
use comfy_table::Cell;
use tracing::info;

/// Smallest amount accepted for conversion.
pub const MIN_AMOUNT: f64 = 0.01;

const CHART_HEIGHT: usize = 10;

/// A single user-triggered lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckRequest {
    pub pair: CurrencyPair,
    pub amount: f64,
}

/// Parses a user-entered amount to two decimals, rejecting anything below the
/// minimum once rounded.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let amount: f64 = input
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| format!("Invalid amount: {input}"))?;
    let amount = (amount * 100.0).round() / 100.0;
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(format!("Amount must be at least {MIN_AMOUNT:.2}"));
    }
    Ok(amount)
}

/// Fetches the pair's quote and prints either the full result or the failure
/// message.
pub async fn run(
    fetcher: &RateFetcher,
    request: &CheckRequest,
    lookback: HistoricalPeriod,
    palette: &Palette,
) -> Result<RateQuote, DataUnavailable> {
    let pair_code = request.pair.code();
    info!(pair = %pair_code, amount = request.amount, "Checking latest rate");

    let spinner = ui::new_spinner(&format!("Checking {pair_code} rate..."));
    let result = fetcher.fetch(&pair_code, lookback).await;
    spinner.finish_and_clear();

    match &result {
        Ok(quote) => println!("{}", render_quote(quote, request.amount, lookback, palette)),
        Err(e) => println!("{}", render_unavailable(e, palette)),
    }
    result
}

pub fn render_quote(
    quote: &RateQuote,
    amount: f64,
    lookback: HistoricalPeriod,
    palette: &Palette,
) -> String {
    let base = quote.base_currency();
    let mut out = Vec::new();

    out.push(palette.style_text("Conversion result", StyleType::Title));
    out.push(format!(
        "  {} {}",
        palette.style_text(
            &format!("{} {base} in {HOME_CURRENCY}:", ui::format_money(amount)),
            StyleType::Label
        ),
        palette.style_text(
            &format!(
                "{HOME_CURRENCY_SYMBOL} {}",
                ui::format_money(quote.convert(amount))
            ),
            StyleType::Value
        )
    ));
    out.push(format!(
        "  {} {}  {} {}",
        palette.style_text(&format!("1 {base} ="), StyleType::Label),
        palette.style_text(
            &format!("{HOME_CURRENCY_SYMBOL} {}", ui::format_rate(quote.latest_rate)),
            StyleType::Value
        ),
        palette.style_change(quote.percent_change()),
        palette.style_text("(1 day)", StyleType::Subtle)
    ));
    out.push(format!(
        "  {} {}  {}",
        palette.style_text("Data date:", StyleType::Label),
        quote.as_of_date(),
        palette.style_text("(New York/global market close)", StyleType::Subtle)
    ));

    out.push(String::new());
    out.push(palette.style_text(
        &format!(
            "{}-day trend ({base} vs {HOME_CURRENCY})",
            lookback.to_duration().num_days()
        ),
        StyleType::Title,
    ));
    let closes: Vec<f64> = quote.history.iter().map(|p| p.close).collect();
    for line in render_line_chart(&closes, CHART_HEIGHT, ui::terminal_width()) {
        out.push(palette.style_chart_line(&line));
    }
    if let (Some(first), Some(last)) = (quote.history.first(), quote.history.last()) {
        out.push(palette.style_text(
            &format!("  {} to {}", first.date, last.date),
            StyleType::Subtle,
        ));
    }

    out.push(String::new());
    out.push(palette.style_text("Raw data (newest first)", StyleType::Title));
    out.push(history_table(quote, palette).to_string());

    out.join("\n")
}

fn history_table(quote: &RateQuote, palette: &Palette) -> comfy_table::Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        palette.header_cell("Date"),
        palette.header_cell(&format!("Rate ({HOME_CURRENCY})")),
    ]);
    for point in quote.history.iter().rev() {
        table.add_row(vec![
            Cell::new(point.date.format("%Y-%m-%d").to_string()),
            ui::right_aligned_cell(ui::format_rate(point.close)),
        ]);
    }
    table
}

pub fn render_unavailable(error: &DataUnavailable, palette: &Palette) -> String {
    format!(
        "{}\n{}",
        palette.style_text(
            &format!(
                "Sorry, {} data cannot be retrieved right now. Try another currency or retry.",
                error.pair_code
            ),
            StyleType::Error
        ),
        palette.style_text(
            "Tip: Yahoo Finance sometimes limits access when rates are refreshed too often.",
            StyleType::Subtle
        )
    )
}
