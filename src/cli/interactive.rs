//! Single-screen loop: each entered line triggers one lookup

use super::check::{self, CheckRequest};
use super::ui::{self, Palette, StyleType};
use crate::core::{CurrencyPair, HistoricalPeriod, RateFetcher};
use anyhow::{Context, Result, anyhow};
use std::io::Write;

#[derive(Debug, PartialEq)]
pub enum Input {
    Check(CheckRequest),
    ListPairs,
    Help,
    Quit,
    Empty,
}

/// Parses `<CUR> [amount]`. Without an amount the previous one is reused.
pub fn parse_input(line: &str, last_amount: f64) -> Result<Input> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Ok(Input::Empty);
    };

    match first.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        "pairs" | "list" => return Ok(Input::ListPairs),
        "help" | "?" => return Ok(Input::Help),
        _ => {}
    }

    let pair: CurrencyPair = first.parse()?;
    let amount = match parts.next() {
        Some(raw) => check::parse_amount(raw).map_err(|e| anyhow!(e))?,
        None => last_amount,
    };
    if parts.next().is_some() {
        return Err(anyhow!("Expected: <currency> [amount]"));
    }
    Ok(Input::Check(CheckRequest { pair, amount }))
}

fn help_text(palette: &Palette) -> String {
    [
        palette.style_text("Check the latest daily rate against MYR", StyleType::Title),
        "  <currency> [amount]   e.g. `USD 100` or `sgd`".to_string(),
        "  pairs                 list supported currencies".to_string(),
        "  q                     quit".to_string(),
    ]
    .join("\n")
}

pub async fn run(fetcher: &RateFetcher, lookback: HistoricalPeriod, palette: &Palette) -> Result<()> {
    println!("{}", help_text(palette));

    let stdin = std::io::stdin();
    let mut amount = 1.0;

    loop {
        print!("{} ", palette.style_text(">", StyleType::Label));
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match parse_input(&line, amount) {
            Ok(Input::Quit) => break,
            Ok(Input::Empty) => continue,
            Ok(Input::Help) => println!("{}", help_text(palette)),
            Ok(Input::ListPairs) => super::pairs::run(palette),
            Ok(Input::Check(request)) => {
                amount = request.amount;
                // Failures are already rendered; the loop carries on
                let _ = check::run(fetcher, &request, lookback, palette).await;
                ui::print_separator();
            }
            Err(e) => println!("{}", palette.style_text(&e.to_string(), StyleType::Error)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_amount() {
        assert_eq!(
            parse_input("usd 100", 1.0).unwrap(),
            Input::Check(CheckRequest {
                pair: CurrencyPair::Usd,
                amount: 100.0
            })
        );
    }

    #[test]
    fn test_parse_check_reuses_amount() {
        assert_eq!(
            parse_input("  SGDMYR ", 250.0).unwrap(),
            Input::Check(CheckRequest {
                pair: CurrencyPair::Sgd,
                amount: 250.0
            })
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("", 1.0).unwrap(), Input::Empty);
        assert_eq!(parse_input("q", 1.0).unwrap(), Input::Quit);
        assert_eq!(parse_input("PAIRS", 1.0).unwrap(), Input::ListPairs);
        assert_eq!(parse_input("help", 1.0).unwrap(), Input::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_input("xyz 10", 1.0).unwrap_err().to_string(),
            "Unsupported currency: xyz"
        );
        assert_eq!(
            parse_input("usd 0", 1.0).unwrap_err().to_string(),
            "Amount must be at least 0.01"
        );
        assert!(parse_input("usd 10 20", 1.0).is_err());
    }
}
