//! Supported currency pairs, all quoted against the Ringgit

use anyhow::anyhow;
use std::fmt::Display;
use std::str::FromStr;

/// Home currency every pair is quoted in.
pub const HOME_CURRENCY: &str = "MYR";

/// Currency symbol used when rendering home currency amounts.
pub const HOME_CURRENCY_SYMBOL: &str = "RM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyPair {
    Usd,
    Sgd,
    Gbp,
    Eur,
    Aud,
    Jpy,
    Thb,
    Idr,
    Sar,
    Cny,
}

impl CurrencyPair {
    /// Every supported pair, in display order.
    pub const ALL: [CurrencyPair; 10] = [
        CurrencyPair::Usd,
        CurrencyPair::Sgd,
        CurrencyPair::Gbp,
        CurrencyPair::Eur,
        CurrencyPair::Aud,
        CurrencyPair::Jpy,
        CurrencyPair::Thb,
        CurrencyPair::Idr,
        CurrencyPair::Sar,
        CurrencyPair::Cny,
    ];

    /// ISO 4217 code of the base currency.
    pub fn base(&self) -> &'static str {
        match self {
            CurrencyPair::Usd => "USD",
            CurrencyPair::Sgd => "SGD",
            CurrencyPair::Gbp => "GBP",
            CurrencyPair::Eur => "EUR",
            CurrencyPair::Aud => "AUD",
            CurrencyPair::Jpy => "JPY",
            CurrencyPair::Thb => "THB",
            CurrencyPair::Idr => "IDR",
            CurrencyPair::Sar => "SAR",
            CurrencyPair::Cny => "CNY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyPair::Usd => "US Dollar",
            CurrencyPair::Sgd => "Singapore Dollar",
            CurrencyPair::Gbp => "British Pound",
            CurrencyPair::Eur => "Euro",
            CurrencyPair::Aud => "Australian Dollar",
            CurrencyPair::Jpy => "Japanese Yen",
            CurrencyPair::Thb => "Thai Baht",
            CurrencyPair::Idr => "Indonesian Rupiah",
            CurrencyPair::Sar => "Saudi Riyal",
            CurrencyPair::Cny => "Chinese Yuan",
        }
    }

    /// Pair code such as `USDMYR`.
    pub fn code(&self) -> String {
        format!("{}{}", self.base(), HOME_CURRENCY)
    }

    /// Label shown in pickers, e.g. `USD - US Dollar`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.base(), self.name())
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Accepts either the base code (`usd`) or the full pair code (`USDMYR`).
impl FromStr for CurrencyPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let base = upper.strip_suffix(HOME_CURRENCY).unwrap_or(&upper);
        CurrencyPair::ALL
            .into_iter()
            .find(|pair| pair.base() == base)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", s))
    }
}

/// Provider symbol for a pair code, following the Yahoo `=X` suffix convention.
pub fn provider_symbol(pair_code: &str) -> String {
    format!("{pair_code}=X")
}
