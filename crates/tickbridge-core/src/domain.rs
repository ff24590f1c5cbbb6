//! Request-scoped domain models. Nothing here outlives a single inbound
//! request, and none of it is shared across requests.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Normalized market symbol/ticker.
///
/// Deliberately loose: beyond non-empty, trimmed, and uppercased, anything
/// goes. Upstream search results include tokens like `^GSPC`, `EURUSD=X`,
/// and `BRK-B` that a stricter ticker grammar would reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A bare US-style ticker carries neither an exchange suffix (`.L`)
    /// nor a market prefix (`LSE:`).
    pub fn is_bare(&self) -> bool {
        !self.0.contains('.') && !self.0.contains(':')
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

/// Normalized daily chart for one candidate symbol.
///
/// `timestamps` and `closes` are parallel arrays, time-ascending as returned
/// upstream (never re-sorted). The reference price is the provider's latest
/// known price, independent of the series, and is only present when numeric
/// and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub timestamps: Vec<i64>,
    pub closes: Vec<f64>,
    pub reference_price: Option<f64>,
}

impl ChartSeries {
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

/// Final answer for a quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Latest price. Serialized as `c`, the field name the dashboard reads.
    #[serde(rename = "c")]
    pub price: f64,
    pub resolved_symbol: Symbol,
    pub provider: String,
}

/// Final answer for a candles request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesResult {
    pub status: String,
    pub timestamps: Vec<i64>,
    pub closes: Vec<f64>,
    pub resolved_symbol: Symbol,
    pub provider: String,
}
