use thiserror::Error;

use crate::Symbol;

/// Input validation errors exposed by `tickbridge-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
}

/// Upstream provider failure classification.
///
/// No retries happen at this layer. The resolver converts every variant into
/// "advance to the next candidate"; none of them reach the HTTP response
/// layer directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The provider answered with a non-2xx status.
    #[error("upstream returned HTTP {status}")]
    Http { status: u16 },

    /// Connection failure, DNS failure, or timeout.
    #[error("upstream network error: {0}")]
    Network(String),

    /// The response body is not valid JSON for the expected shape.
    #[error("upstream returned invalid JSON: {0}")]
    Parse(String),

    /// The payload parsed but carries no result envelope for this candidate.
    #[error("upstream payload has no result")]
    NoResult,
}

/// Candidate exhaustion: every variant of the requested symbol failed or
/// yielded nothing usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("yahoo: no quote for {symbol}")]
    NoQuote { symbol: Symbol },

    #[error("yahoo: no candles for {symbol}")]
    NoCandles { symbol: Symbol },
}
