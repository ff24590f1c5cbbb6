//! Fallback orchestration over the candidate list.
//!
//! Both entry points drive the same loop: try each candidate strictly in
//! order, swallow per-candidate failures, stop at the first candidate whose
//! data meets the success predicate. Candidate attempts are sequential, not
//! parallel: the predicate short-circuits further work and upstream rate
//! limits make concurrent fan-out undesirable.

use time::OffsetDateTime;
use tracing::debug;

use crate::candidates::generate_candidates;
use crate::chart::fetch_chart;
use crate::domain::{CandlesResult, QuoteResult};
use crate::upstream::{YahooClient, PROVIDER_NAME};
use crate::{ResolveError, Symbol};

/// Live-quote lookback window.
const QUOTE_LOOKBACK_SECS: i64 = 14 * 86_400;

/// Stateless resolution service. Holds only the upstream client; every
/// request gets a fresh candidate list and shares nothing with other
/// requests.
#[derive(Clone)]
pub struct Resolver {
    client: YahooClient,
}

impl Resolver {
    pub fn new(client: YahooClient) -> Self {
        Self { client }
    }

    /// Resolve a live quote: first candidate with a positive price wins.
    /// The chart's reference price is preferred over the last close.
    pub async fn resolve_quote(&self, symbol: &Symbol) -> Result<QuoteResult, ResolveError> {
        let to_ts = unix_now();
        let from_ts = to_ts - QUOTE_LOOKBACK_SECS;

        for candidate in generate_candidates(&self.client, symbol).await {
            let series = match fetch_chart(&self.client, &candidate, from_ts, to_ts).await {
                Ok(series) => series,
                Err(error) => {
                    debug!(%candidate, %error, "quote candidate failed, trying next");
                    continue;
                }
            };

            let price = series.reference_price.or_else(|| series.last_close());
            if let Some(price) = price.filter(|price| *price > 0.0) {
                return Ok(QuoteResult {
                    price,
                    resolved_symbol: candidate,
                    provider: PROVIDER_NAME.to_owned(),
                });
            }

            debug!(%candidate, "quote candidate yielded no usable price, trying next");
        }

        Err(ResolveError::NoQuote {
            symbol: symbol.clone(),
        })
    }

    /// Resolve historical candles from `from_ts` (unix seconds) through now:
    /// first candidate with a non-empty normalized series wins.
    pub async fn resolve_candles(
        &self,
        symbol: &Symbol,
        from_ts: i64,
    ) -> Result<CandlesResult, ResolveError> {
        let to_ts = unix_now();

        for candidate in generate_candidates(&self.client, symbol).await {
            match fetch_chart(&self.client, &candidate, from_ts, to_ts).await {
                Ok(series) if !series.closes.is_empty() => {
                    return Ok(CandlesResult {
                        status: String::from("ok"),
                        timestamps: series.timestamps,
                        closes: series.closes,
                        resolved_symbol: candidate,
                        provider: PROVIDER_NAME.to_owned(),
                    });
                }
                Ok(_) => {
                    debug!(%candidate, "candles candidate returned an empty series, trying next");
                }
                Err(error) => {
                    debug!(%candidate, %error, "candles candidate failed, trying next");
                }
            }
        }

        Err(ResolveError::NoCandles {
            symbol: symbol.clone(),
        })
    }
}

fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
