//! Market-data endpoints: quote and candles.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tickbridge_core::{CandlesResult, QuoteResult, Symbol};
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::{ApiError, ApiResult};
use crate::routes::AppState;

/// Candles window start used when the caller omits `start`.
const DEFAULT_START: &str = "2026-01-30";

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandlesParams {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    start: Option<String>,
}

/// GET /api/quote?symbol=<S>
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuoteParams>,
) -> ApiResult<Json<QuoteResult>> {
    let symbol = parse_symbol(params.symbol.as_deref())?;
    let quote = state.resolver.resolve_quote(&symbol).await?;
    Ok(Json(quote))
}

/// GET /api/candles?symbol=<S>&start=<YYYY-MM-DD>
pub async fn get_candles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CandlesParams>,
) -> ApiResult<Json<CandlesResult>> {
    let symbol = parse_symbol(params.symbol.as_deref())?;
    let from_ts = resolve_start(params.start.as_deref())?;

    let candles = state.resolver.resolve_candles(&symbol, from_ts).await?;
    Ok(Json(candles))
}

/// An absent or blank `start` falls back to the default window; only a
/// present, malformed value is the caller's mistake.
fn resolve_start(raw: Option<&str>) -> Result<i64, ApiError> {
    let start = raw
        .map(str::trim)
        .filter(|start| !start.is_empty())
        .unwrap_or(DEFAULT_START);
    parse_start_date(start)
}

fn parse_symbol(raw: Option<&str>) -> Result<Symbol, ApiError> {
    raw.map(Symbol::parse)
        .transpose()
        .map_err(|_| ApiError::BadRequest(String::from("symbol is required")))?
        .ok_or_else(|| ApiError::BadRequest(String::from("symbol is required")))
}

/// `YYYY-MM-DD`, interpreted as UTC midnight.
fn parse_start_date(start: &str) -> Result<i64, ApiError> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(start, format)
        .map_err(|_| ApiError::BadRequest(String::from("start must be YYYY-MM-DD")))?;

    Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT)
        .assume_utc()
        .unix_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_date_as_utc_midnight() {
        let ts = parse_start_date("2026-01-30").expect("valid date");
        assert_eq!(ts, 1_769_731_200);
    }

    #[test]
    fn rejects_malformed_start_date() {
        assert!(parse_start_date("bad-date").is_err());
        assert!(parse_start_date("2026-1-30").is_err());
        assert!(parse_start_date("").is_err());
        assert!(parse_start_date("2026-01-30T00:00:00Z").is_err());
    }

    #[test]
    fn absent_or_blank_start_resolves_to_the_default_window() {
        let default_ts = parse_start_date(DEFAULT_START).expect("valid default");

        assert_eq!(resolve_start(None).expect("default"), default_ts);
        assert_eq!(resolve_start(Some("")).expect("default"), default_ts);
        assert_eq!(resolve_start(Some("   ")).expect("default"), default_ts);
        assert!(resolve_start(Some("bad-date")).is_err());
    }

    #[test]
    fn missing_or_blank_symbol_is_rejected() {
        assert!(parse_symbol(None).is_err());
        assert!(parse_symbol(Some("  ")).is_err());
        assert_eq!(
            parse_symbol(Some(" msft ")).expect("valid").as_str(),
            "MSFT"
        );
    }
}
