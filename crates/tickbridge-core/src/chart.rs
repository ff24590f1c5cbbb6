//! Historical chart fetch and normalization for one candidate symbol.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ChartSeries;
use crate::upstream::YahooClient;
use crate::{Symbol, UpstreamError};

// Array elements stay raw `Value`s: upstream payload irregularities are
// routine, and one ill-typed element must drop that position, not fail the
// whole payload.
#[derive(Debug, Default, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    chart: ChartNode,
}

#[derive(Debug, Default, Deserialize)]
struct ChartNode {
    #[serde(default)]
    result: Option<Vec<Option<ChartResult>>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<Value>,
    #[serde(default)]
    indicators: Indicators,
    #[serde(default)]
    meta: Meta,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteNode>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteNode {
    #[serde(default)]
    close: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<Value>,
}

/// Fetch one candidate's daily chart between `from_ts` and `to_ts` (unix
/// seconds) and normalize it. Fails with [`UpstreamError::NoResult`] when the
/// payload lacks a result envelope.
pub async fn fetch_chart(
    client: &YahooClient,
    symbol: &Symbol,
    from_ts: i64,
    to_ts: i64,
) -> Result<ChartSeries, UpstreamError> {
    let url = YahooClient::chart_url(symbol, from_ts, to_ts);
    let response: ChartResponse = client.get_json(&url).await?;

    let result = response
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .flatten()
        .ok_or(UpstreamError::NoResult)?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default()
        .close;

    Ok(normalize(result.timestamp, closes, result.meta.regular_market_price))
}

/// Walk the parallel arrays position by position, bounded by the shorter
/// one. A pair survives only when the timestamp is an integer and the close
/// is a number strictly greater than zero; everything else is dropped
/// silently.
fn normalize(timestamps: Vec<Value>, closes: Vec<Value>, reference: Option<Value>) -> ChartSeries {
    let mut out_timestamps = Vec::new();
    let mut out_closes = Vec::new();

    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        let (Some(ts), Some(close)) = (ts.as_i64(), close.as_f64()) else {
            continue;
        };
        if close > 0.0 {
            out_timestamps.push(ts);
            out_closes.push(close);
        }
    }

    let reference_price = reference
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|price| *price > 0.0);

    ChartSeries {
        timestamps: out_timestamps,
        closes: out_closes,
        reference_price,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn values(raw: Value) -> Vec<Value> {
        raw.as_array().expect("array").clone()
    }

    #[test]
    fn truncates_to_the_shorter_array() {
        let series = normalize(
            values(json!([1, 2, 3, 4])),
            values(json!([10.0, 11.0])),
            None,
        );

        assert_eq!(series.timestamps, vec![1, 2]);
        assert_eq!(series.closes, vec![10.0, 11.0]);
    }

    #[test]
    fn drops_non_positive_and_missing_closes() {
        let series = normalize(
            values(json!([1, 2, 3, 4, 5])),
            values(json!([10.0, 0.0, -3.5, null, 12.0])),
            None,
        );

        assert_eq!(series.timestamps, vec![1, 5]);
        assert_eq!(series.closes, vec![10.0, 12.0]);
        assert!(series.closes.iter().all(|close| *close > 0.0));
    }

    #[test]
    fn drops_type_mismatched_positions() {
        let series = normalize(
            values(json!([1, "two", 3, 4.5])),
            values(json!([10.0, 11.0, "twelve", 13.0])),
            None,
        );

        // Position 0 is the only one with an integer timestamp and a numeric
        // positive close.
        assert_eq!(series.timestamps, vec![1]);
        assert_eq!(series.closes, vec![10.0]);
    }

    #[test]
    fn reference_price_accepted_only_when_positive_number() {
        let positive = normalize(vec![], vec![], Some(json!(150.25)));
        assert_eq!(positive.reference_price, Some(150.25));

        let zero = normalize(vec![], vec![], Some(json!(0.0)));
        assert_eq!(zero.reference_price, None);

        let negative = normalize(vec![], vec![], Some(json!(-1.0)));
        assert_eq!(negative.reference_price, None);

        let ill_typed = normalize(vec![], vec![], Some(json!("150.25")));
        assert_eq!(ill_typed.reference_price, None);

        let absent = normalize(vec![], vec![], None);
        assert_eq!(absent.reference_price, None);
    }

    #[test]
    fn series_order_is_preserved_as_returned() {
        let series = normalize(
            values(json!([5, 3, 9])),
            values(json!([1.0, 2.0, 3.0])),
            None,
        );

        // Not re-sorted, even when upstream ordering looks odd.
        assert_eq!(series.timestamps, vec![5, 3, 9]);
    }
}
