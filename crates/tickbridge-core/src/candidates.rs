//! Candidate symbol generation.
//!
//! Ordering encodes a deliberate priority: the exact input first, then cheap
//! heuristic exchange-suffix guesses, then provider-confirmed search matches.
//! Cheapest and most-likely-correct candidates are tried first by the
//! resolver.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::upstream::YahooClient;
use crate::Symbol;

/// Suffix variants for major non-US exchanges, appended when the input looks
/// like a bare US-style ticker: London, Xetra, Paris, Amsterdam, Milan,
/// Switzerland.
const EXCHANGE_SUFFIXES: [&str; 6] = [".L", ".DE", ".PA", ".AS", ".MI", ".SW"];

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Debug, Deserialize)]
struct SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
}

/// Ordered, deduplicated list of provider symbols to try for `symbol`.
/// The raw symbol is always first. Constructed fresh per request.
pub async fn generate_candidates(client: &YahooClient, symbol: &Symbol) -> Vec<Symbol> {
    let mut candidates = vec![symbol.clone()];

    if symbol.is_bare() {
        for suffix in EXCHANGE_SUFFIXES {
            if let Ok(variant) = Symbol::parse(&format!("{}{}", symbol.as_str(), suffix)) {
                candidates.push(variant);
            }
        }
    }

    // Search enrichment is best-effort; a failed lookup leaves the heuristic
    // variants in play.
    let search_url = YahooClient::search_url(symbol.as_str());
    match client.get_json::<SearchResponse>(&search_url).await {
        Ok(response) => {
            for quote in response.quotes {
                if let Some(Ok(parsed)) = quote.symbol.as_deref().map(Symbol::parse) {
                    candidates.push(parsed);
                }
            }
        }
        Err(error) => {
            debug!(%symbol, %error, "symbol search failed, continuing with heuristic candidates");
        }
    }

    dedup_preserving_order(candidates)
}

fn dedup_preserving_order(candidates: Vec<Symbol>) -> Vec<Symbol> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.as_str().to_owned()))
        .collect()
}
