//! # tickbridge-core
//!
//! Symbol resolution and market-data retrieval for the tickbridge proxy.
//!
//! Given an arbitrary user-supplied ticker, the core resolves it to an
//! ordered list of candidate provider symbols, queries the upstream provider
//! (Yahoo Finance) for each candidate in turn, and returns the first one
//! that yields usable data. The HTTP surface lives in `tickbridge-server`;
//! this crate holds everything with real logic.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`candidates`] | Candidate symbol generation (suffix variants + search) |
//! | [`chart`] | Historical chart fetch and lenient normalization |
//! | [`domain`] | Domain models (Symbol, ChartSeries, results) |
//! | [`error`] | Error taxonomy |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`resolver`] | Fallback orchestration over candidates |
//! | [`upstream`] | Yahoo endpoint client |
//!
//! ## Error Handling
//!
//! Transport and per-candidate provider failures ([`UpstreamError`]) never
//! escape the resolver: each one advances the fallback loop to the next
//! candidate. Only exhaustion ([`ResolveError`]) reaches callers.

pub mod candidates;
pub mod chart;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod resolver;
pub mod upstream;

pub use candidates::generate_candidates;
pub use chart::fetch_chart;
pub use domain::{CandlesResult, ChartSeries, QuoteResult, Symbol};
pub use error::{ResolveError, UpstreamError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};
pub use resolver::Resolver;
pub use upstream::{YahooClient, PROVIDER_NAME};
