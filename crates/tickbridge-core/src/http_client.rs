//! HTTP transport abstraction.
//!
//! The upstream client talks to the provider through the [`HttpClient`]
//! trait so the whole resolution pipeline runs offline in tests.
//! [`ReqwestHttpClient`] is the production transport;
//! [`ScriptedHttpClient`] serves canned responses and records every request.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// HTTP request envelope used by upstream transport calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: 20_000,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error: connection failure, DNS failure, or timeout.
/// Upstream HTTP statuses are not errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract. Implementations must be `Send + Sync`; one instance
/// is shared across all concurrently handled inbound requests.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production HTTP client backed by reqwest. The inner `reqwest::Client`
/// holds the connection pool and is safe to share across requests.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Arc::new(reqwest::Client::new()),
        }
    }

    /// Wrap a pre-configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let timeout = std::time::Duration::from_millis(request.timeout_ms);
            builder = builder.timeout(timeout);

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("request timeout: {}", e))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {}", e))
                } else {
                    HttpError::new(format!("request failed: {}", e))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {}", e)))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Deterministic offline transport for tests: canned responses matched by
/// URL fragment (registration order, first match wins), plus a recorded log
/// of every request in call order.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Mutex<Vec<(String, Result<HttpResponse, HttpError>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for any URL containing `fragment`.
    pub fn respond(self, fragment: impl Into<String>, response: HttpResponse) -> Self {
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .push((fragment.into(), Ok(response)));
        self
    }

    /// Serve a 200 JSON body for any URL containing `fragment`.
    pub fn respond_json(self, fragment: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(fragment, HttpResponse::ok_json(body))
    }

    /// Serve an empty body with `status` for any URL containing `fragment`.
    pub fn respond_status(self, fragment: impl Into<String>, status: u16) -> Self {
        self.respond(
            fragment,
            HttpResponse {
                status,
                body: String::new(),
            },
        )
    }

    /// Fail at the transport layer for any URL containing `fragment`.
    pub fn fail(self, fragment: impl Into<String>, error: HttpError) -> Self {
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .push((fragment.into(), Err(error)));
        self
    }

    /// Requests seen so far, in call order, with headers and timeout intact.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        let result = self
            .routes
            .lock()
            .expect("routes lock poisoned")
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, result)| result.clone());

        Box::pin(async move {
            result.unwrap_or_else(|| {
                Err(HttpError::new(format!(
                    "no scripted response for {}",
                    request.url
                )))
            })
        })
    }
}
