//! HTTP verb wrappers over a shared transport.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::address::format_address;
use crate::error::{Error, check_ok};

/// JSON object payload for POST/DELETE request bodies.
pub type Payload = Map<String, Value>;

/// Thin HTTP helper wrapping a shared [`reqwest::Client`].
///
/// Addresses are normalized on every call, so `localhost:11434/api/tags`
/// and `http://localhost:11434/api/tags/` hit the same endpoint. Non-success
/// responses become [`Error::Api`]; everything else is left to the
/// transport.
///
/// # Example
///
/// ```no_run
/// use ndjson_client::Client;
///
/// # async fn run() -> Result<(), ndjson_client::Error> {
/// let client = Client::new();
/// let response = client.get("localhost:11434/api/tags").await?;
/// println!("{}", response.text().await?);
/// # Ok(()) }
/// ```
pub struct Client {
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl Client {
    /// Create a client with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Build on an existing [`reqwest::Client`].
    ///
    /// Proxy, TLS, and timeout configuration stay with the transport; this
    /// layer adds none of its own.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Issue a GET request and validate the response status.
    pub async fn get(&self, address: &str) -> Result<reqwest::Response, Error> {
        self.request(Method::GET, address, None).await
    }

    /// Issue a POST request, serializing `payload` as a JSON body when
    /// present.
    pub async fn post(
        &self,
        address: &str,
        payload: Option<&Payload>,
    ) -> Result<reqwest::Response, Error> {
        self.request(Method::POST, address, payload).await
    }

    /// Issue a DELETE request, serializing `payload` as a JSON body when
    /// present.
    pub async fn delete(
        &self,
        address: &str,
        payload: Option<&Payload>,
    ) -> Result<reqwest::Response, Error> {
        self.request(Method::DELETE, address, payload).await
    }

    async fn request(
        &self,
        method: Method,
        address: &str,
        payload: Option<&Payload>,
    ) -> Result<reqwest::Response, Error> {
        let url = format_address(address);
        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        check_ok(response).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
