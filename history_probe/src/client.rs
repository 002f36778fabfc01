//! Blocking HTTP client for the history function.
//!
//! Wraps `reqwest::blocking::Client`, posts the JSON envelope and collects the
//! reply into a `ResponseEnvelope`. Any failure below the HTTP layer is
//! surfaced as `ProbeError::Transport`; HTTP error statuses are not errors.
use history_common::{HistoryRequest, ProbeError, ResponseEnvelope, Result};
use log::{debug, error, info};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::Url;
use std::time::Duration;

/// Client bound to a single endpoint.
pub struct HistoryClient {
    inner: Client,
    url: Url,
}

impl HistoryClient {
    /// Creates a client for `url` with the library defaults and no request timeout.
    pub fn new(url: &str) -> Result<Self> {
        Self::from_builder(url, Client::builder())
    }

    /// Creates a client from a prepared builder. The timeout is always cleared.
    pub fn from_builder(url: &str, builder: ClientBuilder) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| {
            ProbeError::InvalidRequest(format!("invalid endpoint URL {}: {}", url, e))
        })?;
        let inner = builder
            .timeout(Option::<Duration>::None)
            .build()
            .map_err(transport)?;
        Ok(Self { inner, url })
    }

    /// Posts `request` and returns the reply, whatever its status.
    pub fn send(&self, request: &HistoryRequest) -> Result<ResponseEnvelope> {
        let body = request.to_json_bytes()?;
        info!(
            "POST {} ticker={} range={}..{}",
            self.url,
            request.ticker(),
            request.start_date(),
            request.end_date()
        );

        let response = self
            .inner
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| {
                error!("Request to {} failed: {}", self.url, e);
                transport(e)
            })?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        debug!("Received status {} with {} headers", status, headers.len());

        let text = response.text().map_err(|e| {
            error!("Reading response body failed: {}", e);
            transport(e)
        })?;
        debug!("Body length: {} bytes", text.len());

        Ok(ResponseEnvelope::new(status, headers, text))
    }
}

fn transport(err: reqwest::Error) -> ProbeError {
    ProbeError::Transport(err.to_string())
}

/// Header name/value pairs in wire order. Non-UTF-8 values are decoded lossily.
///
/// Names come out lowercase: the `http` crate normalises them on parse, so the
/// server's original spelling (`Content-Type`) is not recoverable here.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = match value.to_str() {
                Ok(v) => v.to_string(),
                Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}
