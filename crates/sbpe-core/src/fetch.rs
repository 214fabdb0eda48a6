//! Blocking JSON fetches against the upstream APIs.
//!
//! Uses the curl crate (libcurl) with per-call connect/total timeouts and a
//! fixed pause after each successful call to respect upstream usage policy.
//! No retries, no backoff: a failed call surfaces as a `FetchError` and the
//! caller decides whether that is fatal or just skips the item.

use serde_json::Value;
use std::thread;
use std::time::Duration;
use url::Url;

use crate::config::SbpeConfig;

/// Error from a single HTTP call (transport, status, or body shape).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A 2xx response whose body carries `"success": false`.
    #[error("API reported failure: {}", .cause.as_deref().unwrap_or("no cause given"))]
    Unsuccessful { cause: Option<String> },
    /// Endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// True when the failure means "the key cannot see this data" rather
    /// than a transient or transport problem.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            FetchError::Http(403) => true,
            FetchError::Unsuccessful { cause: Some(cause) } => {
                let cause = cause.to_ascii_lowercase();
                cause.contains("key") || cause.contains("access")
            }
            _ => false,
        }
    }
}

/// Builds `<base>/<path>?key=<key>` with proper query encoding.
pub fn build_url(base: &str, path: &str, key: &str) -> Result<String, FetchError> {
    let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?;
    url.query_pairs_mut().append_pair("key", key);
    Ok(url.into())
}

/// One configured HTTP client. Every call blocks the current thread; the
/// whole run is strictly sequential, so no handle reuse or pooling.
#[derive(Debug, Clone)]
pub struct Fetcher {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    rate_limit: Duration,
}

impl Fetcher {
    pub fn from_config(cfg: &SbpeConfig) -> Self {
        Self {
            user_agent: format!("sbpe/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            rate_limit: Duration::from_millis(cfg.rate_limit_ms),
        }
    }

    /// Performs one GET and parses the body as JSON.
    ///
    /// Follows redirects. A non-2xx status, unparsable body, or a body with
    /// a top-level `"success": false` all count as failures. On success the
    /// configured rate-limit pause is applied before returning.
    pub fn get_json(&self, url: &str, context: &str) -> Result<Value, FetchError> {
        tracing::debug!("GET {} ({})", url, context);

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let value: Value = serde_json::from_slice(&body)?;
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let cause = value
                .get("cause")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(FetchError::Unsuccessful { cause });
        }

        if !self.rate_limit.is_zero() {
            thread::sleep(self.rate_limit);
        }
        Ok(value)
    }

    /// Connectivity preflight: one bodyless request against `url`.
    ///
    /// Only transport-level failures count; the status code is ignored, the
    /// point is to fail fast when the host is unreachable.
    pub fn probe(&self, url: &str) -> Result<(), FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.nobody(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.perform()?;
        Ok(())
    }
}
