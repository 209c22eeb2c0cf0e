//! HTTP transport layer shared by the provider clients

use coinbrief_core::{Config, Error, Result};
use reqwest::{Client, Proxy, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Longest body excerpt carried in error messages
const ERROR_SNIPPET_LEN: usize = 200;

/// Raw response: status plus the full body text
#[derive(Debug, Clone)]
pub struct RawResponse {
  /// HTTP status
  pub status: StatusCode,
  /// Body text
  pub body: String,
}

/// HTTP transport layer wrapping one `reqwest::Client`.
///
/// Every request is issued exactly once; there is no retry.
pub struct Transport {
  client: Client,
  timeout: Duration,
  proxied: bool,
}

impl Transport {
  /// Create a new transport with the configured timeout and optional HTTPS proxy
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let mut builder = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("coinbrief/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy_url) = &config.proxy {
      let proxy = Proxy::https(proxy_url)
        .map_err(|e| Error::Config(format!("Invalid PROXY {}: {}", proxy_url, e)))?;
      builder = builder.proxy(proxy);
    }

    let client =
      builder.build().map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout, proxied: config.proxy.is_some() })
  }

  /// Build `base` + `path` with the given query parameters
  pub fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let mut url =
      Url::parse(&joined).map_err(|e| Error::Config(format!("Invalid base URL {}: {}", base, e)))?;

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// GET `url` and return the body of a successful response.
  ///
  /// Non-success statuses become errors: 401/403 map to `ApiKey`, 429 to
  /// `RateLimit`, everything else to `Http`.
  pub async fn get_text(&self, url: Url) -> Result<String> {
    let response = self.send(self.client.get(url.clone()), &url).await?;

    if response.status.is_success() {
      Ok(response.body)
    } else {
      Err(status_error(response.status, &response.body))
    }
  }

  /// POST a form with basic auth and hand back the raw response whatever the status.
  pub async fn post_form(
    &self,
    url: Url,
    credentials: (&str, &str),
    form: &[(&str, &str)],
  ) -> Result<RawResponse> {
    let request = self
      .client
      .post(url.clone())
      .basic_auth(credentials.0, Some(credentials.1))
      .form(form);

    self.send(request, &url).await
  }

  async fn send(&self, request: RequestBuilder, url: &Url) -> Result<RawResponse> {
    // Query strings carry API keys, so only host and path are logged.
    debug!("Making request to: {}{}", url.host_str().unwrap_or_default(), url.path());

    let response = request.send().await.map_err(|e| {
      error!("Request to {} failed: {}", url.path(), e);
      Error::Http(format!("Request failed: {}", e.without_url()))
    })?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    debug!("Response status {} with {} bytes", status, body.len());

    Ok(RawResponse { status, body })
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Whether requests go through the configured proxy
  pub fn is_proxied(&self) -> bool {
    self.proxied
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("timeout", &self.timeout)
      .field("proxied", &self.proxied)
      .finish()
  }
}

/// Deserialize a response body, logging an excerpt when it does not match `T`
pub fn parse_json<T>(text: &str) -> Result<T>
where
  T: DeserializeOwned,
{
  serde_json::from_str::<T>(text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    error!("Response text (first 500 chars): {}", snippet(text, 500));
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(text, ERROR_SNIPPET_LEN)))
  })
}

/// Check for AlphaVantage error messages in a 200 response.
///
/// AlphaVantage reports bad keys, throttling and bad parameters in the body
/// of a successful HTTP response.
pub fn check_alpha_vantage_error(response_text: &str) -> Result<()> {
  let Ok(fields) = serde_json::from_str::<HashMap<String, serde_json::Value>>(response_text) else {
    return Ok(());
  };

  let message = |key: &str| fields.get(key).and_then(|v| v.as_str()).map(str::to_string);

  if let Some(msg) = message("Error Message") {
    if msg.contains("apikey") || msg.contains("API key") {
      return Err(Error::ApiKey(msg));
    }
    return Err(Error::Api(msg));
  }

  for key in ["Note", "Information"] {
    if let Some(msg) = message(key) {
      if msg.contains("API call frequency") || msg.contains("rate limit") {
        return Err(Error::RateLimit(msg));
      }
      if msg.contains("API key") || msg.contains("apikey") {
        return Err(Error::ApiKey(msg));
      }
      return Err(Error::Api(msg));
    }
  }

  Ok(())
}

fn status_error(status: StatusCode, body: &str) -> Error {
  let detail = format!("{}: {}", status, snippet(body, ERROR_SNIPPET_LEN));
  error!("Request failed with status: {}", status);

  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::ApiKey(detail),
    StatusCode::TOO_MANY_REQUESTS => Error::RateLimit(detail),
    _ => Error::Http(detail),
  }
}

fn snippet(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}
