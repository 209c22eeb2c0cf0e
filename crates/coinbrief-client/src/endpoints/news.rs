//! News search endpoints (NewsAPI)
//!
//! This module wraps NewsAPI's `/v2/everything` search:
//! - Title-restricted queries (`qInTitle`)
//! - A lower bound on publication date (`from`)
//! - Provider-side sorting (`sortBy`)
//!
//! Truncation to the top N articles happens client-side.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{parse_json, Transport};
use chrono::NaiveDate;
use coinbrief_core::{Config, Error, Result};
use coinbrief_models::news::*;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// NewsAPI error codes that mean the key itself was rejected
const KEY_ERROR_CODES: [&str; 4] = ["apiKeyDisabled", "apiKeyExhausted", "apiKeyInvalid", "apiKeyMissing"];

/// How NewsAPI should order results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
  /// Articles more closely related to the query first
  Relevancy,
  /// Articles from popular sources and publishers first
  #[default]
  Popularity,
  /// Newest articles first
  PublishedAt,
}

impl std::fmt::Display for SortBy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SortBy::Relevancy => write!(f, "relevancy"),
      SortBy::Popularity => write!(f, "popularity"),
      SortBy::PublishedAt => write!(f, "publishedAt"),
    }
  }
}

/// News search endpoints
pub struct NewsEndpoints {
  transport: Arc<Transport>,
  base_url: String,
  api_key: String,
}

impl NewsEndpoints {
  /// Create a new news endpoints instance
  pub fn new(transport: Arc<Transport>, config: &Config) -> Self {
    Self { transport, base_url: config.endpoints.news.clone(), api_key: config.api_keys.news.clone() }
  }

  /// Search articles whose title matches `topic`, published on or after `from`
  ///
  /// # Arguments
  ///
  /// * `topic` - Keyword matched against article titles (e.g., "bitcoin")
  /// * `from` - Earliest publication date
  /// * `sort_by` - Provider-side ordering
  #[instrument(skip(self))]
  pub async fn everything(&self, topic: &str, from: NaiveDate, sort_by: SortBy) -> Result<NewsResponse> {
    let from = from.format("%Y-%m-%d").to_string();
    let sort_by = sort_by.to_string();
    let url = Transport::build_url(
      self.base_url(),
      "v2/everything",
      &[
        ("qInTitle", topic),
        ("from", from.as_str()),
        ("sortBy", sort_by.as_str()),
        ("apiKey", self.api_key.as_str()),
      ],
    )?;

    let text = self.transport().get_text(url).await?;
    let response: NewsResponse = parse_json(&text)?;

    if response.is_error() {
      let code = response.code.unwrap_or_default();
      let message = response.message.unwrap_or_default();
      return Err(if KEY_ERROR_CODES.contains(&code.as_str()) {
        Error::ApiKey(format!("{}: {}", code, message))
      } else {
        Error::Api(format!("{}: {}", code, message))
      });
    }

    Ok(response)
  }

  /// The `count` most popular articles about `topic` published since `from`
  ///
  /// Returns fewer than `count` articles if fewer are available.
  #[instrument(skip(self))]
  pub async fn top_articles(&self, topic: &str, from: NaiveDate, count: usize) -> Result<Vec<Article>> {
    let response = self.everything(topic, from, SortBy::Popularity).await?;
    let available = response.articles.len();

    let articles = response.top(count);
    if articles.len() < count {
      warn!("Requested {} articles about {}, only {} available", count, topic, available);
    }
    info!("Selected {} {} articles", articles.len(), topic);

    Ok(articles)
  }
}

impl_endpoint_base!(NewsEndpoints);
