//! Digital currency endpoints (AlphaVantage)

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{check_alpha_vantage_error, parse_json, Transport};
use coinbrief_core::{Config, FuncType, Result};
use coinbrief_models::crypto::*;
use std::sync::Arc;
use tracing::{info, instrument};

/// Cryptocurrency endpoints (AlphaVantage)
pub struct CryptoEndpoints {
  transport: Arc<Transport>,
  base_url: String,
  api_key: String,
}

impl CryptoEndpoints {
  /// Create a new crypto endpoints instance
  pub fn new(transport: Arc<Transport>, config: &Config) -> Self {
    Self {
      transport,
      base_url: config.endpoints.alpha_vantage.clone(),
      api_key: config.api_keys.alpha_vantage.clone(),
    }
  }

  /// Get daily cryptocurrency time series data
  ///
  /// # Arguments
  ///
  /// * `symbol` - The cryptocurrency symbol (e.g., "BTC", "ETH")
  /// * `market` - The market currency (e.g., "USD", "CNY")
  ///
  /// # Examples
  ///
  /// ```rust,ignore
  /// let data = client.crypto().daily("BTC", "USD").await?;
  /// for (date, bar) in &data.time_series {
  ///     println!("{}: {:?}", date, bar.open_in("USD"));
  /// }
  /// ```
  #[instrument(skip(self))]
  pub async fn daily(&self, symbol: &str, market: &str) -> Result<CryptoDaily> {
    let function = FuncType::CryptoDaily.to_string();
    let url = Transport::build_url(
      self.base_url(),
      "query",
      &[
        ("function", function.as_str()),
        ("symbol", symbol),
        ("market", market),
        ("apikey", self.api_key.as_str()),
      ],
    )?;

    let text = self.transport().get_text(url).await?;
    check_alpha_vantage_error(&text)?;

    let daily: CryptoDaily = parse_json(&text)?;
    info!("Fetched {} daily bars for {}/{}", daily.time_series.len(), symbol, market);

    Ok(daily)
  }
}

impl_endpoint_base!(CryptoEndpoints);
