/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client handing out endpoint groups and the SMS sender

use crate::endpoints::{crypto::CryptoEndpoints, news::NewsEndpoints};
use crate::sms::TwilioSender;
use crate::transport::Transport;
use coinbrief_core::{Config, Result};
use std::sync::Arc;

/// Main coinbrief API client
///
/// Provides access to the market-data, news and SMS providers through
/// organized endpoint modules. All of them share one HTTP transport, so the
/// timeout and proxy settings apply everywhere.
///
/// # Examples
///
/// ```ignore
/// use coinbrief_client::CoinBriefClient;
/// use coinbrief_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = CoinBriefClient::new(config)?;
///
///     let prices = client.crypto().daily("BTC", "USD").await?;
///     println!("{} daily bars", prices.time_series.len());
///
///     Ok(())
/// }
/// ```
pub struct CoinBriefClient {
  config: Arc<Config>,
  transport: Arc<Transport>,
}

impl CoinBriefClient {
  /// Create a new client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing credentials, endpoints and timeout
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created (e.g. a malformed proxy URL).
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { config: Arc::new(config), transport })
  }

  /// Get access to cryptocurrency endpoints
  pub fn crypto(&self) -> CryptoEndpoints {
    CryptoEndpoints::new(self.transport.clone(), &self.config)
  }

  /// Get access to news endpoints
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.transport.clone(), &self.config)
  }

  /// Twilio sender bound to the configured account
  pub fn twilio(&self) -> TwilioSender {
    TwilioSender::new(self.transport.clone(), &self.config)
  }

  /// The configuration this client was built from
  pub fn config(&self) -> &Config {
    &self.config
  }
}

impl std::fmt::Debug for CoinBriefClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinBriefClient").field("transport", &self.transport).finish()
  }
}
