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


//! SMS delivery: the `MessageSender` seam and its Twilio implementation

use crate::transport::{parse_json, Transport};
use async_trait::async_trait;
use coinbrief_core::{Config, Error, Result};
use coinbrief_models::sms::{DeliveryReceipt, OutboundMessage, TwilioError, TwilioMessage};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Anything that can deliver one text message.
///
/// The digest runner only talks to this trait, so tests can swap in a stub
/// that never touches the network.
#[async_trait]
pub trait MessageSender: Send + Sync {
  /// Send one message and report the provider's delivery status.
  async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt>;

  /// Get the name of this provider.
  fn provider_name(&self) -> &'static str;
}

/// Twilio Programmable Messaging sender
pub struct TwilioSender {
  transport: Arc<Transport>,
  base_url: String,
  account_sid: String,
  auth_token: String,
}

impl TwilioSender {
  /// Create a sender using the Twilio credentials from `config`
  pub fn new(transport: Arc<Transport>, config: &Config) -> Self {
    Self {
      transport,
      base_url: config.endpoints.twilio.clone(),
      account_sid: config.twilio.account_sid.clone(),
      auth_token: config.twilio.auth_token.clone(),
    }
  }

  fn messages_path(&self) -> String {
    format!("2010-04-01/Accounts/{}/Messages.json", self.account_sid)
  }
}

#[async_trait]
impl MessageSender for TwilioSender {
  #[instrument(skip(self, message), fields(to = %message.to, body_len = message.body.len()))]
  async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt> {
    let url = Transport::build_url(&self.base_url, &self.messages_path(), &[])?;

    let response = self
      .transport
      .post_form(
        url,
        (self.account_sid.as_str(), self.auth_token.as_str()),
        &[("From", message.from.as_str()), ("To", message.to.as_str()), ("Body", message.body.as_str())],
      )
      .await?;

    if !response.status.is_success() {
      error!("Twilio rejected message with status {}", response.status);
      let detail = match serde_json::from_str::<TwilioError>(&response.body) {
        Ok(twilio_error) => twilio_error.to_string(),
        Err(_) => format!("HTTP {}", response.status),
      };
      return Err(Error::Sms(detail));
    }

    let created: TwilioMessage = parse_json(&response.body)?;
    debug!("Twilio accepted message {} ({})", created.sid, created.status);

    Ok(created.into())
  }

  fn provider_name(&self) -> &'static str {
    "twilio"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use coinbrief_core::test_utils::{test_config, TEST_ACCOUNT_SID};

  #[test]
  fn test_messages_path() {
    let config = test_config("https://api.twilio.test");
    let sender = TwilioSender::new(Arc::new(Transport::new(&config).unwrap()), &config);

    assert_eq!(sender.messages_path(), format!("2010-04-01/Accounts/{}/Messages.json", TEST_ACCOUNT_SID));
    assert_eq!(sender.provider_name(), "twilio");
  }
}
