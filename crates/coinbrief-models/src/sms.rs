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


//! Outbound SMS messages and the Twilio Messages resource

use serde::{Deserialize, Serialize};

/// One text message ready to be handed to an SMS provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
  /// Message text
  pub body: String,

  /// Sender number
  pub from: String,

  /// Recipient number
  pub to: String,
}

/// What the SMS provider reported for one send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
  /// Provider message id
  pub sid: String,

  /// Delivery status, e.g. "queued"
  pub status: String,
}

/// Twilio `Messages.json` create response (the subset coinbrief reads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwilioMessage {
  pub sid: String,

  pub status: String,

  #[serde(default)]
  pub to: Option<String>,

  #[serde(default)]
  pub from: Option<String>,

  #[serde(default)]
  pub body: Option<String>,

  #[serde(default)]
  pub num_segments: Option<String>,

  #[serde(default)]
  pub error_code: Option<i64>,

  #[serde(default)]
  pub error_message: Option<String>,

  #[serde(default)]
  pub date_created: Option<String>,
}

/// Twilio REST error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwilioError {
  #[serde(default)]
  pub code: Option<i64>,

  pub message: String,

  #[serde(default)]
  pub more_info: Option<String>,

  #[serde(default)]
  pub status: Option<u16>,
}

impl From<TwilioMessage> for DeliveryReceipt {
  fn from(message: TwilioMessage) -> Self {
    Self { sid: message.sid, status: message.status }
  }
}

impl std::fmt::Display for TwilioError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.code {
      Some(code) => write!(f, "{} (code {})", self.message, code),
      None => write!(f, "{}", self.message),
    }
  }
}
