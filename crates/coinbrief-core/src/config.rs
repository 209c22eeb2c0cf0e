//! Configuration management for coinbrief
//!
//! Values are read from the process environment after seeding it from a
//! `.env` file (if one exists). They are grouped the same way the secrets file
//! groups them: `API_KEYS`, `TWILIO`, `PHONE_NUMBERS` and `PROXIES`.

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Provider API keys (`API_KEYS` section)
#[derive(Clone, Deserialize, Serialize)]
pub struct ApiKeys {
  /// AlphaVantage API key
  pub alpha_vantage: String,

  /// NewsAPI key
  pub news: String,
}

/// Twilio account credentials (`TWILIO` section)
#[derive(Clone, Deserialize, Serialize)]
pub struct TwilioCredentials {
  /// Account SID, also the basic-auth user name
  pub account_sid: String,

  /// Auth token, the basic-auth password
  pub auth_token: String,
}

/// Earlier spelling of `RECIPIENT_PHONE_NUMBER`, still accepted
const LEGACY_RECIPIENT_KEY: &str = "RECIPENT_PHONE_NUMBER";

/// Sender and recipient numbers (`PHONE_NUMBERS` section)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneNumbers {
  /// Twilio number messages are sent from
  pub sender: String,

  /// The single number every message goes to
  pub recipient: String,
}

/// Provider base URLs, overridable so tests can point at a mock server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Endpoints {
  pub alpha_vantage: String,
  pub news: String,
  pub twilio: String,
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      alpha_vantage: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
      news: crate::NEWS_API_BASE_URL.to_string(),
      twilio: crate::TWILIO_BASE_URL.to_string(),
    }
  }
}

/// Main configuration struct, built once at startup and passed by reference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  pub api_keys: ApiKeys,

  pub twilio: TwilioCredentials,

  pub phone_numbers: PhoneNumbers,

  /// Optional HTTPS proxy applied to every provider request
  pub proxy: Option<String>,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  pub endpoints: Endpoints,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build configuration from an arbitrary key lookup.
  ///
  /// Empty values are treated as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let api_key = |key: &str| get(key).ok_or_else(|| Error::ApiKey(format!("{} not set", key)));
    let required = |key: &str| get(key).ok_or_else(|| Error::Config(format!("{} not set", key)));

    let api_keys =
      ApiKeys { alpha_vantage: api_key("ALPHAVANTAGE_API_KEY")?, news: api_key("NEWSORG_API_KEY")? };

    let twilio = TwilioCredentials {
      account_sid: api_key("TWILIO_SID")?,
      auth_token: api_key("TWILIO_TOKEN")?,
    };

    let phone_numbers = PhoneNumbers {
      sender: required("TWILIO_NUMBER")?,
      // Older secrets files carry the misspelled RECIPENT_PHONE_NUMBER key.
      recipient: get("RECIPIENT_PHONE_NUMBER")
        .or_else(|| get(LEGACY_RECIPIENT_KEY))
        .ok_or_else(|| Error::Config("RECIPIENT_PHONE_NUMBER not set".to_string()))?,
    };

    let proxy = get("PROXY");

    let timeout_secs = match get("COINBRIEF_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse()
        .map_err(|_| Error::Config("Invalid COINBRIEF_TIMEOUT_SECS".to_string()))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let defaults = Endpoints::default();
    let endpoints = Endpoints {
      alpha_vantage: get("AV_BASE_URL").unwrap_or(defaults.alpha_vantage),
      news: get("NEWS_BASE_URL").unwrap_or(defaults.news),
      twilio: get("TWILIO_BASE_URL").unwrap_or(defaults.twilio),
    };

    Ok(Config { api_keys, twilio, phone_numbers, proxy, timeout_secs, endpoints })
  }
}

impl fmt::Debug for ApiKeys {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ApiKeys").field("alpha_vantage", &"***").field("news", &"***").finish()
  }
}

impl fmt::Debug for TwilioCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TwilioCredentials")
      .field("account_sid", &self.account_sid)
      .field("auth_token", &"***")
      .finish()
  }
}
