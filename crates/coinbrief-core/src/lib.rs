pub mod config;
pub mod error;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{ApiKeys, Config, Endpoints, PhoneNumbers, TwilioCredentials};
pub use error::{Error, Result};

/// The AlphaVantage API functions coinbrief calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  /// Daily OHLCV series for a digital currency in a given market
  CryptoDaily,
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FuncType::CryptoDaily => write!(f, "DIGITAL_CURRENCY_DAILY"),
    }
  }
}

/// Base URL for AlphaVantage API (the `/query` path is appended by the transport)
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

/// Base URL for NewsAPI
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// Base URL for the Twilio REST API
pub const TWILIO_BASE_URL: &str = "https://api.twilio.com";

/// Request timeout used when `COINBRIEF_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_func_type_display() {
    assert_eq!(FuncType::CryptoDaily.to_string(), "DIGITAL_CURRENCY_DAILY");
  }
}
