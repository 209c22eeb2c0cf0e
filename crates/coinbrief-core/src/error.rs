use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for coinbrief-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or rejected provider credential
  #[error("API key error: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// The daily series has no entry for a date the change calculation needs
  #[error("No price data for {0}")]
  MissingDate(NaiveDate),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// A price that cannot take part in the change calculation
  #[error("Invalid price: {0}")]
  InvalidPrice(String),

  /// Provider rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// HTTP transport error or non-success status
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error payload returned by a data provider
  #[error("API error: {0}")]
  Api(String),

  /// SMS provider rejected a message
  #[error("SMS delivery error: {0}")]
  Sms(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for coinbrief-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_date_display() {
    let date = NaiveDate::from_ymd_opt(2021, 3, 29).unwrap();
    let err = Error::MissingDate(date);
    assert_eq!(err.to_string(), "No price data for 2021-03-29");
  }

  #[test]
  fn test_serde_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = parse_err.into();
    assert!(matches!(err, Error::Serde(_)));
    assert!(err.to_string().starts_with("Serialization error"));
  }
}
