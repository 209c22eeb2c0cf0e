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


//! Models for the AlphaVantage `DIGITAL_CURRENCY_DAILY` response

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Date key format used by the daily series
pub const SERIES_DATE_FORMAT: &str = "%Y-%m-%d";

/// Cryptocurrency daily time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoDaily {
  /// Metadata; an unreadable block is treated as absent
  #[serde(
    rename = "Meta Data",
    default,
    deserialize_with = "lenient_metadata",
    skip_serializing_if = "Option::is_none"
  )]
  pub meta_data: Option<CryptoMetadata>,

  /// Time series data keyed by ISO date
  #[serde(rename = "Time Series (Digital Currency Daily)")]
  pub time_series: BTreeMap<String, CryptoDailyBar>,
}

/// One day of the series.
///
/// Field names carry the market currency (`"1a. open (USD)"`), so the bar is
/// kept as a raw map and read through `open_in`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CryptoDailyBar {
  #[serde(flatten)]
  pub fields: BTreeMap<String, String>,
}

/// Cryptocurrency metadata. Informational only, every field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CryptoMetadata {
  #[serde(rename = "1. Information", default)]
  pub information: Option<String>,

  #[serde(rename = "2. Digital Currency Code", default)]
  pub digital_currency_code: Option<String>,

  #[serde(rename = "3. Digital Currency Name", default)]
  pub digital_currency_name: Option<String>,

  #[serde(rename = "4. Market Code", default)]
  pub market_code: Option<String>,

  #[serde(rename = "5. Market Name", default)]
  pub market_name: Option<String>,

  #[serde(rename = "6. Last Refreshed", default)]
  pub last_refreshed: Option<String>,

  #[serde(rename = "7. Time Zone", alias = "9. Time Zone", default)]
  pub time_zone: Option<String>,
}

/// Open price of the asset on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSample {
  pub date: NaiveDate,
  pub open: Decimal,
}

impl CryptoDaily {
  /// Bar for `date`, if the provider has published it
  pub fn bar_on(&self, date: NaiveDate) -> Option<&CryptoDailyBar> {
    self.time_series.get(&date.format(SERIES_DATE_FORMAT).to_string())
  }
}

impl CryptoDailyBar {
  /// Raw open price quoted in `market`.
  ///
  /// Falls back to the single-currency `"1. open"` layout.
  pub fn open_in(&self, market: &str) -> Option<&str> {
    let key = format!("1a. open ({})", market.to_uppercase());
    self.fields.get(&key).or_else(|| self.fields.get("1. open")).map(String::as_str)
  }
}

fn lenient_metadata<'de, D>(deserializer: D) -> Result<Option<CryptoMetadata>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
