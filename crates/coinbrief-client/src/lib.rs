//! # coinbrief-client
//!
//! HTTP clients for the three providers behind a coinbrief run.
//!
//! ## Features
//!
//! - **AlphaVantage**: daily digital currency series (`DIGITAL_CURRENCY_DAILY`)
//! - **NewsAPI**: title search with popularity sorting and client-side truncation
//! - **Twilio**: SMS delivery behind the [`MessageSender`] trait
//! - **Configurable**: timeout, proxy and base URLs come from coinbrief-core's `Config`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coinbrief_client::{CoinBriefClient, MessageSender};
//! use coinbrief_core::Config;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinBriefClient::new(Config::from_env()?)?;
//!
//!     let prices = client.crypto().daily("BTC", "USD").await?;
//!     let news = client.news().top_articles("bitcoin", Utc::now().date_naive(), 3).await?;
//!     println!("{} bars, {} articles via {}", prices.time_series.len(), news.len(), client.twilio().provider_name());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, coinbrief_core::Error>`. Nothing is retried:
//! the first failure is returned to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod sms;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinBriefClient;
pub use coinbrief_core::{Config, Error, Result};
pub use coinbrief_models::*;
pub use sms::{MessageSender, TwilioSender};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{crypto::CryptoEndpoints, news::NewsEndpoints};
