//! # coinbrief-models
//!
//! Data models for the three providers coinbrief talks to.
//!
//! This crate provides strongly-typed Rust structures for the AlphaVantage
//! digital currency daily series, the NewsAPI `everything` search and the
//! Twilio Messages resource, plus the outbound message types handed between
//! the composer and the SMS sender.
//!
//! ## Usage
//!
//! ```ignore
//! use coinbrief_models::crypto::CryptoDaily;
//! use coinbrief_models::news::NewsResponse;
//!
//! // Deserialize API responses
//! let daily: CryptoDaily = serde_json::from_str(&response_json)?;
//! let news: NewsResponse = serde_json::from_str(&news_json)?;
//! ```

#![warn(clippy::all)]

pub mod crypto;
pub mod news;
pub mod sms;

// Re-export all model types
pub use crypto::*;
pub use news::*;
pub use sms::*;
