//! # coinbrief-digest
//!
//! The business side of a coinbrief run: compute the 24-hour open-price change
//! of an asset, pair it with the most popular related articles and text one
//! message per article to a fixed recipient.
//!
//! ```ignore
//! use coinbrief_client::CoinBriefClient;
//! use coinbrief_digest::{run, DigestRequest};
//!
//! let client = CoinBriefClient::new(config)?;
//! let report = run(&client, &client.twilio(), &DigestRequest::for_day(today)).await?;
//! ```

pub mod change;
pub mod composer;
pub mod digest;
pub mod notifier;

pub use change::{change_for_day, compute_change, DailyChange};
pub use coinbrief_client::MessageSender;
pub use composer::{compose_messages, direction_glyph};
pub use digest::{prepare, run, DigestReport, DigestRequest, PreparedDigest};
pub use notifier::send_all;
