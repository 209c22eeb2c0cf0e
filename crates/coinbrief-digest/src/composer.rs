//! Turns the percent change and the selected articles into SMS bodies.

use coinbrief_core::PhoneNumbers;
use coinbrief_models::news::Article;
use coinbrief_models::sms::OutboundMessage;
use rust_decimal::Decimal;

/// Shown when the computed change is above zero
pub const UP_GLYPH: &str = "🔺";

/// Shown for zero and below
pub const DOWN_GLYPH: &str = "🔻";

/// Glyph for a percent change: strictly positive gets 🔺, everything else 🔻
pub fn direction_glyph(percent_change: Decimal) -> &'static str {
  if percent_change > Decimal::ZERO {
    UP_GLYPH
  } else {
    DOWN_GLYPH
  }
}

/// `"🔺5.00% in last 24hrs"`
pub fn change_line(percent_change: Decimal) -> String {
  format!("{}{:.2}% in last 24hrs", direction_glyph(percent_change), percent_change)
}

/// Body for one article. A missing description leaves the brief empty.
pub fn compose_body(asset: &str, percent_change: Decimal, article: &Article) -> String {
  format!(
    "\n\n{}: {}\n\nHeadline: {}\n\nBrief: {}\n\nLink: {}",
    asset.to_uppercase(),
    change_line(percent_change),
    article.title,
    article.description.as_deref().unwrap_or_default(),
    article.url
  )
}

/// One message per article, in article order, all from the sender to the recipient
pub fn compose_messages(
  asset: &str,
  percent_change: Decimal,
  articles: &[Article],
  numbers: &PhoneNumbers,
) -> Vec<OutboundMessage> {
  articles
    .iter()
    .map(|article| OutboundMessage {
      body: compose_body(asset, percent_change, article),
      from: numbers.sender.clone(),
      to: numbers.recipient.clone(),
    })
    .collect()
}
