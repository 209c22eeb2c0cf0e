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


//! The whole run: price → change → news → compose → send.

use crate::change::{change_for_day, DailyChange};
use crate::composer::compose_messages;
use crate::notifier::send_all;
use chrono::NaiveDate;
use coinbrief_client::{CoinBriefClient, MessageSender};
use coinbrief_core::Result;
use coinbrief_models::sms::{DeliveryReceipt, OutboundMessage};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub const DEFAULT_SYMBOL: &str = "BTC";
pub const DEFAULT_MARKET: &str = "USD";
pub const DEFAULT_TOPIC: &str = "bitcoin";
pub const DEFAULT_ARTICLE_COUNT: usize = 3;

/// What to track and report on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRequest {
  /// Asset symbol sent to the market-data provider
  pub symbol: String,

  /// Market currency the open prices are quoted in
  pub market: String,

  /// Keyword searched in news titles
  pub topic: String,

  /// Name printed (upper-cased) at the top of every message
  pub asset_name: String,

  /// How many of the most popular articles to send
  pub article_count: usize,

  /// Day whose open is compared with the previous day's
  pub today: NaiveDate,
}

impl DigestRequest {
  /// BTC in USD, three "bitcoin" articles
  pub fn for_day(today: NaiveDate) -> Self {
    Self {
      symbol: DEFAULT_SYMBOL.to_string(),
      market: DEFAULT_MARKET.to_string(),
      topic: DEFAULT_TOPIC.to_string(),
      asset_name: DEFAULT_TOPIC.to_string(),
      article_count: DEFAULT_ARTICLE_COUNT,
      today,
    }
  }
}

/// Everything computed before the first message goes out
#[derive(Debug, Clone)]
pub struct PreparedDigest {
  pub change: DailyChange,
  pub articles_fetched: usize,
  pub messages: Vec<OutboundMessage>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct DigestReport {
  pub percent_change: Decimal,
  pub articles_fetched: usize,
  pub receipts: Vec<DeliveryReceipt>,
}

/// Fetch prices and news and compose the messages, without sending anything.
///
/// The price lookup runs first, so a missing date fails the run before the
/// news provider is called.
#[instrument(skip(client, request), fields(symbol = %request.symbol, today = %request.today))]
pub async fn prepare(client: &CoinBriefClient, request: &DigestRequest) -> Result<PreparedDigest> {
  info!("Fetching 24hr {} pricing...", request.symbol);
  let daily = client.crypto().daily(&request.symbol, &request.market).await?;
  let change = change_for_day(&daily, &request.market, request.today)?;
  info!("{} change over 24hrs: {}%", request.symbol, change.percent);

  info!("Fetching {} {} news articles...", request.article_count, request.topic);
  let articles =
    client.news().top_articles(&request.topic, request.today, request.article_count).await?;

  let messages =
    compose_messages(&request.asset_name, change.percent, &articles, &client.config().phone_numbers);

  Ok(PreparedDigest { change, articles_fetched: articles.len(), messages })
}

/// Run the full digest and send one message per article through `sender`
pub async fn run<S>(client: &CoinBriefClient, sender: &S, request: &DigestRequest) -> Result<DigestReport>
where
  S: MessageSender + ?Sized,
{
  let prepared = prepare(client, request).await?;
  let receipts = send_all(sender, &prepared.messages).await?;

  Ok(DigestReport {
    percent_change: prepared.change.percent,
    articles_fetched: prepared.articles_fetched,
    receipts,
  })
}
