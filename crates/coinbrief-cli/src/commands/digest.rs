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


use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use coinbrief_client::CoinBriefClient;
use coinbrief_core::Config;
use coinbrief_digest::digest::{DEFAULT_ARTICLE_COUNT, DEFAULT_MARKET, DEFAULT_SYMBOL, DEFAULT_TOPIC};
use coinbrief_digest::{prepare, run, DigestRequest};
use tracing::info;

#[derive(Args, Debug)]
pub struct DigestArgs {
  /// Asset symbol to price
  #[arg(long, default_value = DEFAULT_SYMBOL)]
  pub symbol: String,

  /// Market currency of the open price
  #[arg(long, default_value = DEFAULT_MARKET)]
  pub market: String,

  /// Keyword searched in news titles; also names the asset in messages
  #[arg(long, default_value = DEFAULT_TOPIC)]
  pub topic: String,

  /// Number of articles to send
  #[arg(long, default_value_t = DEFAULT_ARTICLE_COUNT)]
  pub articles: usize,

  /// Day to report on (YYYY-MM-DD); defaults to today
  #[arg(long)]
  pub date: Option<NaiveDate>,

  /// Compose and print the messages without sending them
  #[arg(long)]
  pub dry_run: bool,
}

impl DigestArgs {
  fn into_request(self, today: NaiveDate) -> DigestRequest {
    DigestRequest {
      symbol: self.symbol,
      market: self.market,
      asset_name: self.topic.clone(),
      topic: self.topic,
      article_count: self.articles,
      today: self.date.unwrap_or(today),
    }
  }
}

pub async fn execute(args: DigestArgs, config: Config) -> Result<()> {
  let dry_run = args.dry_run;
  let request = args.into_request(Local::now().date_naive());
  let client = CoinBriefClient::new(config).context("Failed to build provider clients")?;

  if dry_run {
    let prepared = prepare(&client, &request).await?;
    info!("Dry run: {} messages composed, none sent", prepared.messages.len());
    for message in &prepared.messages {
      println!("To {}:{}\n", message.to, message.body);
    }
    return Ok(());
  }

  let sender = client.twilio();
  let report = run(&client, &sender, &request)
    .await
    .with_context(|| format!("{} digest for {} failed", request.symbol, request.today))?;

  for receipt in &report.receipts {
    println!("Message Status: {}", receipt.status);
  }
  info!(
    "{}: {}% change, {} articles, {} messages sent",
    request.symbol,
    report.percent_change,
    report.articles_fetched,
    report.receipts.len()
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args() -> DigestArgs {
    DigestArgs {
      symbol: "ETH".to_string(),
      market: "EUR".to_string(),
      topic: "ethereum".to_string(),
      articles: 2,
      date: None,
      dry_run: false,
    }
  }

  #[test]
  fn test_request_uses_today_without_date() {
    let today = NaiveDate::from_ymd_opt(2021, 3, 29).unwrap();
    let request = args().into_request(today);

    assert_eq!(request.today, today);
    assert_eq!(request.symbol, "ETH");
    assert_eq!(request.market, "EUR");
    assert_eq!(request.asset_name, "ethereum");
    assert_eq!(request.article_count, 2);
  }

  #[test]
  fn test_request_prefers_explicit_date() {
    let today = NaiveDate::from_ymd_opt(2021, 3, 29).unwrap();
    let chosen = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
    let request = DigestArgs { date: Some(chosen), ..args() }.into_request(today);

    assert_eq!(request.today, chosen);
  }
}
