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


//! 24-hour change calculation from two daily open prices.
//!
//! The result is `100 - today / yesterday * 100`, so a price that FELL gives a
//! positive number and a price that ROSE gives a negative one. Callers and the
//! message glyphs keep that convention as-is.

use chrono::NaiveDate;
use coinbrief_core::{Error, Result};
use coinbrief_models::crypto::{CryptoDaily, PriceSample};
use rust_decimal::Decimal;
use tracing::debug;

/// Decimal places kept in the percent change
pub const CHANGE_DECIMAL_PLACES: u32 = 2;

/// Both samples plus the change derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyChange {
  pub today: PriceSample,
  pub yesterday: PriceSample,
  pub percent: Decimal,
}

/// `100 - (today_open / yesterday_open) * 100`, rounded to 2 decimal places.
///
/// A zero `yesterday_open` is rejected with `Error::InvalidPrice`.
pub fn compute_change(today_open: Decimal, yesterday_open: Decimal) -> Result<Decimal> {
  if yesterday_open.is_zero() {
    return Err(Error::InvalidPrice("previous open price is zero".to_string()));
  }

  let overflow = || Error::InvalidPrice(format!("{} / {} overflows", today_open, yesterday_open));

  let ratio = today_open.checked_div(yesterday_open).ok_or_else(overflow)?;
  let scaled = ratio.checked_mul(Decimal::ONE_HUNDRED).ok_or_else(overflow)?;
  let change = Decimal::ONE_HUNDRED.checked_sub(scaled).ok_or_else(overflow)?;

  Ok(change.round_dp(CHANGE_DECIMAL_PLACES))
}

/// Open price in `market` on `date`
pub fn open_on(daily: &CryptoDaily, market: &str, date: NaiveDate) -> Result<PriceSample> {
  let bar = daily.bar_on(date).ok_or(Error::MissingDate(date))?;

  let raw = bar
    .open_in(market)
    .ok_or_else(|| Error::MissingField(format!("open ({}) on {}", market.to_uppercase(), date)))?;

  let open = raw
    .trim()
    .parse::<Decimal>()
    .map_err(|e| Error::Parse(format!("Invalid open price {:?} on {}: {}", raw, date, e)))?;

  Ok(PriceSample { date, open })
}

/// Change between `today`'s open and the previous day's open
pub fn change_for_day(daily: &CryptoDaily, market: &str, today: NaiveDate) -> Result<DailyChange> {
  let yesterday_date =
    today.pred_opt().ok_or_else(|| Error::Parse(format!("No day before {}", today)))?;

  let today = open_on(daily, market, today)?;
  let yesterday = open_on(daily, market, yesterday_date)?;
  let percent = compute_change(today.open, yesterday.open)?;

  debug!("Open {} on {} vs {} on {}: {}%", today.open, today.date, yesterday.open, yesterday.date, percent);

  Ok(DailyChange { today, yesterday, percent })
}
