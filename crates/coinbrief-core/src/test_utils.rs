//! Helpers shared by the test suites of the coinbrief-* crates

use crate::config::{ApiKeys, Config, Endpoints, PhoneNumbers, TwilioCredentials};

pub const TEST_SENDER: &str = "+15550001111";
pub const TEST_RECIPIENT: &str = "+15552223333";
pub const TEST_ACCOUNT_SID: &str = "AC_test_sid";
pub const TEST_AUTH_TOKEN: &str = "test_token";

/// Config with fake credentials whose providers all live under `base_url`
pub fn test_config(base_url: &str) -> Config {
  Config {
    api_keys: ApiKeys { alpha_vantage: "av_test_key".to_string(), news: "news_test_key".to_string() },
    twilio: TwilioCredentials {
      account_sid: TEST_ACCOUNT_SID.to_string(),
      auth_token: TEST_AUTH_TOKEN.to_string(),
    },
    phone_numbers: PhoneNumbers {
      sender: TEST_SENDER.to_string(),
      recipient: TEST_RECIPIENT.to_string(),
    },
    proxy: None,
    timeout_secs: 5,
    endpoints: Endpoints {
      alpha_vantage: base_url.to_string(),
      news: base_url.to_string(),
      twilio: base_url.to_string(),
    },
  }
}
