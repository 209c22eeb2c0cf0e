use chrono::NaiveDate;
use coinbrief_client::{CoinBriefClient, Error, MessageSender, OutboundMessage};
use coinbrief_core::test_utils::{test_config, TEST_ACCOUNT_SID, TEST_AUTH_TOKEN, TEST_RECIPIENT, TEST_SENDER};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn crypto_daily_body() -> serde_json::Value {
  json!({
    "Meta Data": {
      "1. Information": "Daily Prices and Volumes for Digital Currency",
      "2. Digital Currency Code": "BTC",
      "3. Digital Currency Name": "Bitcoin",
      "4. Market Code": "USD",
      "5. Market Name": "United States Dollar",
      "6. Last Refreshed": "2021-03-29 00:00:00",
      "7. Time Zone": "UTC"
    },
    "Time Series (Digital Currency Daily)": {
      "2021-03-29": { "1a. open (USD)": "19000.00000000", "4a. close (USD)": "19100.00000000" },
      "2021-03-28": { "1a. open (USD)": "20000.00000000", "4a. close (USD)": "19000.00000000" }
    }
  })
}

fn march(day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(2021, 3, day).unwrap()
}

fn client_for(server: &MockServer) -> CoinBriefClient {
  CoinBriefClient::new(test_config(&server.uri())).unwrap()
}

#[tokio::test]
async fn crypto_daily_sends_fixed_parameters() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("function", "DIGITAL_CURRENCY_DAILY"))
    .and(query_param("symbol", "BTC"))
    .and(query_param("market", "USD"))
    .and(query_param("apikey", "av_test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(crypto_daily_body()))
    .expect(1)
    .mount(&server)
    .await;

  let daily = client_for(&server).crypto().daily("BTC", "USD").await.unwrap();

  assert_eq!(daily.time_series.len(), 2);
  assert_eq!(daily.bar_on(march(29)).and_then(|b| b.open_in("USD")), Some("19000.00000000"));
}

#[tokio::test]
async fn crypto_daily_non_success_status_is_http_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
    .expect(1)
    .mount(&server)
    .await;

  let result = client_for(&server).crypto().daily("BTC", "USD").await;

  match result {
    Err(Error::Http(msg)) => assert!(msg.contains("503")),
    other => panic!("Expected Http error, got {:?}", other),
  }
}

#[tokio::test]
async fn crypto_daily_error_payload_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"Error Message": "Invalid API call. Please retry or visit the documentation"})),
    )
    .mount(&server)
    .await;

  let result = client_for(&server).crypto().daily("NOPE", "USD").await;
  assert!(matches!(result, Err(Error::Api(_))));
}

#[tokio::test]
async fn news_top_articles_truncates_client_side() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .and(query_param("qInTitle", "bitcoin"))
    .and(query_param("from", "2021-03-29"))
    .and(query_param("sortBy", "popularity"))
    .and(query_param("apiKey", "news_test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": "ok",
      "totalResults": 4,
      "articles": [
        {"title": "one", "description": "d1", "url": "https://n/1"},
        {"title": "two", "description": null, "url": "https://n/2"},
        {"title": "three", "description": "d3", "url": "https://n/3"},
        {"title": "four", "description": "d4", "url": "https://n/4"}
      ]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let articles = client_for(&server).news().top_articles("bitcoin", march(29), 3).await.unwrap();

  let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
  assert_eq!(titles, vec!["one", "two", "three"]);
  assert_eq!(articles[1].description, None);
}

#[tokio::test]
async fn news_with_fewer_articles_than_requested() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": "ok",
      "totalResults": 1,
      "articles": [{"title": "only", "description": "d", "url": "https://n/only"}]
    })))
    .mount(&server)
    .await;

  let articles = client_for(&server).news().top_articles("bitcoin", march(29), 3).await.unwrap();
  assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn news_invalid_key_is_api_key_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({
      "status": "error",
      "code": "apiKeyInvalid",
      "message": "Your API key is invalid or incorrect."
    })))
    .mount(&server)
    .await;

  let result = client_for(&server).news().top_articles("bitcoin", march(29), 3).await;
  assert!(matches!(result, Err(Error::ApiKey(_))));
}

#[tokio::test]
async fn twilio_send_posts_form_with_basic_auth() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(format!("/2010-04-01/Accounts/{}/Messages.json", TEST_ACCOUNT_SID)))
    .and(basic_auth(TEST_ACCOUNT_SID, TEST_AUTH_TOKEN))
    .and(body_string_contains("Body=hello"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "sid": "SM0001",
      "status": "queued",
      "to": TEST_RECIPIENT,
      "from": TEST_SENDER,
      "body": "hello"
    })))
    .expect(1)
    .mount(&server)
    .await;

  let message = OutboundMessage {
    body: "hello".to_string(),
    from: TEST_SENDER.to_string(),
    to: TEST_RECIPIENT.to_string(),
  };

  let receipt = client_for(&server).twilio().send(&message).await.unwrap();
  assert_eq!(receipt.sid, "SM0001");
  assert_eq!(receipt.status, "queued");
}

#[tokio::test]
async fn twilio_rejection_is_sms_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({
      "code": 21211,
      "message": "The 'To' number is not a valid phone number.",
      "more_info": "https://www.twilio.com/docs/errors/21211",
      "status": 400
    })))
    .mount(&server)
    .await;

  let message = OutboundMessage {
    body: "hello".to_string(),
    from: TEST_SENDER.to_string(),
    to: "bogus".to_string(),
  };

  match client_for(&server).twilio().send(&message).await {
    Err(Error::Sms(msg)) => assert!(msg.contains("21211")),
    other => panic!("Expected Sms error, got {:?}", other),
  }
}

#[tokio::test]
async fn news_error_payload_with_ok_status_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": "error",
      "code": "parameterInvalid",
      "message": "bad from"
    })))
    .expect(1)
    .mount(&server)
    .await;

  match client_for(&server).news().top_articles("bitcoin", march(29), 3).await {
    Err(Error::Api(msg)) => assert_eq!(msg, "parameterInvalid: bad from"),
    other => panic!("Expected Api error, got {:?}", other),
  }
}

#[tokio::test]
async fn news_key_error_payload_with_ok_status_is_api_key_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": "error",
      "code": "apiKeyExhausted",
      "message": "Your API key has no more requests available."
    })))
    .mount(&server)
    .await;

  let result = client_for(&server).news().top_articles("bitcoin", march(29), 3).await;
  assert!(matches!(result, Err(Error::ApiKey(_))));
}

#[tokio::test]
async fn news_article_with_null_source_name_is_kept() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/everything"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": "ok",
      "totalResults": 1,
      "articles": [
        {"source": {"id": null, "name": null}, "title": "Bitcoin", "description": "d", "url": "https://n/s"}
      ]
    })))
    .mount(&server)
    .await;

  let articles = client_for(&server).news().top_articles("bitcoin", march(29), 3).await.unwrap();
  assert_eq!(articles.len(), 1);
  assert_eq!(articles[0].url, "https://n/s");
}
