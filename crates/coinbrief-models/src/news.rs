//! NewsAPI `/v2/everything` data models

use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope for `/v2/everything`.
///
/// On failure the provider answers with `status: "error"` plus `code` and
/// `message` instead of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// "ok" or "error"
    pub status: String,

    /// Total number of matching articles (only on success)
    #[serde(default)]
    pub total_results: Option<u64>,

    /// Articles in provider order (popularity when sorted by popularity)
    #[serde(default)]
    pub articles: Vec<Article>,

    /// Error code (only on failure)
    #[serde(default)]
    pub code: Option<String>,

    /// Error message (only on failure)
    #[serde(default)]
    pub message: Option<String>,
}

/// A single news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Publishing outlet
    #[serde(default)]
    pub source: Option<ArticleSource>,

    #[serde(default)]
    pub author: Option<String>,

    /// Headline
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,

    /// Short summary, often absent
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the full article
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,

    #[serde(default)]
    pub url_to_image: Option<String>,

    /// ISO 8601 publication timestamp
    #[serde(default)]
    pub published_at: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

/// Outlet an article came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NewsResponse {
    /// Whether the provider reported an error
    pub fn is_error(&self) -> bool {
        self.status.eq_ignore_ascii_case("error")
    }

    /// First `n` articles; fewer if the provider returned fewer
    pub fn top(self, n: usize) -> Vec<Article> {
        self.articles.into_iter().take(n).collect()
    }
}

impl Article {
    /// Minimal article, mostly useful for tests and dry runs
    pub fn new(title: impl Into<String>, description: Option<String>, url: impl Into<String>) -> Self {
        Self {
            source: None,
            author: None,
            title: title.into(),
            description,
            url: url.into(),
            url_to_image: None,
            published_at: None,
            content: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_everything_json() -> &'static str {
        r#"{
          "status": "ok",
          "totalResults": 4,
          "articles": [
            {
              "source": {"id": null, "name": "CoinDesk"},
              "author": "Jane Doe",
              "title": "Bitcoin rallies past resistance",
              "description": "Traders pile in ahead of the weekend.",
              "url": "https://example.com/a",
              "urlToImage": null,
              "publishedAt": "2021-03-29T08:00:00Z",
              "content": "Full text..."
            },
            {
              "source": {"id": "reuters", "name": "Reuters"},
              "author": null,
              "title": "Bitcoin miners expand",
              "description": null,
              "url": "https://example.com/b",
              "publishedAt": "2021-03-29T07:00:00Z"
            },
            {
              "source": {"id": null, "name": "Blog"},
              "title": "Why bitcoin matters",
              "description": "",
              "url": "https://example.com/c"
            },
            {
              "source": {"id": null, "name": "Other"},
              "title": "Bitcoin fourth",
              "description": "d",
              "url": "https://example.com/d"
            }
          ]
        }"#
    }

    #[test]
    fn test_news_response_deserialize() {
        let response: NewsResponse = serde_json::from_str(sample_everything_json()).unwrap();

        assert!(!response.is_error());
        assert_eq!(response.total_results, Some(4));
        assert_eq!(response.articles.len(), 4);

        let first = &response.articles[0];
        assert_eq!(first.title, "Bitcoin rallies past resistance");
        assert_eq!(first.source.as_ref().unwrap().name.as_deref(), Some("CoinDesk"));
        assert_eq!(first.published_at.as_deref(), Some("2021-03-29T08:00:00Z"));
    }

    #[test]
    fn test_null_description_is_none() {
        let response: NewsResponse = serde_json::from_str(sample_everything_json()).unwrap();
        assert_eq!(response.articles[1].description, None);
        assert_eq!(response.articles[2].description.as_deref(), Some(""));
    }

    #[test]
    fn test_top_truncates_in_order() {
        let response: NewsResponse = serde_json::from_str(sample_everything_json()).unwrap();
        let top = response.top(3);

        let urls: Vec<&str> = top.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com/a", "https://example.com/b", "https://example.com/c"]);
    }

    #[test]
    fn test_top_with_fewer_articles() {
        let response: NewsResponse = serde_json::from_str(sample_everything_json()).unwrap();
        assert_eq!(response.top(10).len(), 4);
    }

    #[test]
    fn test_error_response() {
        let json = r#"{
          "status": "error",
          "code": "apiKeyInvalid",
          "message": "Your API key is invalid or incorrect."
        }"#;
        let response: NewsResponse = serde_json::from_str(json).unwrap();

        assert!(response.is_error());
        assert_eq!(response.code.as_deref(), Some("apiKeyInvalid"));
        assert!(response.articles.is_empty());
    }

    #[test]
    fn test_null_source_name_is_tolerated() {
        let json = r#"{
          "status": "ok",
          "totalResults": 1,
          "articles": [
            {"source": {"id": null, "name": null}, "title": "Bitcoin", "description": "d", "url": "https://example.com/s"}
          ]
        }"#;
        let response: NewsResponse = serde_json::from_str(json).unwrap();

        let source = response.articles[0].source.as_ref().unwrap();
        assert_eq!(source.name, None);
        assert_eq!(response.articles[0].title, "Bitcoin");
    }

    #[test]
    fn test_null_title_becomes_empty() {
        let json = r#"{"title": null, "url": "https://example.com/x"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.url, "https://example.com/x");
    }
}
