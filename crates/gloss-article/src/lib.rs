//! Gloss Article Extraction
//!
//! Implementations of the `ArticleSource` trait from `gloss-domain`.
//!
//! - `HttpArticleSource`: downloads a page and extracts its paragraph text
//! - `StaticArticleSource`: returns fixed text, for tests and offline demos
//!
//! Paragraphs inside `<article>` are preferred; every `<p>` on the page is
//! the fallback.

#![warn(missing_docs)]

use async_trait::async_trait;
use gloss_domain::traits::ArticleSource;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Default timeout for page downloads (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with page requests
pub const USER_AGENT: &str = concat!("gloss/", env!("CARGO_PKG_VERSION"));

/// Errors raised while retrieving or parsing an article
#[derive(Error, Debug)]
pub enum ArticleError {
    /// Transport failure (DNS, connect, TLS, timeout, invalid URL)
    #[error("Failed to fetch article: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Article request returned HTTP {0}")]
    Status(u16),

    /// HTML could not be processed
    #[error("Failed to parse article: {0}")]
    Parse(String),
}

/// Fetches article pages over HTTP
pub struct HttpArticleSource {
    client: reqwest::Client,
}

impl HttpArticleSource {
    /// Create a source with the default timeout
    pub fn new() -> Result<Self, ArticleError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, ArticleError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ArticleError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
    type Error = ArticleError;

    async fn fetch_text(&self, url: &str) -> Result<String, Self::Error> {
        info!("Fetching article from {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept-Charset", "UTF-8")
            .send()
            .await
            .map_err(|e| ArticleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArticleError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ArticleError::Network(e.to_string()))?;

        debug!("Downloaded {} bytes of HTML", html.len());

        let text = extract_text(&html)?;
        info!("Extracted {} chars of article text", text.len());
        Ok(text)
    }
}

/// Extract paragraph text from an HTML document
///
/// Paragraph bodies are whitespace-collapsed and joined with blank lines.
/// Returns an empty string when the page has no paragraph text.
///
/// # Examples
///
/// ```
/// use gloss_article::extract_text;
///
/// let html = "<html><body><nav><p>Menu</p></nav>\
///             <article><p>Cats are  popular pets.</p><p>Dogs are loyal.</p></article></body></html>";
/// assert_eq!(extract_text(html).unwrap(), "Cats are popular pets.\n\nDogs are loyal.");
/// ```
pub fn extract_text(html: &str) -> Result<String, ArticleError> {
    let document = Html::parse_document(html);

    let article_paragraphs = selector("article p")?;
    let mut paragraphs = collect_paragraphs(&document, &article_paragraphs);

    if paragraphs.is_empty() {
        let any_paragraph = selector("p")?;
        paragraphs = collect_paragraphs(&document, &any_paragraph);
    }

    Ok(paragraphs.join("\n\n"))
}

fn selector(css: &str) -> Result<Selector, ArticleError> {
    Selector::parse(css).map_err(|e| ArticleError::Parse(format!("Invalid selector '{}': {}", css, e)))
}

fn collect_paragraphs(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Article source returning the same text for every URL
#[derive(Debug, Clone, Default)]
pub struct StaticArticleSource {
    text: String,
}

impl StaticArticleSource {
    /// Create a source that always yields `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ArticleSource for StaticArticleSource {
    type Error = ArticleError;

    async fn fetch_text(&self, _url: &str) -> Result<String, Self::Error> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_article_paragraphs() {
        let html = r#"<html><body>
            <p>Subscribe to our newsletter</p>
            <article><h1>Title</h1><p>First paragraph.</p><p>Second
               paragraph.</p></article>
        </body></html>"#;
        assert_eq!(extract_text(html).unwrap(), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_falls_back_to_all_paragraphs() {
        let html = "<html><body><div><p>Only <b>bold</b> text.</p><p>  </p><p>More.</p></div></body></html>";
        assert_eq!(extract_text(html).unwrap(), "Only bold text.\n\nMore.");
    }

    #[test]
    fn test_no_paragraphs_yields_empty_text() {
        let html = "<html><body><div>No paragraphs here</div></body></html>";
        assert_eq!(extract_text(html).unwrap(), "");
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticArticleSource::new("Cats are popular pets.");
        assert_eq!(source.fetch_text("anything").await.unwrap(), "Cats are popular pets.");
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let source = HttpArticleSource::new().unwrap();
        let result = source.fetch_text("not a url").await;
        assert!(matches!(result, Err(ArticleError::Network(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let source = HttpArticleSource::with_timeout(Duration::from_secs(2)).unwrap();
        let result = source.fetch_text("http://127.0.0.1:1/article").await;
        assert!(matches!(result, Err(ArticleError::Network(_))));
    }
}
