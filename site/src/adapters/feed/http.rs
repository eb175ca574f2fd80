//! HTTP feed source

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Fetches the feed with a plain GET. No timeout and no retries.
pub struct HttpFeedSource {
    http: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn location(&self) -> &str {
        &self.url
    }
}
