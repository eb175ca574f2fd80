//! Feed source adapters
//!
//! `HttpFeedSource` fetches the feed over HTTP, `FileFeedSource` reads a
//! static file from disk. `AnyFeedSource` picks one from configuration.

mod file;
mod http;

use async_trait::async_trait;

pub use file::FileFeedSource;
pub use http::HttpFeedSource;

use crate::config::Config;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Feed source chosen at startup
pub enum AnyFeedSource {
    Http(HttpFeedSource),
    File(FileFeedSource),
}

impl AnyFeedSource {
    pub fn from_config(config: &Config) -> Self {
        match config.resolved_feed_url() {
            Some(url) => AnyFeedSource::Http(HttpFeedSource::new(url)),
            None => AnyFeedSource::File(FileFeedSource::new(config.feed_path.clone())),
        }
    }
}

#[async_trait]
impl FeedSource for AnyFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        match self {
            AnyFeedSource::Http(source) => source.fetch().await,
            AnyFeedSource::File(source) => source.fetch().await,
        }
    }

    fn location(&self) -> &str {
        match self {
            AnyFeedSource::Http(source) => source.location(),
            AnyFeedSource::File(source) => source.location(),
        }
    }
}
