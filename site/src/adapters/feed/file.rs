//! Static file feed source

use async_trait::async_trait;

use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Reads the feed from a JSON file on disk
pub struct FileFeedSource {
    path: String,
}

impl FileFeedSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> &str {
        &self.path
    }
}
