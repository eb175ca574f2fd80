//! Feed source port trait

use async_trait::async_trait;

use crate::error::FeedError;

/// Port trait for fetching the raw feed payload
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the feed body. Status and transport problems are errors;
    /// the body is not validated here.
    async fn fetch(&self) -> Result<String, FeedError>;

    /// Where the feed comes from, for logs
    fn location(&self) -> &str;
}
