//! News store
//!
//! Process-wide cache of the feed. Either unpopulated or holding a complete,
//! validated list; populated lazily and cleared only by `reset`.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::entities::NewsItem;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Parse a feed body. The top level must be a JSON array of items.
pub fn parse_feed(body: &str) -> Result<Vec<NewsItem>, FeedError> {
    let value: Value = serde_json::from_str(body)?;

    let kind = match &value {
        Value::Array(_) => None,
        Value::Object(_) => Some("object"),
        Value::String(_) => Some("string"),
        Value::Number(_) => Some("number"),
        Value::Bool(_) => Some("boolean"),
        Value::Null => Some("null"),
    };
    if let Some(kind) = kind {
        return Err(FeedError::Shape(kind));
    }

    Ok(serde_json::from_value(value)?)
}

pub struct NewsStore<S>
where
    S: FeedSource,
{
    source: Arc<S>,
    cache: Mutex<Option<Arc<Vec<NewsItem>>>>,
}

impl<S> NewsStore<S>
where
    S: FeedSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    /// Return the cached feed, fetching it first if the store is unpopulated.
    ///
    /// The lock is held across the fetch: concurrent callers wait for the
    /// same fetch instead of issuing their own. A failed fetch leaves the
    /// store unpopulated.
    pub async fn ensure_populated(&self) -> Result<Arc<Vec<NewsItem>>, FeedError> {
        let mut cache = self.cache.lock().await;
        if let Some(items) = cache.as_ref() {
            return Ok(items.clone());
        }

        tracing::debug!(location = %self.source.location(), "Fetching news feed");
        let body = self.source.fetch().await?;
        let items = Arc::new(parse_feed(&body)?);

        tracing::info!(
            location = %self.source.location(),
            items = items.len(),
            "News feed loaded"
        );
        *cache = Some(items.clone());
        Ok(items)
    }

    /// Force the store back to unpopulated
    pub async fn reset(&self) {
        *self.cache.lock().await = None;
        tracing::debug!("News cache cleared");
    }

    pub async fn is_populated(&self) -> bool {
        self.cache.lock().await.is_some()
    }

    /// Item at `index` in feed order, without fetching
    pub async fn get(&self, index: usize) -> Option<NewsItem> {
        self.cache
            .lock()
            .await
            .as_ref()
            .and_then(|items| items.get(index).cloned())
    }

    /// First item with this title, without fetching
    pub async fn find_by_title(&self, title: &str) -> Option<NewsItem> {
        self.cache
            .lock()
            .await
            .as_ref()
            .and_then(|items| items.iter().find(|item| item.title() == Some(title)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{feed_json, test_feed, MockFeedSource};

    fn create_store(source: MockFeedSource) -> (NewsStore<MockFeedSource>, Arc<MockFeedSource>) {
        let source = Arc::new(source);
        (NewsStore::new(source.clone()), source)
    }

    // ===== parse_feed tests =====

    #[test]
    fn parse_feed_accepts_array() {
        let items = parse_feed(r#"[{"title":"A"},{"text":"b"}]"#).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), Some("A"));
        assert_eq!(items[1].text(), Some("b"));
    }

    #[test]
    fn parse_feed_accepts_numeric_date() {
        let items = parse_feed(r#"[{"title":"A","date":2024}]"#).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_date(), "2024");
    }

    #[test]
    fn parse_feed_rejects_object() {
        let err = parse_feed(r#"{"news": []}"#).unwrap_err();

        assert!(matches!(err, FeedError::Shape("object")));
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn parse_feed_rejects_invalid_json() {
        let err = parse_feed("not json").unwrap_err();

        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn parse_feed_rejects_non_object_items() {
        let err = parse_feed("[1, 2]").unwrap_err();

        assert!(matches!(err, FeedError::Parse(_)));
    }

    // ===== store tests =====

    #[tokio::test]
    async fn ensure_populated_fetches_once() {
        let (store, source) = create_store(MockFeedSource::with_body(feed_json(&test_feed(4))));

        let first = store.ensure_populated().await.unwrap();
        let second = store.ensure_populated().await.unwrap();

        assert_eq!(first.len(), 4);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_store_unpopulated() {
        let (store, source) = create_store(
            MockFeedSource::with_status(500).then_body(feed_json(&test_feed(2))),
        );

        let err = store.ensure_populated().await.unwrap_err();
        assert!(matches!(err, FeedError::Status(500)));
        assert!(!store.is_populated().await);

        let items = store.ensure_populated().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn shape_mismatch_leaves_store_unpopulated() {
        let (store, _source) = create_store(MockFeedSource::with_body("{}".to_string()));

        let err = store.ensure_populated().await.unwrap_err();

        assert!(matches!(err, FeedError::Shape("object")));
        assert!(!store.is_populated().await);
    }

    #[tokio::test]
    async fn reset_forces_refetch() {
        let (store, source) = create_store(MockFeedSource::with_body(feed_json(&test_feed(1))));

        store.ensure_populated().await.unwrap();
        store.reset().await;
        assert!(!store.is_populated().await);

        store.ensure_populated().await.unwrap();
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_fetch() {
        let (store, source) = create_store(MockFeedSource::with_body(feed_json(&test_feed(3))));

        let (a, b) = tokio::join!(store.ensure_populated(), store.ensure_populated());

        assert_eq!(a.unwrap().len(), 3);
        assert_eq!(b.unwrap().len(), 3);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn lookups_do_not_fetch() {
        let (store, source) = create_store(MockFeedSource::with_body(feed_json(&test_feed(3))));

        assert!(store.get(0).await.is_none());
        assert_eq!(source.fetch_count(), 0);

        store.ensure_populated().await.unwrap();

        assert_eq!(store.get(1).await.unwrap().title(), Some("News item 2"));
        assert!(store.get(3).await.is_none());
        assert_eq!(
            store.find_by_title("News item 3").await.unwrap().title(),
            Some("News item 3")
        );
        assert!(store.find_by_title("Missing").await.is_none());
        assert_eq!(source.fetch_count(), 1);
    }
}
