//! Test fixtures
//!
//! Factory functions for feed data and helpers for reading rendered markup.

use scraper::{Html, Selector};

use crate::domain::entities::NewsItem;

/// Create a news item with every field set
pub fn test_item(n: usize) -> NewsItem {
    NewsItem {
        title: Some(format!("News item {}", n)),
        text: Some(format!("Full text of news item {}.", n)),
        excerpt: None,
        date: Some(format!("2024-05-{:02}", n % 28 + 1)),
        category: Some(format!("Category {}", n)),
        image: Some(format!("https://img.example.test/{}.jpg", n)),
    }
}

/// Create a feed of `count` items titled "News item 1" onwards
pub fn test_feed(count: usize) -> Vec<NewsItem> {
    (1..=count).map(test_item).collect()
}

/// Serialize items the way the feed resource serves them
pub fn feed_json(items: &[NewsItem]) -> String {
    serde_json::to_string(items).unwrap()
}

/// Titles of the rendered cards, in document order
pub fn card_titles(html: &str) -> Vec<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("article h3").unwrap();
    doc.select(&sel)
        .map(|h| h.text().collect::<String>().trim().to_string())
        .collect()
}
