//! News item domain entity
//!
//! Items come from a static feed and are never mutated here. Every field is
//! optional; empty strings count as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Card title used when an item has none
pub const UNTITLED: &str = "Untitled";

/// Title handed to the item viewer (and used as image alt) when an item has none
pub const FALLBACK_TITLE: &str = "News";

/// Date label used when an item has none
pub const RECENTLY: &str = "Recently";

/// Marker appended to a truncated preview
pub const ELLIPSIS: &str = "...";

/// A news item from the feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
}

/// Read a text field from any JSON scalar. Numbers and booleans keep their
/// JSON spelling; null, arrays and objects count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl NewsItem {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn text(&self) -> Option<&str> {
        present(&self.text)
    }

    pub fn date(&self) -> Option<&str> {
        present(&self.date)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn image(&self) -> Option<&str> {
        present(&self.image)
    }

    /// Title shown on the card
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or(UNTITLED)
    }

    /// Date shown on the card
    pub fn display_date(&self) -> &str {
        self.date().unwrap_or(RECENTLY)
    }

    /// Preview text: the excerpt, or the body cut to `max_chars` characters
    pub fn preview(&self, max_chars: usize) -> String {
        if let Some(excerpt) = present(&self.excerpt) {
            return excerpt.to_string();
        }

        match self.text() {
            Some(text) => match text.char_indices().nth(max_chars) {
                Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
                None => text.to_string(),
            },
            None => String::new(),
        }
    }
}

/// Typed payload of a card's "read more" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadMore {
    pub title: String,
    pub content: String,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl From<&NewsItem> for ReadMore {
    fn from(item: &NewsItem) -> Self {
        Self {
            title: item.title().unwrap_or(FALLBACK_TITLE).to_string(),
            content: item.text().unwrap_or_default().to_string(),
            date: item.date().map(str::to_string),
            category: item.category().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text(len: usize) -> NewsItem {
        NewsItem {
            text: Some("a".repeat(len)),
            ..NewsItem::default()
        }
    }

    #[test]
    fn preview_truncates_long_text() {
        let preview = with_text(140).preview(120);

        assert_eq!(preview, format!("{}...", "a".repeat(120)));
    }

    #[test]
    fn preview_keeps_short_text() {
        let preview = with_text(80).preview(120);

        assert_eq!(preview, "a".repeat(80));
        assert!(!preview.ends_with(ELLIPSIS));
    }

    #[test]
    fn preview_keeps_text_of_exact_length() {
        assert_eq!(with_text(120).preview(120), "a".repeat(120));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let item = NewsItem {
            text: Some("ё".repeat(130)),
            ..NewsItem::default()
        };

        let preview = item.preview(120);

        assert_eq!(preview.chars().count(), 123);
        assert!(preview.starts_with(&"ё".repeat(120)));
    }

    #[test]
    fn preview_prefers_excerpt() {
        let item = NewsItem {
            text: Some("long body".repeat(40)),
            excerpt: Some("Short summary".to_string()),
            ..NewsItem::default()
        };

        assert_eq!(item.preview(120), "Short summary");
    }

    #[test]
    fn preview_empty_without_text() {
        assert_eq!(NewsItem::default().preview(120), "");
    }

    #[test]
    fn display_fallbacks() {
        let item = NewsItem {
            title: Some(String::new()),
            ..NewsItem::default()
        };

        assert_eq!(item.display_title(), UNTITLED);
        assert_eq!(item.display_date(), RECENTLY);
        assert!(item.category().is_none());
        assert!(item.image().is_none());
    }

    #[test]
    fn deserialize_partial_item() {
        let item: NewsItem =
            serde_json::from_str(r#"{"title": "Hello", "category": null}"#).unwrap();

        assert_eq!(item.title(), Some("Hello"));
        assert!(item.category().is_none());
        assert!(item.text().is_none());
    }

    #[test]
    fn deserialize_scalar_fields_as_text() {
        let item: NewsItem = serde_json::from_str(
            r#"{"title": 42, "date": 2024, "category": true, "image": ["a.png"], "text": {"x": 1}}"#,
        )
        .unwrap();

        assert_eq!(item.title(), Some("42"));
        assert_eq!(item.date(), Some("2024"));
        assert_eq!(item.category(), Some("true"));
        assert!(item.image().is_none());
        assert!(item.text().is_none());
    }

    #[test]
    fn read_more_uses_full_text() {
        let item = NewsItem {
            title: None,
            text: Some("Full body".to_string()),
            excerpt: Some("Summary".to_string()),
            date: Some("2024-05-01".to_string()),
            category: Some(String::new()),
            image: None,
        };

        let read_more = ReadMore::from(&item);

        assert_eq!(read_more.title, FALLBACK_TITLE);
        assert_eq!(read_more.content, "Full body");
        assert_eq!(read_more.date.as_deref(), Some("2024-05-01"));
        assert!(read_more.category.is_none());
    }
}
