//! HTTP handlers
//!
//! Axum request handlers for the site's pages.

pub mod news;

pub use news::{detail_page, home, news_fragment, news_list, read_item, retry};
