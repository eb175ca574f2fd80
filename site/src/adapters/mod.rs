//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod feed;
pub mod page;

pub use feed::{AnyFeedSource, FileFeedSource, HttpFeedSource};
pub use page::{CapturedPresentation, InMemoryDocument, Presentation};
