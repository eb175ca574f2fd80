//! Domain ports (traits)
//!
//! Port traits define what the renderer and viewer need from the outside.
//! Adapters provide concrete implementations of these traits.

pub mod document;
pub mod feed_source;
pub mod presentation;

pub use document::Document;
pub use feed_source::FeedSource;
pub use presentation::{ModalDisplay, Navigator, VisibilityObserver};
