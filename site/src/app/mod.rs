//! Application layer
//!
//! The news store, the feed renderer and the item viewer.
//! Services coordinate between domain entities, ports and the markup in `feed`.

pub mod feed_renderer;
pub mod item_viewer;
pub mod news_store;

pub use feed_renderer::{FeedMode, FeedRenderer, RenderOutcome};
pub use item_viewer::ItemViewer;
pub use news_store::NewsStore;
