//! Domain layer
//!
//! - `entities`: the news item as read from the feed
//! - `ports`: Trait definitions for the feed source and page collaborators

pub mod entities;
pub mod ports;
