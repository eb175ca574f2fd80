//! Document port trait
//!
//! A page made of named containers. The renderer owns a container's whole
//! content: every write replaces it, there is no partial patching.

/// Port trait for the page the feed is rendered into
pub trait Document: Send + Sync {
    /// Whether a container with this id exists on the page
    fn has_container(&self, container_id: &str) -> bool;

    /// Replace the container's content. Classes added to elements of the
    /// previous content are dropped.
    fn replace_content(&self, container_id: &str, html: String);

    /// Add a class to an element inside the container
    fn add_class(&self, container_id: &str, element_id: &str, class: &str);

    /// Current markup of the container, with added classes applied
    fn content(&self, container_id: &str) -> Option<String>;
}
