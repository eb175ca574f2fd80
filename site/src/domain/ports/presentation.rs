//! Presentation collaborators
//!
//! The modal widget, page navigation and the visibility observer live outside
//! this crate. They are injected where needed; absence is expressed by not
//! injecting them, never by probing at runtime.

/// Displays rich content in an overlay. Owns the modal lifecycle.
pub trait ModalDisplay: Send + Sync {
    fn open(&self, title: &str, html_fragment: &str);
}

/// Moves the current page to another address
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Watches rendered elements (e.g. to animate them into view)
pub trait VisibilityObserver: Send + Sync {
    fn observe(&self, container_id: &str, element_id: &str);
}
