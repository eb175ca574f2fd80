//! Page adapters
//!
//! The in-memory document the site renders into, and the capture used to
//! turn item-viewer decisions into HTTP responses.

mod capture;
mod document;

pub use capture::{CapturedPresentation, Presentation};
pub use document::InMemoryDocument;
