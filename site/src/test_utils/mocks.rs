//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and record
//! how they were called.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::ports::{Document, FeedSource, ModalDisplay, Navigator, VisibilityObserver};
use crate::error::FeedError;

// ============================================================================
// Mock Feed Source
// ============================================================================

#[derive(Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
}

/// Answers fetches from a script of responses; the last one repeats
pub struct MockFeedSource {
    responses: Vec<MockResponse>,
    fetches: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockFeedSource {
    pub fn with_body(body: String) -> Self {
        Self {
            responses: vec![MockResponse::Body(body)],
            fetches: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            responses: vec![MockResponse::Status(status)],
            fetches: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Answer the next fetch with this body
    pub fn then_body(mut self, body: String) -> Self {
        self.responses.push(MockResponse::Body(body));
        self
    }

    /// Hold every fetch until the gate is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let index = n.min(self.responses.len().saturating_sub(1));
        match self.responses.get(index) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(FeedError::Status(*status)),
            None => Err(FeedError::Status(404)),
        }
    }

    fn location(&self) -> &str {
        "mock://news.json"
    }
}

// ============================================================================
// Recording Document
// ============================================================================

/// Single-container document that keeps every write
pub struct RecordingDocument {
    container_id: String,
    writes: RwLock<Vec<String>>,
}

impl RecordingDocument {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            writes: RwLock::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.read().unwrap().clone()
    }
}

impl Document for RecordingDocument {
    fn has_container(&self, container_id: &str) -> bool {
        container_id == self.container_id
    }

    fn replace_content(&self, container_id: &str, html: String) {
        if container_id == self.container_id {
            self.writes.write().unwrap().push(html);
        }
    }

    fn add_class(&self, _container_id: &str, _element_id: &str, _class: &str) {}

    fn content(&self, container_id: &str) -> Option<String> {
        if container_id != self.container_id {
            return None;
        }
        Some(self.writes.read().unwrap().last().cloned().unwrap_or_default())
    }
}

// ============================================================================
// Recording presentation collaborators
// ============================================================================

#[derive(Default)]
pub struct RecordingObserver {
    observed: RwLock<Vec<(String, String)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed(&self) -> Vec<(String, String)> {
        self.observed.read().unwrap().clone()
    }
}

impl VisibilityObserver for RecordingObserver {
    fn observe(&self, container_id: &str, element_id: &str) {
        self.observed
            .write()
            .unwrap()
            .push((container_id.to_string(), element_id.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingModal {
    opened: RwLock<Vec<(String, String)>>,
}

impl RecordingModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened.read().unwrap().clone()
    }
}

impl ModalDisplay for RecordingModal {
    fn open(&self, title: &str, html_fragment: &str) {
        self.opened
            .write()
            .unwrap()
            .push((title.to_string(), html_fragment.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    locations: RwLock<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.read().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.locations.write().unwrap().push(location.to_string());
    }
}
