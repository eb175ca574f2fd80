//! In-memory page document

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::Document;
use crate::feed::with_classes;

#[derive(Default)]
struct Container {
    html: String,
    /// element id -> classes added after the content was written
    classes: HashMap<String, Vec<String>>,
}

/// The site's page containers, shared by every request
#[derive(Default)]
pub struct InMemoryDocument {
    containers: RwLock<HashMap<String, Container>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container
    pub fn with_container(self, container_id: &str) -> Self {
        self.containers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(container_id.to_string(), Container::default());
        self
    }
}

impl Document for InMemoryDocument {
    fn has_container(&self, container_id: &str) -> bool {
        self.containers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(container_id)
    }

    fn replace_content(&self, container_id: &str, html: String) {
        let mut containers = self
            .containers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(container) = containers.get_mut(container_id) {
            container.html = html;
            container.classes.clear();
        }
    }

    fn add_class(&self, container_id: &str, element_id: &str, class: &str) {
        let mut containers = self
            .containers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(container) = containers.get_mut(container_id) {
            let classes = container.classes.entry(element_id.to_string()).or_default();
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    fn content(&self, container_id: &str) -> Option<String> {
        let containers = self
            .containers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let container = containers.get(container_id)?;

        let mut html = container.html.clone();
        for (element_id, classes) in &container.classes {
            html = with_classes(&html, element_id, classes.as_slice());
        }
        Some(html)
    }
}
