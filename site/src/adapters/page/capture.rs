//! Per-request capture of what the item viewer decided to do
//!
//! Over HTTP the modal and the navigation both become a response. The viewer
//! writes into a `CapturedPresentation` and the handler turns it into a page
//! or a redirect.

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{ModalDisplay, Navigator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Modal { title: String, fragment: String },
    Redirect { location: String },
}

#[derive(Default)]
pub struct CapturedPresentation {
    slot: Mutex<Option<Presentation>>,
}

impl CapturedPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Presentation> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn store(&self, presentation: Presentation) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(presentation);
    }
}

impl ModalDisplay for CapturedPresentation {
    fn open(&self, title: &str, html_fragment: &str) {
        self.store(Presentation::Modal {
            title: title.to_string(),
            fragment: html_fragment.to_string(),
        });
    }
}

impl Navigator for CapturedPresentation {
    fn navigate(&self, location: &str) {
        self.store(Presentation::Redirect {
            location: location.to_string(),
        });
    }
}
