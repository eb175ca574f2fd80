//! Item viewer
//!
//! Shows a single item from a card's "read more" action: in a modal when a
//! modal capability was injected, otherwise by navigating to the item's
//! detail page.

use std::sync::Arc;

use crate::domain::entities::ReadMore;
use crate::domain::ports::{ModalDisplay, Navigator};
use crate::feed::{detail_location, modal_fragment};

enum Presenter {
    Modal(Arc<dyn ModalDisplay>),
    DetailPage {
        navigator: Arc<dyn Navigator>,
        detail_page: String,
    },
}

pub struct ItemViewer {
    presenter: Presenter,
}

impl ItemViewer {
    /// Show items in the given modal
    pub fn with_modal(modal: Arc<dyn ModalDisplay>) -> Self {
        Self {
            presenter: Presenter::Modal(modal),
        }
    }

    /// Show items by navigating to `detail_page?title=...`
    pub fn with_detail_page(navigator: Arc<dyn Navigator>, detail_page: impl Into<String>) -> Self {
        Self {
            presenter: Presenter::DetailPage {
                navigator,
                detail_page: detail_page.into(),
            },
        }
    }

    /// Modal when available, detail page otherwise
    pub fn new(
        modal: Option<Arc<dyn ModalDisplay>>,
        navigator: Arc<dyn Navigator>,
        detail_page: impl Into<String>,
    ) -> Self {
        match modal {
            Some(modal) => Self::with_modal(modal),
            None => Self::with_detail_page(navigator, detail_page),
        }
    }

    pub fn show(&self, item: &ReadMore) {
        match &self.presenter {
            Presenter::Modal(modal) => {
                modal.open(&item.title, &modal_fragment(item));
            }
            Presenter::DetailPage {
                navigator,
                detail_page,
            } => {
                tracing::debug!(title = %item.title, "No modal available, opening detail page");
                navigator.navigate(&detail_location(detail_page, &item.title));
            }
        }
    }
}
