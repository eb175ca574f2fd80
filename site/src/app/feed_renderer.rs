//! Feed renderer service
//!
//! Renders the feed into a page container: loading state, fetch through the
//! store, cards or the empty/error state, then the post-render pass.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::NewsStore;
use crate::domain::ports::{Document, FeedSource, VisibilityObserver};
use crate::feed::{
    empty_placeholder, error_placeholder, loading_placeholder, render_cards, with_classes,
    RenderOptions, RenderedCard, VISIBLE_CLASS,
};

/// Which slice of the feed a container shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// Home page: first few items only
    Preview,
    /// Full listing
    Full,
}

impl FeedMode {
    pub fn from_preview_flag(preview: bool) -> Self {
        if preview {
            FeedMode::Preview
        } else {
            FeedMode::Full
        }
    }

    pub fn is_preview(self) -> bool {
        self == FeedMode::Preview
    }
}

/// What a render call ended up showing.
///
/// Every outcome except `MissingContainer` carries the markup this render
/// produced, with the reveal classes applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No such container; nothing was written
    MissingContainer,
    /// Cards were rendered
    Rendered { cards: usize, html: String },
    /// The visible slice was empty
    Empty { html: String },
    /// The feed failed to load; the error card was shown
    Failed { message: String, html: String },
    /// A newer render of the same container started while this one waited.
    /// `html` was not written to the container.
    Superseded { html: String },
}

impl RenderOutcome {
    pub fn into_html(self) -> Option<String> {
        match self {
            RenderOutcome::MissingContainer => None,
            RenderOutcome::Rendered { html, .. }
            | RenderOutcome::Empty { html }
            | RenderOutcome::Failed { html, .. }
            | RenderOutcome::Superseded { html } => Some(html),
        }
    }
}

/// What a render resolved to before it is committed
enum View {
    Cards(Vec<RenderedCard>),
    Empty,
    Failed(String),
}

pub struct FeedRenderer<S, D>
where
    S: FeedSource,
    D: Document,
{
    store: Arc<NewsStore<S>>,
    document: Arc<D>,
    observer: Option<Arc<dyn VisibilityObserver>>,
    options: RenderOptions,
    generations: Mutex<HashMap<String, u64>>,
}

impl<S, D> FeedRenderer<S, D>
where
    S: FeedSource,
    D: Document,
{
    pub fn new(store: Arc<NewsStore<S>>, document: Arc<D>, options: RenderOptions) -> Self {
        Self {
            store,
            document,
            observer: None,
            options,
            generations: Mutex::new(HashMap::new()),
        }
    }

    /// Register rendered cards with this observer after every commit
    pub fn with_observer(mut self, observer: Arc<dyn VisibilityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Render the feed into `container_id`
    pub async fn render(&self, container_id: &str, mode: FeedMode) -> RenderOutcome {
        if !self.document.has_container(container_id) {
            tracing::warn!(container = %container_id, "News container not found");
            return RenderOutcome::MissingContainer;
        }

        let generation = self.begin(container_id).await;
        self.document
            .replace_content(container_id, loading_placeholder());

        let view = self.resolve(container_id, mode).await;

        if !self.is_current(container_id, generation).await {
            tracing::debug!(container = %container_id, "Dropping stale render");
            return RenderOutcome::Superseded {
                html: self.markup(&view, container_id, mode),
            };
        }

        self.commit(container_id, mode, view)
    }

    async fn resolve(&self, container_id: &str, mode: FeedMode) -> View {
        let items = match self.store.ensure_populated().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(container = %container_id, error = %e, "Failed to load news");
                return View::Failed(e.to_string());
            }
        };

        let visible = match mode {
            FeedMode::Preview => &items[..items.len().min(self.options.preview_limit)],
            FeedMode::Full => &items[..],
        };

        if visible.is_empty() {
            View::Empty
        } else {
            View::Cards(render_cards(&self.options, container_id, visible))
        }
    }

    /// Markup of `view` as it reads once committed
    fn markup(&self, view: &View, container_id: &str, mode: FeedMode) -> String {
        match view {
            View::Cards(cards) => cards
                .iter()
                .map(|card| with_classes(&card.html, &card.element_id, &[VISIBLE_CLASS]))
                .collect(),
            View::Empty => empty_placeholder(),
            View::Failed(message) => {
                error_placeholder(message, &self.options, container_id, mode.is_preview())
            }
        }
    }

    fn commit(&self, container_id: &str, mode: FeedMode, view: View) -> RenderOutcome {
        let html = self.markup(&view, container_id, mode);
        match view {
            View::Cards(cards) => {
                let raw: String = cards.iter().map(|card| card.html.as_str()).collect();
                self.document.replace_content(container_id, raw);
                self.after_commit(container_id, &cards);

                tracing::debug!(container = %container_id, cards = cards.len(), "News rendered");
                RenderOutcome::Rendered {
                    cards: cards.len(),
                    html,
                }
            }
            View::Empty => {
                self.document.replace_content(container_id, html.clone());
                RenderOutcome::Empty { html }
            }
            View::Failed(message) => {
                self.document.replace_content(container_id, html.clone());
                RenderOutcome::Failed { message, html }
            }
        }
    }

    /// Clear the cache and render again with the same arguments
    pub async fn retry(&self, container_id: &str, mode: FeedMode) -> RenderOutcome {
        tracing::info!(container = %container_id, "Retrying news load");
        self.store.reset().await;
        self.render(container_id, mode).await
    }

    /// Post-render pass, run once the cards are in the container
    fn after_commit(&self, container_id: &str, cards: &[RenderedCard]) {
        for card in cards {
            self.document
                .add_class(container_id, &card.element_id, VISIBLE_CLASS);
            if let Some(observer) = &self.observer {
                observer.observe(container_id, &card.element_id);
            }
        }
    }

    async fn begin(&self, container_id: &str) -> u64 {
        let mut generations = self.generations.lock().await;
        let generation = generations.entry(container_id.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    async fn is_current(&self, container_id: &str, generation: u64) -> bool {
        self.generations.lock().await.get(container_id) == Some(&generation)
    }
}
