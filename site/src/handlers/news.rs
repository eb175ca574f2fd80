//! News handlers
//!
//! Pages that render the feed into their container, the retry control, and
//! the item viewer endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::adapters::{CapturedPresentation, Presentation};
use crate::app::{FeedMode, ItemViewer, RenderOutcome};
use crate::domain::entities::ReadMore;
use crate::domain::ports::ModalDisplay;
use crate::error::AppError;
use crate::feed::{render_detail_page, render_modal_page, render_page};
use crate::AppState;

/// Container on the home page (preview mode)
pub const HOME_CONTAINER: &str = "news-container";

/// Container on the full listing page
pub const LIST_CONTAINER: &str = "news-list";

fn page_title(mode: FeedMode) -> &'static str {
    match mode {
        FeedMode::Preview => "Latest news",
        FeedMode::Full => "All news",
    }
}

/// Markup this request's render produced, never re-read from the shared page
fn served_markup(outcome: RenderOutcome, container_id: &str) -> Result<String, AppError> {
    outcome
        .into_html()
        .ok_or_else(|| AppError::NotFound(format!("No news container '{}'", container_id)))
}

async fn render_container(
    state: &AppState,
    container_id: &str,
    mode: FeedMode,
) -> Result<String, AppError> {
    served_markup(state.renderer.render(container_id, mode).await, container_id)
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let content = render_container(&state, HOME_CONTAINER, FeedMode::Preview).await?;
    Ok(Html(render_page(
        page_title(FeedMode::Preview),
        HOME_CONTAINER,
        &content,
    )))
}

/// GET /news
pub async fn news_list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let content = render_container(&state, LIST_CONTAINER, FeedMode::Full).await?;
    Ok(Html(render_page(
        page_title(FeedMode::Full),
        LIST_CONTAINER,
        &content,
    )))
}

/// Query for GET /news/fragment
#[derive(Debug, Deserialize)]
pub struct FragmentQuery {
    pub container: String,
    #[serde(default)]
    pub preview: bool,
}

/// GET /news/fragment
///
/// Renders the container and returns its content only.
pub async fn news_fragment(
    State(state): State<AppState>,
    Query(query): Query<FragmentQuery>,
) -> Result<Html<String>, AppError> {
    if query.container.is_empty() {
        return Err(AppError::BadRequest("container is required".to_string()));
    }
    let mode = FeedMode::from_preview_flag(query.preview);
    Ok(Html(render_container(&state, &query.container, mode).await?))
}

/// Form body posted by the "try again" control
#[derive(Debug, Deserialize)]
pub struct RetryForm {
    pub container: String,
    #[serde(default)]
    pub preview: bool,
}

/// POST /news/retry
///
/// Clears the cached feed, renders the container again and returns its page.
pub async fn retry(
    State(state): State<AppState>,
    Form(form): Form<RetryForm>,
) -> Result<Html<String>, AppError> {
    let mode = FeedMode::from_preview_flag(form.preview);
    let outcome = state.renderer.retry(&form.container, mode).await;
    let content = served_markup(outcome, &form.container)?;
    Ok(Html(render_page(page_title(mode), &form.container, &content)))
}

/// GET /news/:index/read
///
/// The card's "read more" action. Shows the item in a modal page when the
/// modal is enabled, otherwise redirects to the detail page.
pub async fn read_item(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response, AppError> {
    state.store.ensure_populated().await?;
    let item = state
        .store
        .get(index)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No news item at position {}", index)))?;

    let capture = Arc::new(CapturedPresentation::new());
    let modal = state
        .config
        .modal_enabled
        .then(|| capture.clone() as Arc<dyn ModalDisplay>);
    let viewer = ItemViewer::new(modal, capture.clone(), state.config.detail_page.clone());
    viewer.show(&ReadMore::from(&item));

    match capture.take() {
        Some(Presentation::Modal { title, fragment }) => {
            Ok(Html(render_modal_page(&title, &fragment)).into_response())
        }
        Some(Presentation::Redirect { location }) => {
            Ok(Redirect::to(&format!("/{}", location.trim_start_matches('/'))).into_response())
        }
        None => Err(AppError::Internal(
            "Item viewer produced nothing to show".to_string(),
        )),
    }
}

/// Query for the detail page
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub title: String,
}

/// GET /news-single.html?title=...
///
/// Full-page view of the first item with the given title.
pub async fn detail_page(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    state.store.ensure_populated().await?;
    let item = state
        .store
        .find_by_title(&query.title)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No news item titled '{}'", query.title)))?;

    Ok(Html(render_detail_page(&ReadMore::from(&item))))
}
