//! Feed module
//!
//! HTML rendering of news cards, placeholders and item pages.

pub mod renderer;

pub use renderer::{
    detail_location, empty_placeholder, error_placeholder, loading_placeholder, modal_fragment,
    render_cards, render_detail_page, render_modal_page, render_page, RenderOptions,
    RenderedCard, with_classes, VISIBLE_CLASS,
};
