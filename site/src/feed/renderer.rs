//! Feed renderer
//!
//! Renders news items and the loading/empty/error states to HTML.
//! Everything here is pure string building; writing into a page happens in
//! `app::feed_renderer`.

use crate::config::{Config, DEFAULT_PLACEHOLDER_IMAGE};
use crate::domain::entities::news_item::FALLBACK_TITLE;
use crate::domain::entities::{NewsItem, ReadMore};

/// Class carried by every card that animates in after render
pub const ANIMATED_CLASS: &str = "animate-fade-up";

/// Class that starts the card transition
pub const VISIBLE_CLASS: &str = "visible";

/// Seconds between the animation start of consecutive cards
const ANIMATION_STEP_SECS: f64 = 0.1;

/// Markup options taken from configuration
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub preview_limit: usize,
    pub excerpt_length: usize,
    pub placeholder_image: String,
    /// Cards link to `{read_more_base}/{index}/read`
    pub read_more_base: String,
    /// Form action of the "try again" control
    pub retry_action: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preview_limit: 3,
            excerpt_length: 120,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            read_more_base: "/news".to_string(),
            retry_action: "/news/retry".to_string(),
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            preview_limit: config.preview_limit,
            excerpt_length: config.excerpt_length,
            placeholder_image: config.placeholder_image.clone(),
            ..Self::default()
        }
    }
}

/// One rendered card and the id of its root element
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub element_id: String,
    pub html: String,
}

/// Basic HTML escaping for text and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Id of the card element for `index` inside `container_id`
pub fn card_element_id(container_id: &str, index: usize) -> String {
    format!("{}-card-{}", container_id, index)
}

/// Append `classes` to the `class` attribute that directly follows `id="{element_id}"`
pub fn with_classes<C: AsRef<str>>(html: &str, element_id: &str, classes: &[C]) -> String {
    let anchor = format!("id=\"{}\" class=\"", element_id);
    let Some(start) = html.find(&anchor) else {
        return html.to_string();
    };
    let attr_start = start + anchor.len();
    let Some(attr_len) = html[attr_start..].find('"') else {
        return html.to_string();
    };
    let attr_end = attr_start + attr_len;

    let mut out = String::with_capacity(html.len() + 16);
    out.push_str(&html[..attr_end]);
    for class in classes {
        out.push(' ');
        out.push_str(class.as_ref());
    }
    out.push_str(&html[attr_end..]);
    out
}

/// Percent-encode the characters that would end a single-quoted JS string
fn js_string_url(url: &str) -> String {
    url.replace('\\', "%5C").replace('\'', "%27")
}

fn animation_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * ANIMATION_STEP_SECS)
}

pub fn loading_placeholder() -> String {
    let mut buf = String::new();
    buf.push_str("<div class=\"md:col-span-3 text-center py-8\" data-news-state=\"loading\">\n");
    buf.push_str("    <div class=\"inline-block animate-spin rounded-full h-8 w-8 border-t-2 border-b-2 border-blue-500\"></div>\n");
    buf.push_str("    <p class=\"mt-2 text-gray-600\">Loading news...</p>\n");
    buf.push_str("</div>\n");
    buf
}

pub fn empty_placeholder() -> String {
    let mut buf = String::new();
    buf.push_str("<div class=\"md:col-span-3 text-center py-8 text-gray-500\" data-news-state=\"empty\">\n");
    buf.push_str("    <p>No news yet</p>\n");
    buf.push_str("</div>\n");
    buf
}

/// Error card with a "try again" control that re-renders the same container
pub fn error_placeholder(
    message: &str,
    options: &RenderOptions,
    container_id: &str,
    preview: bool,
) -> String {
    let mut buf = String::new();
    buf.push_str("<div class=\"md:col-span-3 text-center py-8 text-gray-500\" data-news-state=\"error\">\n");
    buf.push_str("    <p>Could not load the news.</p>\n");
    buf.push_str(&format!(
        "    <p class=\"text-sm mt-2\">Error: {}</p>\n",
        escape(message)
    ));
    buf.push_str(&format!(
        "    <form method=\"post\" action=\"{}\">\n",
        escape(&options.retry_action)
    ));
    buf.push_str(&format!(
        "        <input type=\"hidden\" name=\"container\" value=\"{}\">\n",
        escape(container_id)
    ));
    buf.push_str(&format!(
        "        <input type=\"hidden\" name=\"preview\" value=\"{}\">\n",
        preview
    ));
    buf.push_str("        <button type=\"submit\" class=\"mt-4 px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600\">Try again</button>\n");
    buf.push_str("    </form>\n");
    buf.push_str("</div>\n");
    buf
}

/// Render a card for the item at `index` in feed order
pub fn render_card(
    options: &RenderOptions,
    container_id: &str,
    index: usize,
    item: &NewsItem,
) -> RenderedCard {
    let element_id = card_element_id(container_id, index);
    let title = escape(item.display_title());
    let mut buf = String::new();

    buf.push_str(&format!(
        "<article id=\"{}\" class=\"bg-white rounded-2xl overflow-hidden shadow-sm card-hover {} flex flex-col h-full\" style=\"animation-delay: {}\">\n",
        element_id,
        ANIMATED_CLASS,
        animation_delay(index)
    ));

    if let Some(image) = item.image() {
        buf.push_str(&format!(
            "    <img src=\"{}\" alt=\"{}\" class=\"w-full h-48 object-cover\" loading=\"lazy\" onerror=\"this.onerror=null;this.src='{}'\">\n",
            escape(image),
            escape(item.title().unwrap_or(FALLBACK_TITLE)),
            escape(&js_string_url(&options.placeholder_image))
        ));
    }

    buf.push_str("    <div class=\"p-6 flex flex-col flex-grow\">\n");
    buf.push_str("        <div class=\"flex items-center gap-2 text-sm text-gray-500 mb-3\">\n");
    buf.push_str(&format!(
        "            <span>{}</span>\n",
        escape(item.display_date())
    ));
    if let Some(category) = item.category() {
        buf.push_str(&format!(
            "            <span class=\"bg-blue-100 text-blue-600 px-2 py-1 rounded-full text-xs\">{}</span>\n",
            escape(category)
        ));
    }
    buf.push_str("        </div>\n");
    buf.push_str(&format!(
        "        <h3 class=\"font-bold text-gray-900 text-lg mb-3\">{}</h3>\n",
        title
    ));
    buf.push_str(&format!(
        "        <p class=\"text-gray-600 text-sm mb-4 flex-grow\">{}</p>\n",
        escape(&item.preview(options.excerpt_length))
    ));
    buf.push_str(&format!(
        "        <a href=\"{}/{}/read\" data-news-index=\"{}\" class=\"inline-flex items-center gap-2 text-blue-600 hover:text-blue-700 font-medium text-sm cursor-pointer mt-auto self-start\" aria-label=\"Read &quot;{}&quot; in full\">\n",
        escape(options.read_more_base.trim_end_matches('/')),
        index,
        index,
        title
    ));
    buf.push_str("            Read more\n");
    buf.push_str("            <svg class=\"w-4 h-4\" fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\"><path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"M17 8l4 4m0 0l-4 4m4-4H3\"></path></svg>\n");
    buf.push_str("        </a>\n");
    buf.push_str("    </div>\n");
    buf.push_str("</article>\n");

    RenderedCard {
        element_id,
        html: buf,
    }
}

/// Render cards for `items`, in order
pub fn render_cards(
    options: &RenderOptions,
    container_id: &str,
    items: &[NewsItem],
) -> Vec<RenderedCard> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| render_card(options, container_id, i, item))
        .collect()
}

/// Body handed to the modal: optional date/category row, then the content
pub fn modal_fragment(read_more: &ReadMore) -> String {
    let mut buf = String::new();
    buf.push_str("<div class=\"space-y-6\">\n");

    if read_more.date.is_some() || read_more.category.is_some() {
        buf.push_str("    <div class=\"flex flex-wrap items-center gap-3 mb-4\">\n");
        if let Some(date) = &read_more.date {
            buf.push_str(&format!(
                "        <span class=\"text-sm text-gray-500\">{}</span>\n",
                escape(date)
            ));
        }
        if let Some(category) = &read_more.category {
            buf.push_str(&format!(
                "        <span class=\"bg-blue-100 text-blue-600 px-3 py-1 rounded-full text-sm\">{}</span>\n",
                escape(category)
            ));
        }
        buf.push_str("    </div>\n");
    }

    buf.push_str("    <div class=\"prose prose-blue max-w-none\">\n");
    buf.push_str(&format!("        {}\n", escape(&read_more.content)));
    buf.push_str("    </div>\n");
    buf.push_str("</div>\n");
    buf
}

/// Address of the detail page for an item title
pub fn detail_location(detail_page: &str, title: &str) -> String {
    format!("{}?title={}", detail_page, urlencoding::encode(title))
}

fn page_head(buf: &mut String, title: &str) {
    buf.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(title)));
    buf.push_str("</head>\n<body>\n");
}

/// Full page wrapping one news container
pub fn render_page(title: &str, container_id: &str, content: &str) -> String {
    let mut buf = String::new();
    page_head(&mut buf, title);
    buf.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    buf.push_str(&format!(
        "<section id=\"{}\" class=\"grid md:grid-cols-3 gap-8\">\n",
        escape(container_id)
    ));
    buf.push_str(content);
    buf.push_str("</section>\n</body>\n</html>\n");
    buf
}

/// Page showing an item in an open modal dialog
pub fn render_modal_page(title: &str, fragment: &str) -> String {
    let mut buf = String::new();
    page_head(&mut buf, title);
    buf.push_str("<dialog open class=\"news-modal\">\n");
    buf.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    buf.push_str(fragment);
    buf.push_str("<form method=\"dialog\"><button>Close</button></form>\n");
    buf.push_str("</dialog>\n</body>\n</html>\n");
    buf
}

/// Standalone detail page for an item
pub fn render_detail_page(read_more: &ReadMore) -> String {
    let mut buf = String::new();
    page_head(&mut buf, &read_more.title);
    buf.push_str("<article class=\"news-single\">\n");
    buf.push_str(&format!("<h1>{}</h1>\n", escape(&read_more.title)));
    buf.push_str(&modal_fragment(read_more));
    buf.push_str("</article>\n</body>\n</html>\n");
    buf
}
