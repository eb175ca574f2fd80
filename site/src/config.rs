use std::env;

/// Placeholder shown when a card image fails to load
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/500x300?text=No+Image";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Feed address; relative addresses resolve against `site_base_url`.
    /// When unset the feed is read from `feed_path` instead.
    pub feed_url: Option<String>,
    pub feed_path: String,
    pub site_base_url: String,
    /// Number of items shown on the home page
    pub preview_limit: usize,
    /// Length of the derived preview when an item has no excerpt
    pub excerpt_length: usize,
    pub placeholder_image: String,
    /// Page the read-more action falls back to without a modal
    pub detail_page: String,
    /// Whether the modal capability is offered to the item viewer
    pub modal_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_var("PORT", 8080),
            feed_url: env::var("FEED_URL").ok().filter(|v| !v.is_empty()),
            feed_path: env::var("FEED_PATH").unwrap_or_else(|_| "news.json".to_string()),
            site_base_url: env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            preview_limit: parse_var("PREVIEW_LIMIT", 3),
            excerpt_length: parse_var("EXCERPT_LENGTH", 120),
            placeholder_image: env::var("PLACEHOLDER_IMAGE")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
            detail_page: env::var("DETAIL_PAGE")
                .unwrap_or_else(|_| "news-single.html".to_string()),
            modal_enabled: env::var("NEWS_MODAL")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off" | "no"))
                .unwrap_or(true),
        }
    }

    /// Resolve the configured feed URL against the site base URL
    pub fn resolved_feed_url(&self) -> Option<String> {
        self.feed_url.as_ref().map(|url| {
            if url.starts_with("http://") || url.starts_with("https://") {
                url.clone()
            } else {
                format!(
                    "{}/{}",
                    self.site_base_url.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            feed_url: None,
            feed_path: "news.json".to_string(),
            site_base_url: "http://localhost:8080".to_string(),
            preview_limit: 3,
            excerpt_length: 120,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            detail_page: "news-single.html".to_string(),
            modal_enabled: true,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
