//! Error type shared by the config loader and the browser glue.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// `localStorage` is missing or blocked, or a write to it was refused
    /// (quota exceeded, private mode).
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// The `data-site-config` override is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// A `web-sys` call threw, e.g. an invalid selector or a rejected
    /// attribute or listener.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
