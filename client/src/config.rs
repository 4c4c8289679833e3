//! Remote API location shared by the host and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads `MENTUTOR_API_BASE_URL` at startup, provides an
//! [`ApiConfig`] to the SSR render through context, and the shell writes the
//! same value into a `<meta>` tag. The browser bundle has no environment, so
//! on hydrate it reads the tag back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `name` of the shell `<meta>` tag that carries the API base URL.
pub const API_BASE_META_NAME: &str = "mentutor-api-base";

/// Where REST calls go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config, dropping trailing slashes and falling back to the
    /// default for blank input.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base_url: DEFAULT_API_BASE_URL.to_owned() };
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Join an endpoint path onto the base URL with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the base URL from the shell `<meta>` tag.
    ///
    /// Falls back to [`ApiConfig::default`] off the browser or when the tag
    /// is missing.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{API_BASE_META_NAME}\"]"))
                        .ok()
                        .flatten()
                })
                .and_then(|el| el.get_attribute("content"));
            content.map_or_else(Self::default, |raw| Self::new(&raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
