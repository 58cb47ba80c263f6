//! Client configuration.
//!
//! The only external setting is the REST base URL. In the browser it comes
//! from `<meta name="property-api-base" content="...">` when the host page
//! provides one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::util::format::NumberLocale;

pub const DEFAULT_API_BASE_URL: &str = "/api/properties";
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(5);
pub const API_BASE_META_NAME: &str = "property-api-base";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub toast_ttl: Duration,
    pub locale: NumberLocale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            toast_ttl: DEFAULT_TOAST_TTL,
            locale: NumberLocale::default(),
        }
    }
}

impl ClientConfig {
    /// Default config with the base URL override applied.
    ///
    /// A missing or blank override keeps [`DEFAULT_API_BASE_URL`].
    pub fn with_base_url(raw: Option<&str>) -> Self {
        Self { api_base_url: parse_base_url(raw), ..Self::default() }
    }

    /// Build config from the current document's meta tags.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::with_base_url(content.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => {
            let trimmed = url.trim_end_matches('/');
            if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
        }
        None => DEFAULT_API_BASE_URL.to_owned(),
    }
}
