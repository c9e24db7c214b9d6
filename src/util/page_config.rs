//! Client configuration from `<meta name="clarity-board:*">` tags.
//!
//! ERROR HANDLING
//! ==============
//! A malformed value is logged and the whole config falls back to defaults;
//! the board still loads against the same origin.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use board::config::BoardConfig;

/// Prefix shared by every configuration meta tag name.
pub const META_PREFIX: &str = "clarity-board:";

/// CSS selector for the meta tag carrying `key`.
pub fn meta_selector(key: &str) -> String {
    format!("meta[name=\"{META_PREFIX}{key}\"]")
}

/// Build config from a lookup, falling back to defaults on bad input.
pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> BoardConfig {
    match BoardConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            BoardConfig::default()
        }
    }
}

/// Read the page's config meta tags.
pub fn read() -> BoardConfig {
    resolve(meta_content)
}

fn meta_content(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.query_selector(&meta_selector(key)).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}
