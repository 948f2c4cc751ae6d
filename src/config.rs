//! Typed configuration for link building and play sessions.
//!
//! Everything has a sensible default; hosts override individual fields and
//! call [`Config::validate`] once at startup. There is no environment or file
//! layer: the page address is the only external input, and it arrives through
//! [`ShareConfig::from_page_url`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::consts::{DEFAULT_PAYLOAD_PARAM, DEFAULT_PLAY_ROUTE, TOAST_CLEAR_DELAY};

/// Characters that would break the `route?param=payload` fragment layout.
const RESERVED: [char; 4] = ['#', '?', '&', '='];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL must not contain a fragment: {0}")]
    BaseHasFragment(String),
    #[error("play route must start with '/' and contain no '#', '?', '&' or '=': {0:?}")]
    InvalidRoute(String),
    #[error("payload parameter must be non-empty and contain no '#', '?', '&' or '=': {0:?}")]
    InvalidParam(String),
    #[error("toast clear delay must be greater than zero")]
    ZeroToastDelay,
}

/// Where shareable links point and how the payload is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Page address without fragment, e.g. `https://example.com/puzzles/`.
    pub base_url: String,
    /// Fragment route of the player page.
    pub route: String,
    /// Query parameter name holding the payload.
    pub param: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            route: DEFAULT_PLAY_ROUTE.to_owned(),
            param: DEFAULT_PAYLOAD_PARAM.to_owned(),
        }
    }
}

impl ShareConfig {
    /// Default layout rooted at the current page, with any fragment dropped.
    #[must_use]
    pub fn from_page_url(href: &str) -> Self {
        let base = href.split_once('#').map_or(href, |(base, _)| base);
        Self { base_url: base.trim().to_owned(), ..Self::default() }
    }

    /// Check the fields against the link layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a base URL with a fragment, a route not
    /// starting with `/`, or an empty parameter name; route and parameter may
    /// not contain `#`, `?`, `&` or `=`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.contains('#') {
            return Err(ConfigError::BaseHasFragment(self.base_url.clone()));
        }
        if !self.route.starts_with('/') || self.route.contains(RESERVED) {
            return Err(ConfigError::InvalidRoute(self.route.clone()));
        }
        if self.param.is_empty() || self.param.contains(RESERVED) {
            return Err(ConfigError::InvalidParam(self.param.clone()));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub share: ShareConfig,
    /// How long non-terminal toasts stay up.
    pub toast_clear_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { share: ShareConfig::default(), toast_clear_delay: TOAST_CLEAR_DELAY }
    }
}

impl Config {
    /// Defaults rooted at the current page address.
    #[must_use]
    pub fn for_page(href: &str) -> Self {
        Self { share: ShareConfig::from_page_url(href), ..Self::default() }
    }

    /// Override the toast delay.
    #[must_use]
    pub fn with_toast_clear_delay(mut self, delay: Duration) -> Self {
        self.toast_clear_delay = delay;
        self
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.share.validate()?;
        if self.toast_clear_delay.is_zero() {
            return Err(ConfigError::ZeroToastDelay);
        }
        Ok(())
    }
}
