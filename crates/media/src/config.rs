//! Media configuration sourced from the process environment.

use std::env;

/// Origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.design-ecourses.com";

/// Environment variable overriding the media base URL.
const PUBLIC_URL_VAR: &str = "ECOURSES_PUBLIC_URL";

/// Environment variable switching on media-path debug logging.
const DEBUG_MEDIA_VAR: &str = "ECOURSES_DEBUG_MEDIA";

/// Run-mode indicator; `development` also switches on debug logging.
const RUN_MODE_VAR: &str = "RUN_MODE";

/// Configuration for media-path resolution.
///
/// The base URL is propagated as-is: no validation happens here, so a
/// misconfigured value yields malformed (but still well-formed string) URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    base_url: String,
    debug: bool,
}

impl MediaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read configuration from the environment.
    ///
    /// `ECOURSES_PUBLIC_URL` overrides the default origin; an absent or empty
    /// value falls back to [`DEFAULT_BASE_URL`]. Debug logging turns on when
    /// `ECOURSES_DEBUG_MEDIA` is truthy or `RUN_MODE` is `development`.
    /// Infallible: absence is a normal case handled by the fallbacks.
    pub fn from_env() -> Self {
        let base_url = env::var(PUBLIC_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let debug = env::var(DEBUG_MEDIA_VAR).is_ok_and(|v| is_truthy(&v))
            || env::var(RUN_MODE_VAR).is_ok_and(|v| v == "development");

        Self { base_url, debug }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
