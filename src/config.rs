//! Application configuration from build-time environment variables.

use tracing::Level;

/// Used when neither the build environment nor the page supplies an origin
const FALLBACK_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin of the API, without trailing slash
    pub api_base_url: String,

    /// localStorage key holding the persisted session
    pub session_storage_key: String,

    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: FALLBACK_API_BASE_URL.to_string(),
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Create configuration from the build environment.
    ///
    /// # Environment Variables
    ///
    /// - `CROWDFUND_API_BASE_URL`: API origin (default: the page's origin)
    /// - `CROWDFUND_SESSION_KEY`: localStorage key (default: user)
    /// - `CROWDFUND_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CROWDFUND_API_BASE_URL"),
            option_env!("CROWDFUND_SESSION_KEY"),
            option_env!("CROWDFUND_LOG_LEVEL"),
            page_origin,
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        session_key: Option<&str>,
        log_level: Option<&str>,
        origin: impl FnOnce() -> Option<String>,
    ) -> Self {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .or_else(origin)
            .unwrap_or(defaults.api_base_url);

        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            session_storage_key: session_key
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .filter(|origin| origin.starts_with("http"))
}
