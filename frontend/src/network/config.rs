use std::cell::RefCell;

/// API route configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::from_env());
}

impl ApiConfig {
    /// Read the base URL injected at build time via `API_BASE_URL`. Without
    /// it every call goes to the page's own origin.
    pub fn from_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) => Self::from_url(url),
            None => Self::default(),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Base URL for all API calls; empty means same-origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests to another origin need credentials included explicitly,
    /// otherwise the session cookie stays behind.
    pub fn is_cross_origin(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Full URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Replace the active configuration.
pub fn set_api_config(config: ApiConfig) {
    API_CONFIG.with(|c| *c.borrow_mut() = config);
}

/// Snapshot of the active configuration.
pub fn current() -> ApiConfig {
    API_CONFIG.with(|c| c.borrow().clone())
}
