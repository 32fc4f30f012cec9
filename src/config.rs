//! Build-time Configuration
//!
//! The bundle is static, so configuration is baked in at compile time.

/// Local storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Viewport margin for lazy images (start loading slightly early)
pub const LAZY_ROOT_MARGIN: &str = "50px";

/// Page size requested by the task center
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Request timeout applied to every call
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every request path; empty means same origin
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Read `TASK_CENTER_API_BASE_URL` captured at build time
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("TASK_CENTER_API_BASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            ..Default::default()
        }
    }

    /// Join the base URL and a request path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Deploy hook secret, supplied at build time and never committed
pub fn webhook_secret() -> Option<&'static str> {
    option_env!("TASK_CENTER_WEBHOOK_SECRET").filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base() {
        let config = ApiConfig {
            base_url: "https://api.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.url_for("/api/tasks"), "https://api.example.com/api/tasks");
        assert_eq!(config.url_for("text"), "https://api.example.com/text");
    }

    #[test]
    fn test_url_for_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.url_for("/api/login"), "/api/login");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let config = ApiConfig {
            base_url: "https://api.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.url_for("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }
}
