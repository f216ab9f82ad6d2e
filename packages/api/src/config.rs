//! Backend endpoint configuration.
//!
//! The Django backend is addressed by a single base URL. The default points at a
//! local development server; release builds override it by setting the
//! `API_BASE_URL` environment variable at compile time.

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for the given base URL. A trailing slash is stripped so
    /// endpoint paths can be joined uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or("http://127.0.0.1:8000/api"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("http://localhost:8000/api/");
        assert_eq!(config.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert!(config.base_url().starts_with("http"));
        assert!(!config.base_url().ends_with('/'));
    }
}
