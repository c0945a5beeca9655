//! Client configuration

use std::time::Duration;

/// Default administrator email.
///
/// An identity whose email matches the configured administrator email resolves
/// to `Role::Admin` without a store lookup. Deployments should override this
/// with [`Config::with_admin_email`] rather than relying on the default.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@agrilink.example";

/// Configuration for the AgriLink roles client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the AgriLink hosted backend
    pub base_url: String,

    /// Backend API key, sent as the `apikey` header
    pub api_key: Option<String>,

    /// Bearer token for the signed-in session (optional)
    pub bearer_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Administrator email for the override path
    pub admin_email: String,
}

impl Config {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            bearer_token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("AgriLink-Roles-Rust/{}", env!("CARGO_PKG_VERSION")),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }

    /// Set the backend API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the bearer token for the signed-in session
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the administrator email. The comparison against identity
    /// emails is exact and case-sensitive.
    pub fn with_admin_email(mut self, admin_email: impl Into<String>) -> Self {
        self.admin_email = admin_email.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("https://backend.agrilink.example");
        assert_eq!(config.admin_email, DEFAULT_ADMIN_EMAIL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("https://backend.agrilink.example")
            .with_api_key("anon-key")
            .with_admin_email("ops@agrilink.example")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_key.as_deref(), Some("anon-key"));
        assert_eq!(config.admin_email, "ops@agrilink.example");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
