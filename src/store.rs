//! Role store lookup over the hosted backend's REST query API

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// A stored role row as returned by the backend.
///
/// The `role` column is nullable; an unset value is treated the same as a
/// missing row by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRole {
    #[serde(default)]
    pub role: Option<String>,
}

/// Remote lookup from user identifier to stored role
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Fetch the role row for `user_id`. At most one row is expected.
    async fn lookup(&self, user_id: &str) -> Result<Option<StoredRole>>;
}

/// Role store backed by the AgriLink hosted backend's REST endpoint.
///
/// Issues a single GET against the `user_roles` table, selecting only the
/// `role` column, filtered by user id. Authentication is the backend API key
/// plus an optional session bearer token.
#[derive(Debug, Clone)]
pub struct HttpRoleStore {
    config: Arc<Config>,
    http_client: reqwest::Client,
}

impl HttpRoleStore {
    /// Create a new store with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn lookup_url(&self, user_id: &str) -> String {
        format!(
            "{}/rest/v1/user_roles?select=role&user_id=eq.{}",
            self.config.base_url,
            urlencoding::encode(user_id)
        )
    }
}

#[async_trait]
impl RoleStore for HttpRoleStore {
    async fn lookup(&self, user_id: &str) -> Result<Option<StoredRole>> {
        let mut builder = self.http_client.get(self.lookup_url(user_id));

        if let Some(ref api_key) = self.config.api_key {
            builder = builder.header("apikey", api_key);
        }
        if let Some(ref token) = self.config.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_status(status, body));
        }

        let body = response.text().await?;
        let mut rows: Vec<StoredRole> = serde_json::from_str(&body)?;

        if rows.len() > 1 {
            return Err(Error::MultipleRows {
                user_id: user_id.to_string(),
                count: rows.len(),
            });
        }

        Ok(rows.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_escapes_user_id() {
        let store = HttpRoleStore::new(Config::new("https://backend.agrilink.example")).unwrap();

        assert_eq!(
            store.lookup_url("u1"),
            "https://backend.agrilink.example/rest/v1/user_roles?select=role&user_id=eq.u1"
        );
        assert_eq!(
            store.lookup_url("a b/c"),
            "https://backend.agrilink.example/rest/v1/user_roles?select=role&user_id=eq.a%20b%2Fc"
        );
    }

    #[test]
    fn test_stored_role_tolerates_null_column() {
        let row: StoredRole = serde_json::from_str("{\"role\": null}").unwrap();
        assert!(row.role.is_none());

        let row: StoredRole = serde_json::from_str("{}").unwrap();
        assert!(row.role.is_none());
    }
}
