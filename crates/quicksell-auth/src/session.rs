//! Session capability and its HTTP implementation.

use quicksell_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// The authenticated identity of the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Capability exposing the current session to the rest of the app.
///
/// Passed explicitly to the views that need it rather than read from
/// ambient context.
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<&AuthUser>;

    /// End the session. Failures are swallowed; there is no error path
    /// for sign-out.
    async fn sign_out(&self);
}

/// Connection settings for the auth endpoint.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the backend project, without a trailing slash.
    pub base_url: String,
    /// Public (anon) API key.
    pub anon_key: String,
}

/// HTTP session provider against a GoTrue-style auth endpoint.
///
/// The access token is handed in at construction (the login flow that
/// mints it lives outside this app). [`AuthClient::load_user`] resolves
/// the user behind the token once; an invalid or absent token is just a
/// signed-out state.
#[derive(Debug, Clone)]
pub struct AuthClient {
    config: AuthConfig,
    access_token: Option<String>,
    user: Option<AuthUser>,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            access_token: None,
            user: None,
        }
    }

    // A client per request keeps this type plain data; on wasm a held
    // reqwest::Client would make it !Send.
    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    /// Attach a session access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The session access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Resolve the user behind the access token.
    ///
    /// Returns `Ok(None)` when there is no token; a rejected token is an
    /// error the caller may treat as signed-out.
    pub async fn load_user(&mut self) -> Result<Option<&AuthUser>, AuthError> {
        let Some(token) = self.access_token.clone() else {
            return Ok(None);
        };
        let resp = self
            .http()
            .get(self.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&token)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AuthError::Http {
                status: status.as_u16(),
                message,
            });
        }
        let user: AuthUser = resp.json().await?;
        tracing::debug!(user = %user.id, "session resolved");
        self.user = Some(user);
        Ok(self.user.as_ref())
    }
}

impl SessionProvider for AuthClient {
    fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    async fn sign_out(&self) {
        let Some(token) = &self.access_token else {
            return;
        };
        let result = self
            .http()
            .post(self.auth_url("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await;
        if let Err(e) = result {
            tracing::warn!(error = %e, "sign-out request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AuthClient {
        AuthClient::new(AuthConfig {
            base_url: "https://example.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn auth_urls_normalize_trailing_slash() {
        let c = client();
        assert_eq!(c.auth_url("user"), "https://example.supabase.co/auth/v1/user");
    }

    #[test]
    fn no_user_without_a_token() {
        let c = client();
        assert_eq!(c.access_token(), None);
        assert!(c.current_user().is_none());
    }

    #[tokio::test]
    async fn load_user_without_token_is_signed_out() {
        let mut c = client();
        let user = c.load_user().await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn sign_out_without_token_is_a_no_op() {
        // Must complete without touching the network.
        client().sign_out().await;
    }

    #[test]
    fn auth_user_deserializes_gotrue_shape() {
        let json = r#"{"id": "u-1", "email": "ada@example.com", "role": "authenticated"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new("u-1"));
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }
}
