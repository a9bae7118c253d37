//! Backend connection settings.
//!
//! The app ships as a static wasm bundle, so configuration is baked in at
//! compile time via environment variables. Local defaults point at a local
//! backend instance.

use quicksell_auth::AuthConfig;
use quicksell_data::RemoteConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend project.
    pub base_url: String,
    /// Public (anon) API key.
    pub anon_key: String,
    /// Session access token, if a session exists. The login flow that
    /// mints it is outside this app.
    pub access_token: Option<String>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("QUICKSELL_BACKEND_URL")
                .unwrap_or("http://localhost:54321")
                .to_string(),
            anon_key: option_env!("QUICKSELL_ANON_KEY")
                .unwrap_or("dev-anon-key")
                .to_string(),
            access_token: option_env!("QUICKSELL_ACCESS_TOKEN").map(String::from),
        }
    }

    pub fn remote(&self) -> RemoteConfig {
        RemoteConfig {
            base_url: self.base_url.clone(),
            anon_key: self.anon_key.clone(),
        }
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            base_url: self.base_url.clone(),
            anon_key: self.anon_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_env_falls_back_to_local_defaults() {
        let config = AppConfig::from_build_env();
        assert!(!config.base_url.is_empty());
        assert!(!config.anon_key.is_empty());
        assert_eq!(config.remote().base_url, config.auth().base_url);
    }
}
