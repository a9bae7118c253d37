//! Reactive session handle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use quicksell_auth::{AuthClient, AuthUser, SessionProvider};

/// The session capability the views receive as a prop.
///
/// Wraps the auth client in a pair of signals so components can react to
/// the user resolving or signing out.
#[derive(Clone)]
pub struct SessionHandle {
    auth: AuthClient,
    user: RwSignal<Option<AuthUser>>,
    loading: RwSignal<bool>,
}

impl SessionHandle {
    /// Create the handle and kick off the one-time user lookup.
    pub fn bootstrap(auth: AuthClient) -> Self {
        let handle = Self {
            auth: auth.clone(),
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        };
        let user = handle.user;
        let loading = handle.loading;
        let mut auth = auth;
        spawn_local(async move {
            match auth.load_user().await {
                Ok(resolved) => user.set(resolved.cloned()),
                Err(e) => {
                    // A rejected token is a signed-out state, not an error
                    // the user needs to see.
                    tracing::warn!(error = %e, "session lookup failed");
                }
            }
            loading.set(false);
        });
        handle
    }

    /// Whether the initial user lookup is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// The signed-in user, tracked reactively.
    pub fn user(&self) -> Option<AuthUser> {
        self.user.get()
    }

    /// End the session: clear the local user, then notify the backend
    /// (fire-and-forget).
    ///
    /// The local clear happens before the logout request so that views
    /// reading [`SessionHandle::user`] see the signed-out state the
    /// moment the caller returns. Sign-out has no error path.
    pub fn sign_out(&self) {
        self.user.set(None);
        if self.auth.access_token().is_some() {
            let auth = self.auth.clone();
            spawn_local(async move { auth.sign_out().await });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicksell_auth::AuthConfig;
    use quicksell_core::UserId;

    fn signed_in_handle() -> SessionHandle {
        let auth = AuthClient::new(AuthConfig {
            base_url: "http://localhost:54321".to_string(),
            anon_key: "anon".to_string(),
        });
        SessionHandle {
            auth,
            user: RwSignal::new(Some(AuthUser {
                id: UserId::new("u-1"),
                email: None,
            })),
            loading: RwSignal::new(false),
        }
    }

    #[test]
    fn sign_out_clears_the_user_before_returning() {
        // A landing page mounted right after sign-out must observe a
        // signed-out session, not the stale user, or its signed-in
        // redirect bounces the user straight back to the feed.
        let session = signed_in_handle();
        session.sign_out();
        assert!(session.user().is_none());
    }
}
