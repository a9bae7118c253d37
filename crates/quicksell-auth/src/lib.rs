//! Session capability for QuickSell.
//!
//! Authentication itself is the hosted backend's job; this crate only
//! exposes the current user and a sign-out action as an explicitly passed
//! capability object, so nothing else in the app depends on ambient auth
//! state.

mod error;
mod session;

pub use error::AuthError;
pub use session::{AuthClient, AuthConfig, AuthUser, SessionProvider};
