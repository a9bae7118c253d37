//! Seller profile projection.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Read-only projection of a seller's public profile.
///
/// Owned by the backend; the feed only reads it to resolve a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerProfile {
    /// Profile ID, same namespace as the auth user ID.
    pub id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SellerProfile {
    /// Display name: full name takes precedence over username.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.as_deref().filter(|s| !s.is_empty()))
    }
}
