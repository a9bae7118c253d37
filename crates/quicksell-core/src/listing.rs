//! The enriched product view-model the feed renders.

use crate::product::Product;
use crate::profile::SellerProfile;
use serde::{Deserialize, Serialize};

/// Fallback seller label when no profile resolves.
pub const ANONYMOUS_SELLER: &str = "Anonymous Seller";

/// A product merged with its seller's display profile.
///
/// Ephemeral: recomputed on every feed fetch, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub product: Product,
    /// Resolved seller profile; `None` renders as [`ANONYMOUS_SELLER`].
    pub seller: Option<SellerProfile>,
}

impl Listing {
    pub fn new(product: Product, seller: Option<SellerProfile>) -> Self {
        Self { product, seller }
    }

    /// Seller display name with the anonymous fallback applied.
    pub fn seller_name(&self) -> &str {
        self.seller
            .as_ref()
            .and_then(|p| p.display_name())
            .unwrap_or(ANONYMOUS_SELLER)
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.product.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, UserId};
    use crate::product::Condition;
    use chrono::Utc;

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            title: "Desk Lamp".to_string(),
            description: None,
            price: 15.5,
            image_url: None,
            category: None,
            condition: Condition::New,
            is_sold: false,
            created_at: Utc::now(),
            seller_id: UserId::new("u-1"),
        }
    }

    #[test]
    fn missing_profile_is_anonymous() {
        let listing = Listing::new(product(), None);
        assert_eq!(listing.seller_name(), ANONYMOUS_SELLER);
    }

    #[test]
    fn profile_without_names_is_anonymous() {
        let seller = SellerProfile {
            id: UserId::new("u-1"),
            username: None,
            full_name: None,
        };
        let listing = Listing::new(product(), Some(seller));
        assert_eq!(listing.seller_name(), ANONYMOUS_SELLER);
    }

    #[test]
    fn full_name_wins_over_username() {
        let seller = SellerProfile {
            id: UserId::new("u-1"),
            username: Some("ada".to_string()),
            full_name: Some("Ada Lovelace".to_string()),
        };
        let listing = Listing::new(product(), Some(seller));
        assert_eq!(listing.seller_name(), "Ada Lovelace");
    }

    #[test]
    fn price_renders_two_decimals() {
        let listing = Listing::new(product(), None);
        assert_eq!(listing.price_display(), "$15.50");
    }
}
