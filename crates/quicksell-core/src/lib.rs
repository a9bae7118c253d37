//! Marketplace domain types and logic for QuickSell.
//!
//! This crate holds everything about the marketplace that can be expressed
//! without I/O or a UI framework:
//!
//! - **Catalog**: products, conditions, seller profiles
//! - **Listing**: the enriched product view-model the feed renders
//! - **Draft**: the new-listing form state machine and its validation
//! - **Search**: the client-side feed filter

pub mod draft;
pub mod ids;
pub mod listing;
pub mod product;
pub mod profile;
pub mod search;

pub use draft::{DraftError, ListingDraft, NewListing, SubmissionForm};
pub use ids::{ProductId, UserId};
pub use listing::Listing;
pub use product::{Condition, Product};
pub use profile::SellerProfile;
pub use search::filter_listings;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::draft::{DraftError, ListingDraft, NewListing, SubmissionForm};
    pub use crate::ids::{ProductId, UserId};
    pub use crate::listing::Listing;
    pub use crate::product::{Condition, Product};
    pub use crate::profile::SellerProfile;
    pub use crate::search::filter_listings;
}
