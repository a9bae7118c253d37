//! The feed loading and enrichment flow.

use quicksell_core::Listing;

use crate::error::FetchError;
use crate::query::distinct_seller_ids;
use crate::store::ProductStore;

/// Load the feed: fetch unsold products, resolve seller profiles in one
/// batched lookup, and merge.
///
/// Failure of the product query aborts the load. A failed profile lookup
/// is tolerated: every affected listing degrades to the anonymous-seller
/// fallback instead. Idempotent; repeated calls simply re-fetch current
/// state.
pub async fn load_feed<S: ProductStore>(store: &S) -> Result<Vec<Listing>, FetchError> {
    let products = store.list_unsold_products().await?;

    let seller_ids = distinct_seller_ids(&products);
    let profiles = match store.fetch_profiles(&seller_ids).await {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(error = %e, "profile lookup failed, rendering sellers anonymous");
            Default::default()
        }
    };

    Ok(products
        .into_iter()
        .map(|p| {
            let seller = profiles.get(&p.seller_id).cloned();
            Listing::new(p, seller)
        })
        .collect())
}
