//! Client-side feed filter.

use crate::listing::Listing;

/// Filter listings by a live search query.
///
/// Case-insensitive substring match against title, description, or
/// category. An empty or whitespace-only query returns the full sequence
/// unchanged. Pure: the result is always an order-preserving subset of the
/// input, recomputed deterministically from (listings, query).
pub fn filter_listings(listings: &[Listing], query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings.to_vec();
    }
    listings
        .iter()
        .filter(|l| matches_query(l, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be trimmed and lowercased.
fn matches_query(listing: &Listing, needle: &str) -> bool {
    let p = &listing.product;
    p.title.to_lowercase().contains(needle)
        || p.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || p.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, UserId};
    use crate::product::{Condition, Product};
    use chrono::Utc;

    fn listing(title: &str, description: Option<&str>, category: Option<&str>) -> Listing {
        Listing::new(
            Product {
                id: ProductId::new(title),
                title: title.to_string(),
                description: description.map(String::from),
                price: 10.0,
                image_url: None,
                category: category.map(String::from),
                condition: Condition::Good,
                is_sold: false,
                created_at: Utc::now(),
                seller_id: UserId::new("u-1"),
            },
            None,
        )
    }

    fn feed() -> Vec<Listing> {
        vec![
            listing("Bike", Some("Mountain bike, barely used"), Some("Sports")),
            listing("Book", None, Some("Media")),
            listing("Lamp", Some("Reads BOOKs by it"), None),
        ]
    }

    #[test]
    fn blank_query_is_identity() {
        let items = feed();
        assert_eq!(filter_listings(&items, ""), items);
        assert_eq!(filter_listings(&items, "   "), items);
        assert_eq!(filter_listings(&items, "\t\n"), items);
    }

    #[test]
    fn matches_are_case_insensitive_and_order_preserving() {
        let items = feed();
        let hits = filter_listings(&items, "bo");
        let titles: Vec<_> = hits.iter().map(|l| l.product.title.as_str()).collect();
        // "Book" by title, "Lamp" by description; "Bike" does not match.
        assert_eq!(titles, vec!["Book", "Lamp"]);
    }

    #[test]
    fn matches_category() {
        let items = feed();
        let hits = filter_listings(&items, "sports");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.title, "Bike");
    }

    #[test]
    fn no_match_yields_empty() {
        let items = feed();
        assert!(filter_listings(&items, "zzz").is_empty());
    }

    #[test]
    fn every_hit_matches_somewhere() {
        let items = feed();
        for hit in filter_listings(&items, "b") {
            let p = &hit.product;
            let any = p.title.to_lowercase().contains('b')
                || p.description.as_deref().is_some_and(|d| d.to_lowercase().contains('b'))
                || p.category.as_deref().is_some_and(|c| c.to_lowercase().contains('b'));
            assert!(any, "{} should not have matched", p.title);
        }
    }
}
