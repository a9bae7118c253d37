//! PostgREST query-fragment builders.
//!
//! Pure helpers that assemble the filter/order fragments the store sends,
//! kept out of the HTTP code so they can be unit tested.

use quicksell_core::{Product, UserId};

/// Query pairs for the unsold-products feed: server-side sold filter,
/// newest first.
pub fn unsold_products_query() -> [(&'static str, &'static str); 3] {
    [
        ("select", "*"),
        ("is_sold", "eq.false"),
        ("order", "created_at.desc"),
    ]
}

/// `in.(...)` filter over a set of user IDs.
///
/// Every value is double-quoted: PostgREST treats bare commas and
/// parentheses inside the list as syntax, so quoting keeps the filter
/// well-formed for arbitrary ID strings.
pub fn id_in_filter(ids: &[UserId]) -> String {
    let joined = ids
        .iter()
        .map(|id| quote(id.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({joined})")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Distinct seller IDs in page order, for the batched profile lookup.
pub fn distinct_seller_ids(products: &[Product]) -> Vec<UserId> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.seller_id) {
            seen.push(p.seller_id.clone());
        }
    }
    seen
}
