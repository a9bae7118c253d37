//! Product row type and condition enum.

use crate::ids::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physical condition of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    /// Brand new, unused.
    #[default]
    #[serde(rename = "new")]
    New,
    /// Used but indistinguishable from new.
    #[serde(rename = "like-new")]
    LikeNew,
    /// Used with minor wear.
    #[serde(rename = "good")]
    Good,
    /// Noticeable wear, fully functional.
    #[serde(rename = "fair")]
    Fair,
    /// Heavy wear or defects.
    #[serde(rename = "poor")]
    Poor,
}

impl Condition {
    /// All conditions, in the order the form offers them.
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// Wire string, as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Condition::New),
            "like-new" => Some(Condition::LikeNew),
            "good" => Some(Condition::Good),
            "fair" => Some(Condition::Fair),
            "poor" => Some(Condition::Poor),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

/// A product row as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Full description.
    pub description: Option<String>,
    /// Asking price in dollars.
    pub price: f64,
    /// Optional image URL (free text, no upload handling).
    pub image_url: Option<String>,
    /// Optional category label.
    pub category: Option<String>,
    /// Item condition.
    pub condition: Condition,
    /// Whether the item has been sold. Sold rows are filtered out of the
    /// feed server-side; the flag still renders as an overlay if present.
    #[serde(default)]
    pub is_sold: bool,
    /// Creation timestamp; the feed is ordered by this, newest first.
    pub created_at: DateTime<Utc>,
    /// The seller's user ID.
    pub seller_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_wire_strings() {
        for c in Condition::ALL {
            assert_eq!(Condition::parse(c.as_str()), Some(c));
        }
        assert_eq!(Condition::parse("mint"), None);
        assert_eq!(Condition::default(), Condition::New);
    }

    #[test]
    fn condition_serde_matches_wire() {
        let json = serde_json::to_string(&Condition::LikeNew).unwrap();
        assert_eq!(json, "\"like-new\"");
        let back: Condition = serde_json::from_str("\"poor\"").unwrap();
        assert_eq!(back, Condition::Poor);
    }

    #[test]
    fn product_row_deserializes() {
        let json = r#"{
            "id": "p-1",
            "title": "Desk Lamp",
            "description": "Barely used",
            "price": 15.5,
            "image_url": null,
            "category": "Furniture",
            "condition": "good",
            "is_sold": false,
            "created_at": "2024-03-01T12:00:00Z",
            "seller_id": "u-1"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.title, "Desk Lamp");
        assert_eq!(p.price, 15.5);
        assert_eq!(p.condition, Condition::Good);
        assert!(!p.is_sold);
    }
}
