//! New-listing form state and validation.

use crate::product::Condition;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error for a listing draft.
///
/// `Display` strings are user-facing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,

    #[error("description is required")]
    MissingDescription,

    #[error("price is required")]
    MissingPrice,

    /// The price field holds something that does not parse to a finite,
    /// non-negative number.
    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Raw form fields as the user typed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    /// Price as entered; validated on submit, never coerced.
    pub price: String,
    pub image_url: String,
    pub category: String,
    pub condition: Condition,
}

impl ListingDraft {
    /// The entered price, if it parses to a finite non-negative number.
    pub fn parsed_price(&self) -> Option<f64> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
    }

    /// Validate the draft, producing the insert payload.
    pub fn validate(&self) -> Result<NewListing, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.price.trim().is_empty() {
            return Err(DraftError::MissingPrice);
        }
        let price = self.parsed_price().ok_or(DraftError::InvalidPrice)?;

        Ok(NewListing {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: non_empty(&self.image_url),
            category: non_empty(&self.category),
            condition: self.condition,
        })
    }

    /// Whether the submit control should be enabled.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Validated payload for a product insert.
///
/// The seller ID is attached by the store at submission time from the
/// current session, not carried in the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub condition: Condition,
}

/// Submission state machine: Idle -> Submitting -> Idle.
///
/// Success clears the draft; failure keeps the entered values so the user
/// can retry.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub draft: ListingDraft,
    submitting: bool,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and enter the Submitting state.
    ///
    /// A draft that fails validation leaves the form Idle; the submit
    /// control should have been disabled, but the guard holds regardless.
    pub fn begin_submit(&mut self) -> Result<NewListing, DraftError> {
        let listing = self.draft.validate()?;
        self.submitting = true;
        Ok(listing)
    }

    /// Record the submission outcome and return to Idle.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.draft.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ListingDraft {
        ListingDraft {
            title: "Desk Lamp".to_string(),
            description: "Barely used".to_string(),
            price: "15.50".to_string(),
            image_url: String::new(),
            category: String::new(),
            condition: Condition::default(),
        }
    }

    #[test]
    fn valid_draft_produces_listing() {
        let listing = filled_draft().validate().unwrap();
        assert_eq!(listing.title, "Desk Lamp");
        assert_eq!(listing.description, "Barely used");
        assert_eq!(listing.price, 15.5);
        assert_eq!(listing.image_url, None);
        assert_eq!(listing.category, None);
        assert_eq!(listing.condition, Condition::New);
    }

    #[test]
    fn required_fields_gate_submission() {
        let mut d = filled_draft();
        d.title = "  ".to_string();
        assert_eq!(d.validate(), Err(DraftError::MissingTitle));

        let mut d = filled_draft();
        d.description.clear();
        assert_eq!(d.validate(), Err(DraftError::MissingDescription));

        let mut d = filled_draft();
        d.price.clear();
        assert_eq!(d.validate(), Err(DraftError::MissingPrice));
        assert!(!d.is_submittable());
    }

    #[test]
    fn malformed_price_is_rejected() {
        for bad in ["abc", "12abc", "NaN", "inf", "-1", "-0.01"] {
            let mut d = filled_draft();
            d.price = bad.to_string();
            assert_eq!(d.validate(), Err(DraftError::InvalidPrice), "price {bad:?}");
            assert!(!d.is_submittable(), "price {bad:?}");
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut d = filled_draft();
        d.price = "0".to_string();
        assert_eq!(d.validate().unwrap().price, 0.0);
    }

    #[test]
    fn optional_fields_normalize_to_none() {
        let mut d = filled_draft();
        d.image_url = "  ".to_string();
        d.category = "Books".to_string();
        let listing = d.validate().unwrap();
        assert_eq!(listing.image_url, None);
        assert_eq!(listing.category, Some("Books".to_string()));
    }

    #[test]
    fn success_clears_the_draft() {
        let mut form = SubmissionForm::new();
        form.draft = filled_draft();
        let listing = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(listing.price, 15.5);

        form.finish_submit(true);
        assert!(!form.is_submitting());
        assert_eq!(form.draft, ListingDraft::default());
    }

    #[test]
    fn failure_retains_entered_values() {
        let mut form = SubmissionForm::new();
        form.draft = filled_draft();
        form.begin_submit().unwrap();

        form.finish_submit(false);
        assert!(!form.is_submitting());
        assert_eq!(form.draft.title, "Desk Lamp");
        assert_eq!(form.draft.price, "15.50");
    }

    #[test]
    fn invalid_draft_never_enters_submitting() {
        let mut form = SubmissionForm::new();
        form.draft.title = "Lamp".to_string();
        assert!(form.begin_submit().is_err());
        assert!(!form.is_submitting());
    }
}
