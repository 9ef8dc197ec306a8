//! The [`RatedItem`] data type consumed by the [`ratings`](crate::ratings) module.

use serde::{Deserialize, Serialize};

/// An item carrying a user rating, e.g. a review entry.
///
/// No invariant is enforced beyond the rating being a finite number;
/// construction is infallible and the fields are plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    /// Creates a new rated item.
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}
