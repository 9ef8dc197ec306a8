//! The [`Product`] data type consumed by the [`pricing`](crate::pricing) module.

use serde::{Deserialize, Serialize};

/// A product with a comparable price.
///
/// The price is expected to be a finite number; ties between equal prices are
/// resolved by the consumer (see [`pricing::most_expensive`](crate::pricing::most_expensive)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new product.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Product price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
