//! The [`Vehicle`] / [`Car`] hierarchy and the shared [`Describe`] capability.
//!
//! # Architecture Note
//! The source domain models "Car IS-A Vehicle" as class inheritance. Rust has
//! no inheritance, so we express the same relationship with two cooperating
//! mechanisms:
//!
//! - **Composition**: [`Car`] *contains* a [`Vehicle`] and owns its extra
//!   state (`model`). Shared behavior is delegation, not subclassing.
//! - **A capability trait**: [`Describe`] is the polymorphic seam. Any code
//!   that only needs descriptive text can take `&dyn Describe` (or
//!   `impl Describe`) and accept either type.
//!
//! Both types are constructed once and immutable thereafter; there are no
//! setters, and the fields stay private so the description format remains the
//! only public surface.

use serde::{Deserialize, Serialize};

/// Capability shared by every describable entity in the hierarchy.
pub trait Describe {
    /// A one-line human-readable description of the entity.
    fn info(&self) -> String;
}

/// A vehicle identified by manufacturer and model year.
///
/// Any string and any year are accepted, including empty strings and
/// negative years; the type imposes no validation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    /// Creates a new vehicle. Construction is the only way to set state.
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }
}

impl Describe for Vehicle {
    fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

/// A car: a [`Vehicle`] plus a model designation.
///
/// Composes a `Vehicle` rather than inheriting from it; the base description
/// is reused by delegation, so `Car` and `Vehicle` render identical `info()`
/// text for the same make and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    /// Creates a new car from the base vehicle fields plus a model name.
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    /// A one-line description of the model, complementing [`Describe::info`].
    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl Describe for Car {
    /// Delegates to the composed [`Vehicle`] — the "inherited" behavior.
    fn info(&self) -> String {
        self.vehicle.info()
    }
}
