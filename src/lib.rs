#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Utility Recipe
//!
//! > **A Recipe for Small, Self-Contained Utilities in Rust.**
//!
//! This crate is a collection of eight independent, stateless utilities —
//! the kind of small functions every codebase accumulates — each written the
//! way a production Rust crate would write it: tagged variants instead of
//! runtime type inspection, composition instead of inheritance, `Result`
//! instead of exceptions, and `tracing` instrumentation throughout.
//!
//! ## 🏗️ Design Philosophy
//!
//! No utility calls another and none holds shared state; composition happens
//! only at the level of "library of independent utilities". What ties the
//! crate together is not architecture but *idiom*:
//!
//! - **Closed domains over runtime checks**: where the original shape of a
//!   problem is "a value that might be a string or a number", we model it as
//!   an enum ([`values::ScalarValue`]) and push validation to the boundary.
//! - **Composition over inheritance**: [`model::Car`] IS-A
//!   [`model::Vehicle`] for description purposes, expressed by embedding and
//!   a shared [`model::Describe`] trait rather than subclassing.
//! - **Errors are values**: the two fallible operations return `thiserror`
//!   enums ([`delayed::SquareError`], [`values::ValueError`]); nothing here
//!   panics on bad input.
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: Pure data structures ([`model::RatedItem`],
//!   [`model::Product`], [`model::Vehicle`]/[`model::Car`], [`model::Day`]).
//! - **[`casing`]**: Uppercase/lowercase text formatting with a typed
//!   [`casing::Case`] flag.
//! - **[`ratings`]**: Threshold filtering of rated items, order-preserving.
//! - **[`sequences`]**: One-level flattening, with a variadic
//!   [`concatenate!`] macro front-end.
//! - **[`values`]**: The text-or-number transform and its
//!   [`TryFrom`]-based JSON boundary.
//! - **[`pricing`]**: First-wins maximum-price reduction.
//! - **[`days`]**: Weekend/weekday classification.
//! - **[`delayed`]**: The one async recipe — a timer-delayed square with
//!   synchronous input validation.
//! - **[`runtime`]**: Tracing setup for the demo binary and embedders.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use utility_recipe::model::{Car, Describe, Day, Product};
//! use utility_recipe::{casing, days, pricing};
//!
//! assert_eq!(casing::format_default("abc"), "ABC");
//! assert_eq!(Car::new("Toyota", 2020, "Corolla").info(), "Make: Toyota, Year: 2020");
//! assert_eq!(days::day_type(Day::Saturday).to_string(), "Weekend");
//!
//! let products = [Product::new("Laptop", 999.0), Product::new("Phone", 699.0)];
//! assert_eq!(pricing::most_expensive(&products).unwrap().name, "Laptop");
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod casing;
pub mod days;
pub mod delayed;
pub mod model;
pub mod pricing;
pub mod ratings;
pub mod runtime;
pub mod sequences;
pub mod values;

pub use casing::Case;
pub use days::DayType;
pub use delayed::{square_after_delay, SquareError, SQUARE_DELAY};
pub use model::{Car, Day, Describe, Product, RatedItem, Vehicle};
pub use values::{ScalarValue, ValueError};
