//! Runtime support for applications embedding the library.
//!
//! The utility modules themselves are plain functions with no setup
//! requirements; what lives here is the infrastructure an *application*
//! wants around them:
//!
//! - **Observability setup**: [`setup_tracing`] initializes structured
//!   logging for the demo binary (libraries emit, applications subscribe).
//!
//! # Future Additions
//!
//! As the collection grows, this module may include:
//! - Configuration management
//! - Metrics collection

pub mod tracing;

pub use tracing::*;
