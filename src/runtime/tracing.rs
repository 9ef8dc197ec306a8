//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the crate's demo
//! binary and for any application embedding the library.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The library itself never initializes a subscriber — it
//! only emits events — so embedders stay in control of their own logging.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`),
//! keeping log lines short while still carrying structured fields.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show per-call debug events from the utility modules
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=utility_recipe::delayed=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, each utility logs one structured event per call,
//! e.g.:
//!
//! ```text
//! DEBUG filter_by_rating total=4 kept=3
//! DEBUG process_value value=Text("hello") result=5.0
//! DEBUG Scheduling square n=5.0 delay_ms=1000
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - keeps demo output compact
        .compact()
        .init();
}
