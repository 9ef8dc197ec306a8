//! Pure data structures consumed by the utility modules.
//!
//! Every type here is plain data: constructed by the caller, never persisted,
//! and owned for no longer than the caller holds it. Behavior lives in the
//! sibling modules ([`ratings`](crate::ratings), [`pricing`](crate::pricing),
//! [`days`](crate::days), ...); the one exception is the
//! [`Vehicle`]/[`Car`] pair, whose descriptive behavior is inseparable from
//! the hierarchy itself.

pub mod day;
pub mod product;
pub mod rated_item;
pub mod vehicle;

pub use day::*;
pub use product::*;
pub use rated_item::*;
pub use vehicle::*;
