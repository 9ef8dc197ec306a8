//! The [`Day`] enumeration consumed by the [`days`](crate::days) module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week.
///
/// # Architecture Note
/// Only *equality* is part of the contract. The discriminant values and the
/// declaration order are implementation details; nothing in this crate (and
/// nothing downstream should) relies on the numeric value of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days, handy for exhaustive iteration in demos and tests.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The Debug name is the display name for a fieldless enum.
        write!(f, "{self:?}")
    }
}
