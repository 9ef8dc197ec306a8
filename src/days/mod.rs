//! Weekend/weekday classification of [`Day`] values.

use crate::model::Day;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two classification buckets, rendered as `"Weekday"` / `"Weekend"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

impl Day {
    /// Saturday and Sunday are the weekend; everything else is a weekday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

/// Classifies a day. Total over the seven-value domain; there is no error
/// case because the enum is closed.
pub fn day_type(day: Day) -> DayType {
    if day.is_weekend() {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_and_sunday_are_weekend() {
        assert_eq!(day_type(Day::Saturday), DayType::Weekend);
        assert_eq!(day_type(Day::Sunday), DayType::Weekend);
    }

    #[test]
    fn the_other_five_days_are_weekdays() {
        for day in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            assert_eq!(day_type(day), DayType::Weekday);
        }
    }

    #[test]
    fn display_matches_the_documented_text() {
        assert_eq!(day_type(Day::Saturday).to_string(), "Weekend");
        assert_eq!(day_type(Day::Monday).to_string(), "Weekday");
    }

    #[test]
    fn classification_is_total_over_all_seven_days() {
        for day in Day::ALL {
            // Every day lands in exactly one bucket.
            let class = day_type(day);
            assert_eq!(class == DayType::Weekend, day.is_weekend());
        }
    }
}
