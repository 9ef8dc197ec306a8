//! Rating-threshold filtering over [`RatedItem`] collections.

use crate::model::RatedItem;
use tracing::debug;

/// Minimum rating an item must reach to pass the filter.
pub const RATING_THRESHOLD: f64 = 4.0;

/// Returns every item rated at or above [`RATING_THRESHOLD`], preserving the
/// original relative order.
///
/// An empty slice yields an empty vector; the input is never mutated. An item
/// sitting exactly on the threshold passes.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= RATING_THRESHOLD)
        .cloned()
        .collect();
    debug!(total = items.len(), kept = kept.len(), "filter_by_rating");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RatedItem> {
        vec![
            RatedItem::new("Good Book", 4.5),
            RatedItem::new("Average Book", 3.0),
            RatedItem::new("Great Book", 5.0),
            RatedItem::new("Borderline Book", 4.0),
        ]
    }

    #[test]
    fn keeps_only_items_at_or_above_threshold() {
        let kept = filter_by_rating(&sample());
        let titles: Vec<&str> = kept.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Good Book", "Great Book", "Borderline Book"]);
    }

    #[test]
    fn preserves_relative_order() {
        let items = vec![
            RatedItem::new("B", 5.0),
            RatedItem::new("A", 4.0),
            RatedItem::new("C", 4.9),
        ];
        let kept = filter_by_rating(&items);
        let titles: Vec<&str> = kept.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_by_rating(&[]).is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let items = sample();
        let before = items.clone();
        let _ = filter_by_rating(&items);
        assert_eq!(items, before);
    }
}
